//! Domain Layer
//!
//! The plate token codec. Vehicle and record entities live in the
//! `registry` crate; this crate only binds plates to signed tokens.

pub mod codec;

pub use codec::PlateTokenCodec;
