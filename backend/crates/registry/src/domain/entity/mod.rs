//! Entity Module

pub mod marchamo;
pub mod revision;
pub mod vehicle;

pub use marchamo::Marchamo;
pub use revision::Revision;
pub use vehicle::Vehicle;
