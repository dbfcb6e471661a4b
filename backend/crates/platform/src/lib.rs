//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, URL-safe Base64, constant-time compare)
//! - QR code rendering (PNG)

pub mod crypto;
pub mod qr;
