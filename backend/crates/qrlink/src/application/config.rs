//! Application Configuration
//!
//! Configuration for the QR link application layer.

/// QR link application configuration
#[derive(Debug, Clone)]
pub struct QrLinkConfig {
    /// Token signing secret (opaque bytes, fixed for the process lifetime)
    pub token_secret: Vec<u8>,
    /// Base URL the verification links are built on
    pub public_base_url: String,
}

impl QrLinkConfig {
    /// Create config for development (fixed secret, local base URL)
    pub fn development() -> Self {
        Self {
            token_secret: b"dev_secret_change_me".to_vec(),
            public_base_url: "http://localhost:8080".to_string(),
        }
    }

    /// Build the public verification URL for a token
    pub fn verify_url(&self, token: &str) -> String {
        format!(
            "{}/api/v/{}",
            self.public_base_url.trim_end_matches('/'),
            token
        )
    }
}
