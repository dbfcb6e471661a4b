//! Application Configuration
//!
//! Configuration for the Registry application layer.

/// Registry application configuration
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Page size used when the client does not send one
    pub default_page_size: i64,
    /// Upper bound for client-requested page sizes
    pub max_page_size: i64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_page_size: 50,
            max_page_size: 200,
        }
    }
}

impl RegistryConfig {
    /// Clamp a requested page size into `1..=max_page_size`
    pub fn clamp_limit(&self, requested: Option<i64>) -> i64 {
        match requested {
            Some(limit) => limit.clamp(1, self.max_page_size),
            None => self.default_page_size,
        }
    }

    /// Clamp a requested offset to be non-negative
    pub fn clamp_offset(&self, requested: Option<i64>) -> i64 {
        requested.unwrap_or(0).max(0)
    }
}
