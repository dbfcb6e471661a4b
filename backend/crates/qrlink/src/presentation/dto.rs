//! API DTOs (Data Transfer Objects)

use serde::Serialize;

// The verification endpoint answers with the registry's public lookup shape
pub use registry::presentation::dto::LookupResponse;

/// QR link response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrLinkResponse {
    pub plate: String,
    pub token: String,
    /// Absolute verification URL encoded in the QR code
    pub verify_url: String,
    /// QR code as base64-encoded PNG
    pub qr_png_base64: String,
}
