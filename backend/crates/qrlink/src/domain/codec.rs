//! Plate Token Codec
//!
//! Stateless, HMAC-SHA256 signed, non-expiring tokens binding a plate to an
//! integrity signature:
//!
//! ```text
//! base64url(normalized_plate) "." base64url(hmac_sha256(secret, normalized_plate))
//! ```
//!
//! Both segments use the URL-safe alphabet without padding, so a token can
//! ride in a URL path or a QR code unescaped.
//!
//! ## Invariants
//! - Validity is a pure function of (payload, secret); tokens carry no
//!   timestamp and never expire.
//! - Verification recomputes the MAC over the decoded payload and compares
//!   in constant time.
//! - Every failure collapses to the same `None`; callers cannot tell a
//!   malformed token from a forged one.

use platform::crypto::{constant_time_eq, from_base64url, hmac_sha256, to_base64url};

/// Issues and verifies signed plate tokens
///
/// Holds the signing secret for its whole lifetime. Changing the secret
/// invalidates every previously issued token.
pub struct PlateTokenCodec {
    secret: Vec<u8>,
}

impl PlateTokenCodec {
    /// Create a codec over an opaque secret
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Issue a token for a plate
    ///
    /// The plate is normalized (trimmed, upper-cased) before signing, so
    /// every spelling of the same plate produces the same token.
    pub fn issue(&self, plate: &str) -> String {
        let normalized = Self::normalize(plate);
        let signature = hmac_sha256(&self.secret, normalized.as_bytes());

        format!(
            "{}.{}",
            to_base64url(normalized.as_bytes()),
            to_base64url(&signature)
        )
    }

    /// Verify a token and return the embedded plate
    ///
    /// `None` for anything that is not a well-formed token carrying a
    /// matching signature. The payload comes back exactly as embedded;
    /// lookups re-normalize it.
    pub fn verify(&self, token: &str) -> Option<String> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 2 {
            return None;
        }

        let payload_bytes = from_base64url(parts[0]).ok()?;
        let payload = String::from_utf8(payload_bytes).ok()?;
        let signature = from_base64url(parts[1]).ok()?;

        let expected = hmac_sha256(&self.secret, payload.as_bytes());

        // Constant-time comparison
        if !constant_time_eq(&signature, &expected) {
            return None;
        }

        Some(payload)
    }

    /// Normalize a plate for signing and lookup (trim, uppercase)
    pub fn normalize(plate: &str) -> String {
        plate.trim().to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEV_SECRET: &[u8] = b"dev_secret_change_me";

    #[test]
    fn test_round_trip() {
        let codec = PlateTokenCodec::new(DEV_SECRET);

        for plate in ["ABC123", "abc123", "  cl-204857  ", "7"] {
            let token = codec.issue(plate);
            let payload = codec.verify(&token).expect("issued token must verify");
            assert_eq!(payload, PlateTokenCodec::normalize(plate));
        }
    }

    #[test]
    fn test_issue_is_deterministic() {
        let codec = PlateTokenCodec::new(DEV_SECRET);

        assert_eq!(codec.issue("ABC123"), codec.issue("ABC123"));
        // Normalization happens before signing
        assert_eq!(codec.issue("abc123"), codec.issue(" ABC123 "));
    }

    #[test]
    fn test_known_payload_segment() {
        let codec = PlateTokenCodec::new(DEV_SECRET);

        let token = codec.issue("abc123");
        let payload_segment = token.split('.').next().unwrap();
        assert_eq!(payload_segment, "QUJDMTIz");
        assert_eq!(from_base64url(payload_segment).unwrap(), b"ABC123");
    }

    #[test]
    fn test_garbage_signature_is_invalid() {
        let codec = PlateTokenCodec::new(DEV_SECRET);
        assert_eq!(codec.verify("QUJDMTIz.garbage"), None);
    }

    #[test]
    fn test_unstructured_text_is_invalid() {
        let codec = PlateTokenCodec::new(DEV_SECRET);
        assert_eq!(codec.verify("not-a-token"), None);
    }

    #[test]
    fn test_separator_count() {
        let codec = PlateTokenCodec::new(DEV_SECRET);
        let token = codec.issue("ABC123");

        assert_eq!(codec.verify(""), None);
        assert_eq!(codec.verify("."), None);
        assert_eq!(codec.verify(&format!("{token}.extra")), None);
    }

    #[test]
    fn test_verify_preserves_embedded_payload() {
        let codec = PlateTokenCodec::new(DEV_SECRET);

        // Hand-build a token over a lowercase payload. The signature is
        // genuine, so verify returns the payload exactly as embedded.
        let payload = "abc123";
        let signature = hmac_sha256(DEV_SECRET, payload.as_bytes());
        let token = format!(
            "{}.{}",
            to_base64url(payload.as_bytes()),
            to_base64url(&signature)
        );

        assert_eq!(codec.verify(&token).as_deref(), Some(payload));
    }
}
