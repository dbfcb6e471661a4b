//! Unit tests for QR Link crate
//! Target: C0 coverage 100%, C1 coverage 80%

#[cfg(test)]
mod codec_tests {
    use crate::domain::codec::PlateTokenCodec;
    use platform::crypto::{from_base64url, hmac_sha256, to_base64url};

    const DEV_SECRET: &[u8] = b"dev_secret_change_me";

    #[test]
    fn test_tampered_signature_every_byte() {
        let codec = PlateTokenCodec::new(DEV_SECRET);
        let token = codec.issue("CL-204857");
        let (payload_b64, signature_b64) = token.split_once('.').unwrap();
        let signature = from_base64url(signature_b64).unwrap();

        for i in 0..signature.len() {
            let mut tampered = signature.clone();
            tampered[i] ^= 0x01;
            let forged = format!("{}.{}", payload_b64, to_base64url(&tampered));
            assert_eq!(
                codec.verify(&forged),
                None,
                "flipping signature byte {i} must invalidate the token"
            );
        }
    }

    #[test]
    fn test_tampered_payload_keeps_signature() {
        let codec = PlateTokenCodec::new(DEV_SECRET);
        let token = codec.issue("ABC123");
        let (_, signature_b64) = token.split_once('.').unwrap();

        // Payload swapped for a different plate, signature left untouched
        let forged = format!("{}.{}", to_base64url(b"ABC124"), signature_b64);
        assert_eq!(codec.verify(&forged), None);
    }

    #[test]
    fn test_malformed_tokens() {
        let codec = PlateTokenCodec::new(DEV_SECRET);

        for token in [
            "",
            ".",
            "not-a-token",
            "a.b.c",
            "!!!.AAAA",
            "QUJDMTIz.!!!",
            "QUJDMTIz.",
            ".QUJDMTIz",
            "QUJDMTIz.garbage",
        ] {
            assert_eq!(codec.verify(token), None, "{token:?} must be invalid");
        }
    }

    #[test]
    fn test_secret_sensitivity() {
        let codec_a = PlateTokenCodec::new(DEV_SECRET);
        let codec_b = PlateTokenCodec::new(b"another_secret".to_vec());

        let token = codec_a.issue("ABC123");
        assert!(codec_a.verify(&token).is_some());
        assert_eq!(codec_b.verify(&token), None);
    }

    #[test]
    fn test_correctly_signed_non_utf8_payload_is_invalid() {
        let codec = PlateTokenCodec::new(DEV_SECRET);

        // Genuine signature over bytes that are not UTF-8 text
        let payload = [0xffu8, 0xfe, 0x41];
        let signature = hmac_sha256(DEV_SECRET, &payload);
        let token = format!("{}.{}", to_base64url(&payload), to_base64url(&signature));

        assert_eq!(codec.verify(&token), None);
    }

    #[test]
    fn test_token_is_url_safe() {
        let codec = PlateTokenCodec::new(DEV_SECRET);
        let token = codec.issue("CL-204857");

        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        );
        assert_eq!(token.matches('.').count(), 1);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(PlateTokenCodec::normalize("  abc123  "), "ABC123");
        assert_eq!(PlateTokenCodec::normalize("CL-204857"), "CL-204857");
        assert_eq!(PlateTokenCodec::normalize(""), "");
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::*;

    #[test]
    fn test_development_config() {
        let config = QrLinkConfig::development();

        assert_eq!(config.token_secret, b"dev_secret_change_me");
        assert!(config.public_base_url.starts_with("http://localhost"));
    }

    #[test]
    fn test_verify_url() {
        let config = QrLinkConfig {
            token_secret: b"s".to_vec(),
            public_base_url: "https://registro.example.cr".to_string(),
        };

        assert_eq!(
            config.verify_url("QUJDMTIz.dGVzdA"),
            "https://registro.example.cr/api/v/QUJDMTIz.dGVzdA"
        );
    }

    #[test]
    fn test_verify_url_trailing_slash() {
        let config = QrLinkConfig {
            token_secret: b"s".to_vec(),
            public_base_url: "https://registro.example.cr/".to_string(),
        };

        assert_eq!(config.verify_url("t"), "https://registro.example.cr/api/v/t");
    }
}

#[cfg(test)]
mod models_tests {
    use crate::presentation::dto::*;

    #[test]
    fn test_qr_link_response_serialization() {
        let response = QrLinkResponse {
            plate: "ABC123".to_string(),
            token: "QUJDMTIz.c2ln".to_string(),
            verify_url: "http://localhost:8080/api/v/QUJDMTIz.c2ln".to_string(),
            qr_png_base64: "aGVsbG8=".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("verifyUrl"));
        assert!(json.contains("qrPngBase64"));
        assert!(json.contains(r#""plate":"ABC123""#));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use registry::RegistryError;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(QrLinkError, StatusCode)> = vec![
            (QrLinkError::TokenInvalid, StatusCode::NOT_FOUND),
            (QrLinkError::VehicleNotFound, StatusCode::NOT_FOUND),
            (
                QrLinkError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                QrLinkError::Registry(RegistryError::PlateTaken),
                StatusCode::CONFLICT,
            ),
            (
                QrLinkError::Registry(RegistryError::Validation("bad".into())),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_not_found_family_is_indistinguishable() {
        // Clients must not learn whether the token or the plate was bad
        let invalid = QrLinkError::TokenInvalid.to_app_error();
        let unknown = QrLinkError::VehicleNotFound.to_app_error();

        assert_eq!(invalid.kind(), unknown.kind());
        assert_eq!(invalid.message(), unknown.message());
    }

    #[test]
    fn test_registry_delegation() {
        let err = QrLinkError::Registry(RegistryError::VehicleNotFound);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
