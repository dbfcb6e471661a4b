//! Unit tests for Registry crate
//! Target: C0 coverage 100%, C1 coverage 80%

#[cfg(test)]
mod config_tests {
    use crate::application::config::*;

    #[test]
    fn test_default_config() {
        let config = RegistryConfig::default();

        assert_eq!(config.default_page_size, 50);
        assert_eq!(config.max_page_size, 200);
    }

    #[test]
    fn test_clamp_limit() {
        let config = RegistryConfig::default();

        assert_eq!(config.clamp_limit(None), 50);
        assert_eq!(config.clamp_limit(Some(10)), 10);
        assert_eq!(config.clamp_limit(Some(200)), 200);
        assert_eq!(config.clamp_limit(Some(1000)), 200);
        assert_eq!(config.clamp_limit(Some(0)), 1);
        assert_eq!(config.clamp_limit(Some(-5)), 1);
    }

    #[test]
    fn test_clamp_offset() {
        let config = RegistryConfig::default();

        assert_eq!(config.clamp_offset(None), 0);
        assert_eq!(config.clamp_offset(Some(30)), 30);
        assert_eq!(config.clamp_offset(Some(-1)), 0);
    }
}

#[cfg(test)]
mod models_tests {
    use crate::application::lookup_vehicle::VehicleLookup;
    use crate::domain::entity::{Marchamo, Vehicle};
    use crate::domain::value_object::{MarchamoStatus, Plate, ValidityYear};
    use crate::presentation::dto::*;

    fn sample_vehicle() -> Vehicle {
        Vehicle::new(
            Plate::new("abc123").unwrap(),
            "Ana Rodríguez".to_string(),
            "Toyota".to_string(),
            "Corolla".to_string(),
            2019,
            Some("Gris".to_string()),
        )
    }

    #[test]
    fn test_vehicle_response_serialization() {
        let response = VehicleResponse::from(sample_vehicle());

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("vehicleId"));
        assert!(json.contains("ownerName"));
        assert!(json.contains("modelYear"));
        assert!(json.contains("createdAtMs"));
        assert!(json.contains(r#""plate":"ABC123""#));
    }

    #[test]
    fn test_vehicle_request_deserialization() {
        let json = r#"{
            "plate": "cl-204857",
            "ownerName": "Ana",
            "make": "Hyundai",
            "model": "Santa Fe",
            "modelYear": 2021
        }"#;
        let request: VehicleRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.plate, "cl-204857");
        assert_eq!(request.owner_name, "Ana");
        assert_eq!(request.model_year, 2021);
        assert!(request.color.is_none());
    }

    #[test]
    fn test_marchamo_response_serialization() {
        let vehicle = sample_vehicle();
        let marchamo = Marchamo::new(
            vehicle.vehicle_id,
            ValidityYear::new(2025).unwrap(),
            185000,
            MarchamoStatus::Paid,
        );

        let json = serde_json::to_string(&MarchamoResponse::from(marchamo)).unwrap();
        assert!(json.contains("marchamoId"));
        assert!(json.contains(r#""validYear":2025"#));
        assert!(json.contains(r#""amount":185000"#));
        assert!(json.contains(r#""status":"paid""#));
    }

    #[test]
    fn test_marchamo_request_deserialization() {
        let json = r#"{"validYear":2025,"amount":185000,"status":"pending"}"#;
        let request: MarchamoRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.valid_year, 2025);
        assert_eq!(request.amount, 185000);
        assert_eq!(request.status, "pending");
    }

    #[test]
    fn test_lookup_response_omits_owner() {
        let lookup = VehicleLookup {
            vehicle: sample_vehicle(),
            marchamos: vec![],
            revisiones: vec![],
        };

        let json = serde_json::to_string(&LookupResponse::from(lookup)).unwrap();
        assert!(json.contains(r#""plate":"ABC123""#));
        assert!(!json.contains("ownerName"));
        assert!(!json.contains("Ana"));
    }

    #[test]
    fn test_list_query_deserialization() {
        let query: ListQuery = serde_json::from_str(r#"{"limit":10,"offset":20}"#).unwrap();
        assert_eq!(query.limit, Some(10));
        assert_eq!(query.offset, Some(20));

        let query: ListQuery = serde_json::from_str("{}").unwrap();
        assert!(query.limit.is_none());
        assert!(query.offset.is_none());
    }
}

#[cfg(test)]
mod domain_tests {
    use crate::domain::entity::{Marchamo, Revision, Vehicle};
    use crate::domain::value_object::{
        MarchamoStatus, Plate, RevisionResult, ValidityYear,
    };

    fn sample_vehicle() -> Vehicle {
        Vehicle::new(
            Plate::new("bcr-042").unwrap(),
            "Luis Mora".to_string(),
            "Nissan".to_string(),
            "Frontier".to_string(),
            2017,
            None,
        )
    }

    #[test]
    fn test_vehicle_creation() {
        let vehicle = sample_vehicle();

        assert_eq!(vehicle.plate.as_str(), "BCR-042");
        assert_eq!(vehicle.model_year, 2017);
        assert_eq!(vehicle.created_at, vehicle.updated_at);
    }

    #[test]
    fn test_vehicle_update_details() {
        let mut vehicle = sample_vehicle();
        let plate_before = vehicle.plate.clone();

        vehicle.update_details(
            "Luis Mora Jiménez".to_string(),
            "Nissan".to_string(),
            "Frontier".to_string(),
            2018,
            Some("Blanco".to_string()),
        );

        assert_eq!(vehicle.plate, plate_before);
        assert_eq!(vehicle.owner_name, "Luis Mora Jiménez");
        assert_eq!(vehicle.model_year, 2018);
        assert!(vehicle.updated_at >= vehicle.created_at);
    }

    #[test]
    fn test_marchamo_creation_and_status() {
        let vehicle = sample_vehicle();
        let mut marchamo = Marchamo::new(
            vehicle.vehicle_id,
            ValidityYear::new(2024).unwrap(),
            150000,
            MarchamoStatus::Pending,
        );

        assert_eq!(marchamo.vehicle_id, vehicle.vehicle_id);
        assert!(!marchamo.status.is_settled());

        marchamo.set_status(MarchamoStatus::Paid);
        assert!(marchamo.status.is_settled());
        assert!(marchamo.updated_at >= marchamo.created_at);
    }

    #[test]
    fn test_revision_update_outcome() {
        let vehicle = sample_vehicle();
        let mut revision = Revision::new(
            vehicle.vehicle_id,
            ValidityYear::new(2024).unwrap(),
            RevisionResult::Failed,
            Some("Luces delanteras".to_string()),
        );

        assert!(revision.result.requires_reinspection());

        revision.update_outcome(
            ValidityYear::new(2024).unwrap(),
            RevisionResult::Passed,
            None,
        );

        assert!(revision.result.is_passing());
        assert!(revision.notes.is_none());
    }

    #[test]
    fn test_validity_year_bounds() {
        assert!(ValidityYear::new(1900).is_some());
        assert!(ValidityYear::new(2025).is_some());
        assert!(ValidityYear::new(2100).is_some());
        assert!(ValidityYear::new(1899).is_none());
        assert!(ValidityYear::new(2101).is_none());
    }

    #[test]
    fn test_status_code_roundtrip() {
        for status in [
            MarchamoStatus::Pending,
            MarchamoStatus::Paid,
            MarchamoStatus::Overdue,
        ] {
            assert_eq!(MarchamoStatus::from_code(status.code()), Some(status));
            assert_eq!(MarchamoStatus::from_id(status.id()), Some(status));
        }

        for result in [
            RevisionResult::Passed,
            RevisionResult::Failed,
            RevisionResult::Conditional,
        ] {
            assert_eq!(RevisionResult::from_code(result.code()), Some(result));
            assert_eq!(RevisionResult::from_id(result.id()), Some(result));
        }
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(RegistryError, StatusCode)> = vec![
            (RegistryError::VehicleNotFound, StatusCode::NOT_FOUND),
            (RegistryError::RecordNotFound, StatusCode::NOT_FOUND),
            (RegistryError::PlateTaken, StatusCode::CONFLICT),
            (
                RegistryError::Validation("bad year".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                RegistryError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            // Database errors pass through the kernel conversion
            (
                RegistryError::Database(sqlx::Error::RowNotFound),
                StatusCode::NOT_FOUND,
            ),
            (
                RegistryError::Database(sqlx::Error::PoolTimedOut),
                StatusCode::SERVICE_UNAVAILABLE,
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
    fn test_error_display() {
        assert!(
            RegistryError::VehicleNotFound
                .to_string()
                .contains("not found")
        );
        assert!(RegistryError::PlateTaken.to_string().contains("already"));
        assert!(
            RegistryError::Validation("amount must not be negative".into())
                .to_string()
                .contains("amount")
        );
    }

    #[test]
    fn test_plate_error_conversion() {
        let err: RegistryError = crate::domain::value_object::PlateError::Empty.into();
        assert!(matches!(err, RegistryError::Validation(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
