//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::lookup_vehicle::VehicleLookup;
use crate::domain::entity::{marchamo::Marchamo, revision::Revision, vehicle::Vehicle};

// ============================================================================
// Vehicles
// ============================================================================

/// Vehicle create request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRequest {
    pub plate: String,
    pub owner_name: String,
    pub make: String,
    pub model: String,
    pub model_year: i16,
    pub color: Option<String>,
}

/// Vehicle update request (the plate in the path identifies the vehicle)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleUpdateRequest {
    pub owner_name: String,
    pub make: String,
    pub model: String,
    pub model_year: i16,
    pub color: Option<String>,
}

/// Vehicle response for the management dashboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub vehicle_id: String,
    pub plate: String,
    pub owner_name: String,
    pub make: String,
    pub model: String,
    pub model_year: i16,
    pub color: Option<String>,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            vehicle_id: vehicle.vehicle_id.to_string(),
            plate: vehicle.plate.to_string(),
            owner_name: vehicle.owner_name,
            make: vehicle.make,
            model: vehicle.model,
            model_year: vehicle.model_year,
            color: vehicle.color,
            created_at_ms: vehicle.created_at.timestamp_millis(),
            updated_at_ms: vehicle.updated_at.timestamp_millis(),
        }
    }
}

/// Vehicle list response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleListResponse {
    pub vehicles: Vec<VehicleResponse>,
}

/// List query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ============================================================================
// Marchamos
// ============================================================================

/// Marchamo create/update request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarchamoRequest {
    pub valid_year: i16,
    pub amount: i64,
    /// Status code: "pending", "paid" or "overdue"
    pub status: String,
}

/// Marchamo response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarchamoResponse {
    pub marchamo_id: String,
    pub valid_year: i16,
    pub amount: i64,
    pub status: String,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

impl From<Marchamo> for MarchamoResponse {
    fn from(marchamo: Marchamo) -> Self {
        Self {
            marchamo_id: marchamo.marchamo_id.to_string(),
            valid_year: marchamo.valid_year.value(),
            amount: marchamo.amount,
            status: marchamo.status.code().to_string(),
            created_at_ms: marchamo.created_at.timestamp_millis(),
            updated_at_ms: marchamo.updated_at.timestamp_millis(),
        }
    }
}

// ============================================================================
// Revisiones
// ============================================================================

/// Revision create/update request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionRequest {
    pub valid_year: i16,
    /// Result code: "passed", "failed" or "conditional"
    pub result: String,
    pub notes: Option<String>,
}

/// Revision response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionResponse {
    pub revision_id: String,
    pub valid_year: i16,
    pub result: String,
    pub notes: Option<String>,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

impl From<Revision> for RevisionResponse {
    fn from(revision: Revision) -> Self {
        Self {
            revision_id: revision.revision_id.to_string(),
            valid_year: revision.valid_year.value(),
            result: revision.result.code().to_string(),
            notes: revision.notes,
            created_at_ms: revision.created_at.timestamp_millis(),
            updated_at_ms: revision.updated_at.timestamp_millis(),
        }
    }
}

// ============================================================================
// Public Lookup
// ============================================================================

/// Public view of a vehicle
///
/// The owner name stays off the public surface.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupVehicleView {
    pub plate: String,
    pub make: String,
    pub model: String,
    pub model_year: i16,
    pub color: Option<String>,
}

/// Public lookup response: the vehicle with its record histories
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub vehicle: LookupVehicleView,
    pub marchamos: Vec<MarchamoResponse>,
    pub revisiones: Vec<RevisionResponse>,
}

impl From<VehicleLookup> for LookupResponse {
    fn from(lookup: VehicleLookup) -> Self {
        Self {
            vehicle: LookupVehicleView {
                plate: lookup.vehicle.plate.to_string(),
                make: lookup.vehicle.make,
                model: lookup.vehicle.model,
                model_year: lookup.vehicle.model_year,
                color: lookup.vehicle.color,
            },
            marchamos: lookup.marchamos.into_iter().map(Into::into).collect(),
            revisiones: lookup.revisiones.into_iter().map(Into::into).collect(),
        }
    }
}
