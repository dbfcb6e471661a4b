//! Revision Entity
//!
//! Technical inspection record. A vehicle can have several per year
//! (failed inspections are followed by re-inspections).

use chrono::{DateTime, Utc};
use kernel::id::{RevisionId, VehicleId};

use crate::domain::value_object::{revision_result::RevisionResult, validity_year::ValidityYear};

/// Inspection record for one vehicle
#[derive(Debug, Clone)]
pub struct Revision {
    /// Internal UUID identifier
    pub revision_id: RevisionId,
    /// Owning vehicle
    pub vehicle_id: VehicleId,
    /// Validity year
    pub valid_year: ValidityYear,
    /// Inspection outcome
    pub result: RevisionResult,
    /// Inspector notes, if any
    pub notes: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Revision {
    /// Create a new revision record
    pub fn new(
        vehicle_id: VehicleId,
        valid_year: ValidityYear,
        result: RevisionResult,
        notes: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            revision_id: RevisionId::new(),
            vehicle_id,
            valid_year,
            result,
            notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace year, result and notes together
    pub fn update_outcome(
        &mut self,
        valid_year: ValidityYear,
        result: RevisionResult,
        notes: Option<String>,
    ) {
        self.valid_year = valid_year;
        self.result = result;
        self.notes = notes;
        self.updated_at = Utc::now();
    }
}
