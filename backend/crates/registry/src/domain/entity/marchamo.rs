//! Marchamo Entity
//!
//! Annual road-tax record. At most one per vehicle per validity year.

use chrono::{DateTime, Utc};
use kernel::id::{MarchamoId, VehicleId};

use crate::domain::value_object::{marchamo_status::MarchamoStatus, validity_year::ValidityYear};

/// Road-tax record for one vehicle and one year
#[derive(Debug, Clone)]
pub struct Marchamo {
    /// Internal UUID identifier
    pub marchamo_id: MarchamoId,
    /// Owning vehicle
    pub vehicle_id: VehicleId,
    /// Validity year
    pub valid_year: ValidityYear,
    /// Amount due in whole colones
    pub amount: i64,
    /// Payment status
    pub status: MarchamoStatus,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Marchamo {
    /// Create a new marchamo record
    pub fn new(
        vehicle_id: VehicleId,
        valid_year: ValidityYear,
        amount: i64,
        status: MarchamoStatus,
    ) -> Self {
        let now = Utc::now();

        Self {
            marchamo_id: MarchamoId::new(),
            vehicle_id,
            valid_year,
            amount,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update payment status
    pub fn set_status(&mut self, status: MarchamoStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Replace year, amount and status together
    pub fn update_terms(&mut self, valid_year: ValidityYear, amount: i64, status: MarchamoStatus) {
        self.valid_year = valid_year;
        self.amount = amount;
        self.status = status;
        self.updated_at = Utc::now();
    }
}
