//! Vehicle Entity
//!
//! Core registry entity identified by its plate number.

use chrono::{DateTime, Utc};
use kernel::id::VehicleId;

use crate::domain::value_object::plate::Plate;

/// Registered vehicle
///
/// The plate is the natural key on the public surface; the UUID is the
/// internal key that marchamo and revisión records reference.
#[derive(Debug, Clone)]
pub struct Vehicle {
    /// Internal UUID identifier
    pub vehicle_id: VehicleId,
    /// Plate number (unique, normalized)
    pub plate: Plate,
    /// Registered owner (management surface only)
    pub owner_name: String,
    /// Manufacturer
    pub make: String,
    /// Model name
    pub model: String,
    /// Model year
    pub model_year: i16,
    /// Body color, if recorded
    pub color: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Create a new vehicle
    pub fn new(
        plate: Plate,
        owner_name: String,
        make: String,
        model: String,
        model_year: i16,
        color: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            vehicle_id: VehicleId::new(),
            plate,
            owner_name,
            make,
            model,
            model_year,
            color,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable details. The plate never changes.
    pub fn update_details(
        &mut self,
        owner_name: String,
        make: String,
        model: String,
        model_year: i16,
        color: Option<String>,
    ) {
        self.owner_name = owner_name;
        self.make = make;
        self.model = model;
        self.model_year = model_year;
        self.color = color;
        self.updated_at = Utc::now();
    }
}
