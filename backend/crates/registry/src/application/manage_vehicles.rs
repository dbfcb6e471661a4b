//! Vehicle Administration Use Case
//!
//! CRUD over the vehicle register for the management dashboard.

use std::sync::Arc;

use crate::application::config::RegistryConfig;
use crate::domain::entity::vehicle::Vehicle;
use crate::domain::repository::VehicleRepository;
use crate::domain::value_object::plate::Plate;
use crate::error::{RegistryError, RegistryResult};

const MODEL_YEAR_MIN: i16 = 1900;
const MODEL_YEAR_MAX: i16 = 2100;

/// Vehicle registration input
pub struct RegisterVehicleInput {
    pub plate: String,
    pub owner_name: String,
    pub make: String,
    pub model: String,
    pub model_year: i16,
    pub color: Option<String>,
}

/// Vehicle update input (the plate is immutable and comes from the path)
pub struct UpdateVehicleInput {
    pub owner_name: String,
    pub make: String,
    pub model: String,
    pub model_year: i16,
    pub color: Option<String>,
}

/// Vehicle administration use case
pub struct VehicleAdminUseCase<V>
where
    V: VehicleRepository,
{
    vehicle_repo: Arc<V>,
    config: Arc<RegistryConfig>,
}

impl<V> VehicleAdminUseCase<V>
where
    V: VehicleRepository,
{
    pub fn new(vehicle_repo: Arc<V>, config: Arc<RegistryConfig>) -> Self {
        Self {
            vehicle_repo,
            config,
        }
    }

    /// Register a new vehicle under an unused plate
    pub async fn register(&self, input: RegisterVehicleInput) -> RegistryResult<Vehicle> {
        let plate = Plate::new(&input.plate)?;
        let owner_name = required_text("owner name", input.owner_name)?;
        let make = required_text("make", input.make)?;
        let model = required_text("model", input.model)?;
        let model_year = validate_model_year(input.model_year)?;
        let color = optional_text(input.color);

        if self.vehicle_repo.exists_by_plate(&plate).await? {
            return Err(RegistryError::PlateTaken);
        }

        let vehicle = Vehicle::new(plate, owner_name, make, model, model_year, color);
        self.vehicle_repo.create(&vehicle).await?;

        tracing::info!(plate = %vehicle.plate, "Vehicle registered");

        Ok(vehicle)
    }

    /// Fetch one vehicle by plate
    pub async fn get(&self, plate_text: &str) -> RegistryResult<Vehicle> {
        let plate = Plate::new(plate_text)?;

        self.vehicle_repo
            .find_by_plate(&plate)
            .await?
            .ok_or(RegistryError::VehicleNotFound)
    }

    /// List vehicles with a clamped page window
    pub async fn list(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> RegistryResult<Vec<Vehicle>> {
        let limit = self.config.clamp_limit(limit);
        let offset = self.config.clamp_offset(offset);

        self.vehicle_repo.list(limit, offset).await
    }

    /// Update the mutable details of an existing vehicle
    pub async fn update(
        &self,
        plate_text: &str,
        input: UpdateVehicleInput,
    ) -> RegistryResult<Vehicle> {
        let plate = Plate::new(plate_text)?;
        let owner_name = required_text("owner name", input.owner_name)?;
        let make = required_text("make", input.make)?;
        let model = required_text("model", input.model)?;
        let model_year = validate_model_year(input.model_year)?;
        let color = optional_text(input.color);

        let mut vehicle = self
            .vehicle_repo
            .find_by_plate(&plate)
            .await?
            .ok_or(RegistryError::VehicleNotFound)?;

        vehicle.update_details(owner_name, make, model, model_year, color);
        self.vehicle_repo.update(&vehicle).await?;

        tracing::info!(plate = %vehicle.plate, "Vehicle updated");

        Ok(vehicle)
    }

    /// Remove a vehicle and its records
    pub async fn remove(&self, plate_text: &str) -> RegistryResult<()> {
        let plate = Plate::new(plate_text)?;

        if !self.vehicle_repo.delete_by_plate(&plate).await? {
            return Err(RegistryError::VehicleNotFound);
        }

        tracing::info!(plate = %plate, "Vehicle removed");

        Ok(())
    }
}

fn required_text(field: &'static str, value: String) -> RegistryResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RegistryError::Validation(format!(
            "{field} must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

fn optional_text(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn validate_model_year(model_year: i16) -> RegistryResult<i16> {
    if !(MODEL_YEAR_MIN..=MODEL_YEAR_MAX).contains(&model_year) {
        return Err(RegistryError::Validation(format!(
            "model year must be between {MODEL_YEAR_MIN} and {MODEL_YEAR_MAX}"
        )));
    }
    Ok(model_year)
}
