//! Record Administration Use Case
//!
//! Marchamo and revision record management for the dashboard. Records are
//! created under a plate; updates and deletes address the record id directly.

use std::sync::Arc;

use kernel::id::{MarchamoId, RevisionId};

use crate::domain::entity::{marchamo::Marchamo, revision::Revision, vehicle::Vehicle};
use crate::domain::repository::{MarchamoRepository, RevisionRepository, VehicleRepository};
use crate::domain::value_object::{
    marchamo_status::MarchamoStatus, plate::Plate, revision_result::RevisionResult,
    validity_year::ValidityYear,
};
use crate::error::{RegistryError, RegistryResult};

/// Marchamo create/update input
pub struct MarchamoInput {
    pub valid_year: i16,
    pub amount: i64,
    pub status: String,
}

/// Revision create/update input
pub struct RevisionInput {
    pub valid_year: i16,
    pub result: String,
    pub notes: Option<String>,
}

/// Record administration use case
pub struct RecordAdminUseCase<V, M, R>
where
    V: VehicleRepository,
    M: MarchamoRepository,
    R: RevisionRepository,
{
    vehicle_repo: Arc<V>,
    marchamo_repo: Arc<M>,
    revision_repo: Arc<R>,
}

impl<V, M, R> RecordAdminUseCase<V, M, R>
where
    V: VehicleRepository,
    M: MarchamoRepository,
    R: RevisionRepository,
{
    pub fn new(vehicle_repo: Arc<V>, marchamo_repo: Arc<M>, revision_repo: Arc<R>) -> Self {
        Self {
            vehicle_repo,
            marchamo_repo,
            revision_repo,
        }
    }

    /// List marchamos for a plate, newest year first
    pub async fn list_marchamos(&self, plate_text: &str) -> RegistryResult<Vec<Marchamo>> {
        let vehicle = self.find_vehicle(plate_text).await?;
        self.marchamo_repo.list_for_vehicle(vehicle.vehicle_id).await
    }

    /// Add a marchamo record under a plate
    ///
    /// One record per vehicle and year; a second insert for the same year
    /// surfaces as a conflict from the unique constraint.
    pub async fn add_marchamo(
        &self,
        plate_text: &str,
        input: MarchamoInput,
    ) -> RegistryResult<Marchamo> {
        let vehicle = self.find_vehicle(plate_text).await?;
        let valid_year = parse_year(input.valid_year)?;
        let amount = parse_amount(input.amount)?;
        let status = parse_status(&input.status)?;

        let marchamo = Marchamo::new(vehicle.vehicle_id, valid_year, amount, status);
        self.marchamo_repo.create(&marchamo).await?;

        tracing::info!(
            plate = %vehicle.plate,
            year = valid_year.value(),
            "Marchamo added"
        );

        Ok(marchamo)
    }

    /// Update an existing marchamo record
    pub async fn update_marchamo(
        &self,
        marchamo_id: MarchamoId,
        input: MarchamoInput,
    ) -> RegistryResult<Marchamo> {
        let valid_year = parse_year(input.valid_year)?;
        let amount = parse_amount(input.amount)?;
        let status = parse_status(&input.status)?;

        let mut marchamo = self
            .marchamo_repo
            .find_by_id(marchamo_id)
            .await?
            .ok_or(RegistryError::RecordNotFound)?;

        marchamo.update_terms(valid_year, amount, status);
        self.marchamo_repo.update(&marchamo).await?;

        tracing::info!(marchamo_id = %marchamo.marchamo_id, "Marchamo updated");

        Ok(marchamo)
    }

    /// Remove a marchamo record
    pub async fn remove_marchamo(&self, marchamo_id: MarchamoId) -> RegistryResult<()> {
        if !self.marchamo_repo.delete(marchamo_id).await? {
            return Err(RegistryError::RecordNotFound);
        }

        tracing::info!(marchamo_id = %marchamo_id, "Marchamo removed");

        Ok(())
    }

    /// List revisions for a plate, newest year first
    pub async fn list_revisions(&self, plate_text: &str) -> RegistryResult<Vec<Revision>> {
        let vehicle = self.find_vehicle(plate_text).await?;
        self.revision_repo.list_for_vehicle(vehicle.vehicle_id).await
    }

    /// Add a revision record under a plate
    ///
    /// Re-inspections are allowed, so several records can share a year.
    pub async fn add_revision(
        &self,
        plate_text: &str,
        input: RevisionInput,
    ) -> RegistryResult<Revision> {
        let vehicle = self.find_vehicle(plate_text).await?;
        let valid_year = parse_year(input.valid_year)?;
        let result = parse_result(&input.result)?;
        let notes = trimmed_notes(input.notes);

        let revision = Revision::new(vehicle.vehicle_id, valid_year, result, notes);
        self.revision_repo.create(&revision).await?;

        tracing::info!(
            plate = %vehicle.plate,
            year = valid_year.value(),
            "Revision added"
        );

        Ok(revision)
    }

    /// Update an existing revision record
    pub async fn update_revision(
        &self,
        revision_id: RevisionId,
        input: RevisionInput,
    ) -> RegistryResult<Revision> {
        let valid_year = parse_year(input.valid_year)?;
        let result = parse_result(&input.result)?;
        let notes = trimmed_notes(input.notes);

        let mut revision = self
            .revision_repo
            .find_by_id(revision_id)
            .await?
            .ok_or(RegistryError::RecordNotFound)?;

        revision.update_outcome(valid_year, result, notes);
        self.revision_repo.update(&revision).await?;

        tracing::info!(revision_id = %revision.revision_id, "Revision updated");

        Ok(revision)
    }

    /// Remove a revision record
    pub async fn remove_revision(&self, revision_id: RevisionId) -> RegistryResult<()> {
        if !self.revision_repo.delete(revision_id).await? {
            return Err(RegistryError::RecordNotFound);
        }

        tracing::info!(revision_id = %revision_id, "Revision removed");

        Ok(())
    }

    async fn find_vehicle(&self, plate_text: &str) -> RegistryResult<Vehicle> {
        let plate = Plate::new(plate_text)?;

        self.vehicle_repo
            .find_by_plate(&plate)
            .await?
            .ok_or(RegistryError::VehicleNotFound)
    }
}

fn parse_year(valid_year: i16) -> RegistryResult<ValidityYear> {
    ValidityYear::new(valid_year).ok_or_else(|| {
        RegistryError::Validation(format!(
            "valid year must be between {} and {}",
            ValidityYear::MIN,
            ValidityYear::MAX
        ))
    })
}

fn parse_amount(amount: i64) -> RegistryResult<i64> {
    if amount < 0 {
        return Err(RegistryError::Validation(
            "amount must not be negative".to_string(),
        ));
    }
    Ok(amount)
}

fn parse_status(code: &str) -> RegistryResult<MarchamoStatus> {
    MarchamoStatus::from_code(code)
        .ok_or_else(|| RegistryError::Validation(format!("unknown marchamo status '{code}'")))
}

fn parse_result(code: &str) -> RegistryResult<RevisionResult> {
    RevisionResult::from_code(code)
        .ok_or_else(|| RegistryError::Validation(format!("unknown revision result '{code}'")))
}

fn trimmed_notes(notes: Option<String>) -> Option<String> {
    notes.and_then(|n| {
        let trimmed = n.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
