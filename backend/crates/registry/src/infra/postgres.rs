//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use kernel::id::{MarchamoId, RevisionId, VehicleId};

use crate::domain::entity::{marchamo::Marchamo, revision::Revision, vehicle::Vehicle};
use crate::domain::repository::{MarchamoRepository, RevisionRepository, VehicleRepository};
use crate::domain::value_object::{
    marchamo_status::MarchamoStatus, plate::Plate, revision_result::RevisionResult,
    validity_year::ValidityYear,
};
use crate::error::{RegistryError, RegistryResult};

/// PostgreSQL-backed registry repository
#[derive(Clone)]
pub struct PgRegistryRepository {
    pool: PgPool,
}

impl PgRegistryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Vehicle Repository Implementation
// ============================================================================

impl VehicleRepository for PgRegistryRepository {
    async fn create(&self, vehicle: &Vehicle) -> RegistryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO vehicles (
                vehicle_id,
                plate,
                owner_name,
                make,
                model,
                model_year,
                color,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(vehicle.vehicle_id.as_uuid())
        .bind(vehicle.plate.as_str())
        .bind(&vehicle.owner_name)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(vehicle.model_year)
        .bind(&vehicle.color)
        .bind(vehicle.created_at)
        .bind(vehicle.updated_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!(vehicle_id = %vehicle.vehicle_id, "Vehicle row inserted");

        Ok(())
    }

    async fn find_by_plate(&self, plate: &Plate) -> RegistryResult<Option<Vehicle>> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            SELECT
                vehicle_id,
                plate,
                owner_name,
                make,
                model,
                model_year,
                color,
                created_at,
                updated_at
            FROM vehicles
            WHERE plate = $1
            "#,
        )
        .bind(plate.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_vehicle()))
    }

    async fn list(&self, limit: i64, offset: i64) -> RegistryResult<Vec<Vehicle>> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            r#"
            SELECT
                vehicle_id,
                plate,
                owner_name,
                make,
                model,
                model_year,
                color,
                created_at,
                updated_at
            FROM vehicles
            ORDER BY plate ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_vehicle()).collect())
    }

    async fn exists_by_plate(&self, plate: &Plate) -> RegistryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE plate = $1)",
        )
        .bind(plate.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update(&self, vehicle: &Vehicle) -> RegistryResult<()> {
        sqlx::query(
            r#"
            UPDATE vehicles SET
                owner_name = $2,
                make = $3,
                model = $4,
                model_year = $5,
                color = $6,
                updated_at = $7
            WHERE vehicle_id = $1
            "#,
        )
        .bind(vehicle.vehicle_id.as_uuid())
        .bind(&vehicle.owner_name)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(vehicle.model_year)
        .bind(&vehicle.color)
        .bind(vehicle.updated_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!(vehicle_id = %vehicle.vehicle_id, "Vehicle row updated");

        Ok(())
    }

    async fn delete_by_plate(&self, plate: &Plate) -> RegistryResult<bool> {
        // Marchamo and revision rows go with the vehicle (ON DELETE CASCADE)
        let deleted = sqlx::query("DELETE FROM vehicles WHERE plate = $1")
            .bind(plate.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::debug!(plate = %plate, deleted = deleted, "Vehicle delete executed");

        Ok(deleted > 0)
    }
}

// ============================================================================
// Marchamo Repository Implementation
// ============================================================================

impl MarchamoRepository for PgRegistryRepository {
    async fn create(&self, marchamo: &Marchamo) -> RegistryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO marchamos (
                marchamo_id,
                vehicle_id,
                valid_year,
                amount,
                status,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(marchamo.marchamo_id.as_uuid())
        .bind(marchamo.vehicle_id.as_uuid())
        .bind(marchamo.valid_year.value())
        .bind(marchamo.amount)
        .bind(marchamo.status.id())
        .bind(marchamo.created_at)
        .bind(marchamo.updated_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!(marchamo_id = %marchamo.marchamo_id, "Marchamo row inserted");

        Ok(())
    }

    async fn find_by_id(&self, marchamo_id: MarchamoId) -> RegistryResult<Option<Marchamo>> {
        let row = sqlx::query_as::<_, MarchamoRow>(
            r#"
            SELECT
                marchamo_id,
                vehicle_id,
                valid_year,
                amount,
                status,
                created_at,
                updated_at
            FROM marchamos
            WHERE marchamo_id = $1
            "#,
        )
        .bind(marchamo_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_marchamo()).transpose()
    }

    async fn list_for_vehicle(&self, vehicle_id: VehicleId) -> RegistryResult<Vec<Marchamo>> {
        let rows = sqlx::query_as::<_, MarchamoRow>(
            r#"
            SELECT
                marchamo_id,
                vehicle_id,
                valid_year,
                amount,
                status,
                created_at,
                updated_at
            FROM marchamos
            WHERE vehicle_id = $1
            ORDER BY valid_year DESC
            "#,
        )
        .bind(vehicle_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_marchamo()).collect()
    }

    async fn update(&self, marchamo: &Marchamo) -> RegistryResult<()> {
        sqlx::query(
            r#"
            UPDATE marchamos SET
                valid_year = $2,
                amount = $3,
                status = $4,
                updated_at = $5
            WHERE marchamo_id = $1
            "#,
        )
        .bind(marchamo.marchamo_id.as_uuid())
        .bind(marchamo.valid_year.value())
        .bind(marchamo.amount)
        .bind(marchamo.status.id())
        .bind(marchamo.updated_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!(marchamo_id = %marchamo.marchamo_id, "Marchamo row updated");

        Ok(())
    }

    async fn delete(&self, marchamo_id: MarchamoId) -> RegistryResult<bool> {
        let deleted = sqlx::query("DELETE FROM marchamos WHERE marchamo_id = $1")
            .bind(marchamo_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Revision Repository Implementation
// ============================================================================

impl RevisionRepository for PgRegistryRepository {
    async fn create(&self, revision: &Revision) -> RegistryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO revisiones (
                revision_id,
                vehicle_id,
                valid_year,
                result,
                notes,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(revision.revision_id.as_uuid())
        .bind(revision.vehicle_id.as_uuid())
        .bind(revision.valid_year.value())
        .bind(revision.result.id())
        .bind(&revision.notes)
        .bind(revision.created_at)
        .bind(revision.updated_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!(revision_id = %revision.revision_id, "Revision row inserted");

        Ok(())
    }

    async fn find_by_id(&self, revision_id: RevisionId) -> RegistryResult<Option<Revision>> {
        let row = sqlx::query_as::<_, RevisionRow>(
            r#"
            SELECT
                revision_id,
                vehicle_id,
                valid_year,
                result,
                notes,
                created_at,
                updated_at
            FROM revisiones
            WHERE revision_id = $1
            "#,
        )
        .bind(revision_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_revision()).transpose()
    }

    async fn list_for_vehicle(&self, vehicle_id: VehicleId) -> RegistryResult<Vec<Revision>> {
        let rows = sqlx::query_as::<_, RevisionRow>(
            r#"
            SELECT
                revision_id,
                vehicle_id,
                valid_year,
                result,
                notes,
                created_at,
                updated_at
            FROM revisiones
            WHERE vehicle_id = $1
            ORDER BY valid_year DESC, created_at DESC
            "#,
        )
        .bind(vehicle_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_revision()).collect()
    }

    async fn update(&self, revision: &Revision) -> RegistryResult<()> {
        sqlx::query(
            r#"
            UPDATE revisiones SET
                valid_year = $2,
                result = $3,
                notes = $4,
                updated_at = $5
            WHERE revision_id = $1
            "#,
        )
        .bind(revision.revision_id.as_uuid())
        .bind(revision.valid_year.value())
        .bind(revision.result.id())
        .bind(&revision.notes)
        .bind(revision.updated_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!(revision_id = %revision.revision_id, "Revision row updated");

        Ok(())
    }

    async fn delete(&self, revision_id: RevisionId) -> RegistryResult<bool> {
        let deleted = sqlx::query("DELETE FROM revisiones WHERE revision_id = $1")
            .bind(revision_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct VehicleRow {
    vehicle_id: Uuid,
    plate: String,
    owner_name: String,
    make: String,
    model: String,
    model_year: i16,
    color: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl VehicleRow {
    fn into_vehicle(self) -> Vehicle {
        Vehicle {
            vehicle_id: VehicleId::from_uuid(self.vehicle_id),
            plate: Plate::from_db(self.plate),
            owner_name: self.owner_name,
            make: self.make,
            model: self.model,
            model_year: self.model_year,
            color: self.color,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct MarchamoRow {
    marchamo_id: Uuid,
    vehicle_id: Uuid,
    valid_year: i16,
    amount: i64,
    status: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl MarchamoRow {
    fn into_marchamo(self) -> RegistryResult<Marchamo> {
        let valid_year = ValidityYear::new(self.valid_year).ok_or_else(|| {
            RegistryError::Internal(format!("Invalid valid_year in marchamos: {}", self.valid_year))
        })?;

        Ok(Marchamo {
            marchamo_id: MarchamoId::from_uuid(self.marchamo_id),
            vehicle_id: VehicleId::from_uuid(self.vehicle_id),
            valid_year,
            amount: self.amount,
            status: MarchamoStatus::from_id(self.status).unwrap_or_default(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct RevisionRow {
    revision_id: Uuid,
    vehicle_id: Uuid,
    valid_year: i16,
    result: i16,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl RevisionRow {
    fn into_revision(self) -> RegistryResult<Revision> {
        let valid_year = ValidityYear::new(self.valid_year).ok_or_else(|| {
            RegistryError::Internal(format!(
                "Invalid valid_year in revisiones: {}",
                self.valid_year
            ))
        })?;

        let result = RevisionResult::from_id(self.result).ok_or_else(|| {
            RegistryError::Internal(format!("Invalid result in revisiones: {}", self.result))
        })?;

        Ok(Revision {
            revision_id: RevisionId::from_uuid(self.revision_id),
            vehicle_id: VehicleId::from_uuid(self.vehicle_id),
            valid_year,
            result,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
