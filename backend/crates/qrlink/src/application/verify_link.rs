//! Verify Link Use Case
//!
//! Verifies a scanned token and resolves it to the public vehicle lookup.

use std::sync::Arc;

use registry::application::lookup_vehicle::{LookupVehicleUseCase, VehicleLookup};
use registry::domain::repository::{MarchamoRepository, RevisionRepository, VehicleRepository};
use registry::error::RegistryError;

use crate::application::config::QrLinkConfig;
use crate::domain::codec::PlateTokenCodec;
use crate::error::{QrLinkError, QrLinkResult};

/// Verify link use case
pub struct VerifyLinkUseCase<V, M, R>
where
    V: VehicleRepository,
    M: MarchamoRepository,
    R: RevisionRepository,
{
    lookup: LookupVehicleUseCase<V, M, R>,
    config: Arc<QrLinkConfig>,
}

impl<V, M, R> VerifyLinkUseCase<V, M, R>
where
    V: VehicleRepository,
    M: MarchamoRepository,
    R: RevisionRepository,
{
    pub fn new(
        vehicle_repo: Arc<V>,
        marchamo_repo: Arc<M>,
        revision_repo: Arc<R>,
        config: Arc<QrLinkConfig>,
    ) -> Self {
        Self {
            lookup: LookupVehicleUseCase::new(vehicle_repo, marchamo_repo, revision_repo),
            config,
        }
    }

    pub async fn execute(&self, token: &str) -> QrLinkResult<VehicleLookup> {
        let codec = PlateTokenCodec::new(self.config.token_secret.clone());

        let payload = codec.verify(token).ok_or(QrLinkError::TokenInvalid)?;

        // The lookup re-normalizes the embedded payload. An unknown plate
        // answers exactly like an invalid token.
        match self.lookup.execute(&payload).await {
            Ok(lookup) => Ok(lookup),
            Err(RegistryError::VehicleNotFound) => Err(QrLinkError::VehicleNotFound),
            Err(e) => Err(QrLinkError::Registry(e)),
        }
    }
}
