//! Issue Link Use Case
//!
//! Issues a signed token for a registered plate and renders the
//! verification URL as a QR code.

use std::sync::Arc;

use registry::domain::repository::VehicleRepository;
use registry::domain::value_object::plate::Plate;

use crate::application::config::QrLinkConfig;
use crate::domain::codec::PlateTokenCodec;
use crate::error::{QrLinkError, QrLinkResult};

/// Issue link output
pub struct IssueLinkOutput {
    pub plate: String,
    pub token: String,
    pub verify_url: String,
    pub qr_png: Vec<u8>,
}

/// Issue link use case
pub struct IssueLinkUseCase<V>
where
    V: VehicleRepository,
{
    vehicle_repo: Arc<V>,
    config: Arc<QrLinkConfig>,
}

impl<V> IssueLinkUseCase<V>
where
    V: VehicleRepository,
{
    pub fn new(vehicle_repo: Arc<V>, config: Arc<QrLinkConfig>) -> Self {
        Self {
            vehicle_repo,
            config,
        }
    }

    pub async fn execute(&self, plate_text: &str) -> QrLinkResult<IssueLinkOutput> {
        // Unparseable plate text reads as an unknown plate
        let plate = Plate::new(plate_text).map_err(|_| QrLinkError::VehicleNotFound)?;

        let vehicle = self
            .vehicle_repo
            .find_by_plate(&plate)
            .await
            .map_err(QrLinkError::Registry)?
            .ok_or(QrLinkError::VehicleNotFound)?;

        let codec = PlateTokenCodec::new(self.config.token_secret.clone());
        let token = codec.issue(vehicle.plate.as_str());
        let verify_url = self.config.verify_url(&token);
        let qr_png = platform::qr::render_png(&verify_url)?;

        tracing::info!(plate = %vehicle.plate, "QR link issued");

        Ok(IssueLinkOutput {
            plate: vehicle.plate.to_string(),
            token,
            verify_url,
            qr_png,
        })
    }
}
