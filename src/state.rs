//! Estado compartido de la aplicación
//!
//! Se clona barato: pool, cliente HTTP y registry son handles con Arc
//! por dentro.

use reqwest::Client;
use sqlx::PgPool;

use crate::config::EnvironmentConfig;
use crate::services::auth_service::AuthService;
use crate::services::geolocation_service::GeolocationService;
use crate::services::vehicle_events_service::{VehicleEventsService, VehicleStreamRegistry};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub http_client: Client,
    pub vehicle_streams: VehicleStreamRegistry,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            pool,
            config,
            http_client: Client::new(),
            vehicle_streams: VehicleStreamRegistry::new(),
        }
    }

    pub fn auth_service(&self) -> AuthService {
        AuthService::new(self.pool.clone(), self.config.jwt_config())
    }

    pub fn geolocation_service(&self) -> GeolocationService {
        GeolocationService::new(self.http_client.clone(), &self.config)
    }

    pub fn vehicle_events_service(&self) -> VehicleEventsService {
        VehicleEventsService::new(self.pool.clone(), self.vehicle_streams.clone())
    }
}
