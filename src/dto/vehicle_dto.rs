use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Vehicle, VehicleType};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[serde(rename = "type", default)]
    pub vehicle_type: VehicleType,

    #[validate(length(min = 1, max = 10))]
    pub plate: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[serde(rename = "type")]
    pub vehicle_type: Option<VehicleType>,

    #[validate(length(min = 1, max = 10))]
    pub plate: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VehicleFilters {
    #[serde(rename = "type")]
    pub vehicle_type: Option<VehicleType>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleResponse {
    pub uuid: Uuid,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub plate: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            uuid: vehicle.uuid,
            vehicle_type: vehicle.vehicle_type,
            plate: vehicle.plate,
        }
    }
}

/// Evento de posición entrante de un vehículo
#[derive(Debug, Deserialize)]
pub struct VehiclePositionRequest {
    pub latitude: String,
    pub longitude: String,
}

/// Payload difundido a los subscriptores del stream de ubicación
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehiclePositionEvent {
    pub vehicle_uuid: Uuid,
    pub latitude: String,
    pub longitude: String,
}
