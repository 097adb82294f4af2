//! Modelo de Vehicle

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de vehículo, mapea al enum `vehicle_type` de PostgreSQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "vehicle_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Bus,
    Car,
}

impl Default for VehicleType {
    fn default() -> Self {
        VehicleType::Bus
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i32,
    pub uuid: Uuid,
    pub company_id: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub plate: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&VehicleType::Bus).unwrap(), "\"bus\"");
        assert_eq!(serde_json::to_string(&VehicleType::Car).unwrap(), "\"car\"");
    }

    #[test]
    fn test_vehicle_type_default_is_bus() {
        assert_eq!(VehicleType::default(), VehicleType::Bus);
    }
}
