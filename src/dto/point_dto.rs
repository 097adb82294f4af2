use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Point;

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePointRequest {
    #[validate(length(min = 1, max = 20))]
    pub address_zip_code: String,

    #[validate(length(min = 2, max = 2))]
    pub address_state: String,

    #[validate(length(min = 1, max = 255))]
    pub address_city: String,

    #[validate(length(min = 1, max = 255))]
    pub address_neighborhood: String,

    #[validate(length(min = 1, max = 255))]
    pub address_street: String,

    #[validate(length(min = 1, max = 20))]
    pub address_number: String,

    pub latitude: String,
    pub longitude: String,
    pub place_id: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePointRequest {
    #[validate(length(min = 1, max = 20))]
    pub address_zip_code: Option<String>,

    #[validate(length(min = 2, max = 2))]
    pub address_state: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub address_city: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub address_neighborhood: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub address_street: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub address_number: Option<String>,

    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub place_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PointFilters {
    /// Substring match sobre la ciudad
    pub address_city: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointResponse {
    pub uuid: Uuid,
    pub address_zip_code: String,
    pub address_state: String,
    pub address_city: String,
    pub address_neighborhood: String,
    pub address_street: String,
    pub address_number: String,
    pub latitude: String,
    pub longitude: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

impl From<Point> for PointResponse {
    fn from(point: Point) -> Self {
        Self {
            uuid: point.uuid,
            address_zip_code: point.address_zip_code,
            address_state: point.address_state,
            address_city: point.address_city,
            address_neighborhood: point.address_neighborhood,
            address_street: point.address_street,
            address_number: point.address_number,
            latitude: point.latitude,
            longitude: point.longitude,
            place_id: point.place_id,
        }
    }
}
