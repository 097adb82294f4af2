use serde::{Deserialize, Serialize};

use crate::services::geolocation_service::TransportMode;

#[derive(Debug, Deserialize)]
pub struct FindAddressQuery {
    pub address_description: String,
    /// Región de sesgo de la búsqueda, default "BR"
    pub region: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DistanceQuery {
    pub origin_uuid: uuid::Uuid,
    pub destination_uuid: uuid::Uuid,
    pub mode: Option<TransportMode>,
}

/// Candidato de dirección devuelto por el geocoding, nunca persistido
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressCandidate {
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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceValue {
    pub text: String,
    pub value: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceResponse {
    pub duration: DistanceValue,
    pub distance: DistanceValue,
    pub status: String,
}
