//! Adaptador del API de geocoding
//!
//! Dos operaciones contra el API estilo Google Maps: geocodificar una
//! descripción de dirección en candidatos de Point, y calcular distancia
//! y duración entre dos Points. Adaptador puro: sin retry, sin caché,
//! sin rate limiting.

use serde::{Deserialize, Serialize};

use crate::config::EnvironmentConfig;
use crate::dto::geolocation_dto::{AddressCandidate, DistanceResponse, DistanceValue};
use crate::models::Point;
use crate::utils::errors::AppError;

// Tipos de address_components que alimentan cada campo del Point
const TYPE_ZIP_CODE: &str = "postal_code";
const TYPE_STATE: &str = "administrative_area_level_1";
const TYPE_CITY: &str = "administrative_area_level_2";
const TYPE_NEIGHBORHOOD: &str = "sublocality_level_1";
const TYPE_STREET: &str = "route";
const TYPE_NUMBER: &str = "street_number";

/// Modo de transporte del distance matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl Default for TransportMode {
    fn default() -> Self {
        TransportMode::Driving
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode = match self {
            TransportMode::Driving => "driving",
            TransportMode::Walking => "walking",
            TransportMode::Bicycling => "bicycling",
            TransportMode::Transit => "transit",
        };
        write!(f, "{}", mode)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeApiResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    address_components: Vec<AddressComponent>,
    geometry: Geometry,
    place_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AddressComponent {
    short_name: String,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct DistanceMatrixApiResponse {
    #[serde(default)]
    rows: Vec<DistanceMatrixRow>,
}

#[derive(Debug, Deserialize)]
struct DistanceMatrixRow {
    #[serde(default)]
    elements: Vec<DistanceMatrixElement>,
}

#[derive(Debug, Deserialize)]
struct DistanceMatrixElement {
    status: String,
    duration: Option<ApiTextValue>,
    distance: Option<ApiTextValue>,
}

#[derive(Debug, Deserialize)]
struct ApiTextValue {
    text: String,
    value: i64,
}

fn address_component<'a>(address_type: &str, components: &'a [AddressComponent]) -> &'a str {
    components
        .iter()
        .find(|component| component.types.iter().any(|t| t == address_type))
        .map(|component| component.short_name.as_str())
        .unwrap_or("")
}

fn candidate_from_result(result: GeocodeResult) -> AddressCandidate {
    let components = &result.address_components;

    AddressCandidate {
        address_zip_code: address_component(TYPE_ZIP_CODE, components).to_string(),
        address_state: address_component(TYPE_STATE, components).to_string(),
        address_city: address_component(TYPE_CITY, components).to_string(),
        address_neighborhood: address_component(TYPE_NEIGHBORHOOD, components).to_string(),
        address_street: address_component(TYPE_STREET, components).to_string(),
        address_number: address_component(TYPE_NUMBER, components).to_string(),
        latitude: result.geometry.location.lat.to_string(),
        longitude: result.geometry.location.lng.to_string(),
        place_id: result.place_id,
    }
}

pub struct GeolocationService {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl GeolocationService {
    pub fn new(client: reqwest::Client, config: &EnvironmentConfig) -> Self {
        Self {
            client,
            api_url: config.google_api_url.clone(),
            api_key: config.google_api_key.clone(),
        }
    }

    /// Geocodifica una descripción de dirección en cero o más candidatos.
    /// Los candidatos nunca se persisten.
    pub async fn find_address(
        &self,
        address_description: &str,
        region: &str,
    ) -> Result<Vec<AddressCandidate>, AppError> {
        let url = format!(
            "{}/geocode/json?key={}&address={}&region={}",
            self.api_url,
            self.api_key,
            urlencoding::encode(address_description),
            urlencoding::encode(region),
        );

        tracing::info!("Geocoding address: {}", address_description);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Geocoding request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            return Err(AppError::ExternalApi(format!(
                "Geocoding failed with status {}",
                status
            )));
        }

        let data: GeocodeApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Invalid geocoding response: {}", e)))?;

        Ok(data.results.into_iter().map(candidate_from_result).collect())
    }

    /// Duración y distancia entre dos Points ya persistidos
    pub async fn calculate_distance(
        &self,
        origin: &Point,
        destination: &Point,
        mode: TransportMode,
    ) -> Result<DistanceResponse, AppError> {
        let url = format!(
            "{}/distancematrix/json?key={}&origins={},{}&destinations={},{}&mode={}",
            self.api_url,
            self.api_key,
            origin.latitude,
            origin.longitude,
            destination.latitude,
            destination.longitude,
            mode,
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Distance request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            return Err(AppError::ExternalApi(format!(
                "Distance matrix failed with status {}",
                status
            )));
        }

        let data: DistanceMatrixApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Invalid distance response: {}", e)))?;

        let element = data
            .rows
            .into_iter()
            .next()
            .and_then(|row| row.elements.into_iter().next())
            .ok_or_else(|| AppError::ExternalApi("Empty distance matrix response".to_string()))?;

        let duration = element
            .duration
            .ok_or_else(|| AppError::ExternalApi("Distance matrix element without duration".to_string()))?;

        let distance = element
            .distance
            .ok_or_else(|| AppError::ExternalApi("Distance matrix element without distance".to_string()))?;

        Ok(DistanceResponse {
            duration: DistanceValue {
                text: duration.text,
                value: duration.value,
            },
            distance: DistanceValue {
                text: distance.text,
                value: distance.value,
            },
            status: element.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_parsing_from_geocode_result() {
        let raw = serde_json::json!({
            "results": [{
                "place_id": "ChIJxyz",
                "address_components": [
                    {"short_name": "100", "types": ["street_number"]},
                    {"short_name": "Rua Padre Fabiano", "types": ["route"]},
                    {"short_name": "Centro", "types": ["sublocality_level_1", "sublocality"]},
                    {"short_name": "Capivari", "types": ["administrative_area_level_2"]},
                    {"short_name": "SP", "types": ["administrative_area_level_1"]},
                    {"short_name": "13360-000", "types": ["postal_code"]}
                ],
                "geometry": {"location": {"lat": -22.995, "lng": -47.508}}
            }]
        });

        let parsed: GeocodeApiResponse = serde_json::from_value(raw).unwrap();
        let candidates: Vec<AddressCandidate> =
            parsed.results.into_iter().map(candidate_from_result).collect();

        assert_eq!(candidates.len(), 1);

        let candidate = &candidates[0];
        assert_eq!(candidate.address_number, "100");
        assert_eq!(candidate.address_street, "Rua Padre Fabiano");
        assert_eq!(candidate.address_neighborhood, "Centro");
        assert_eq!(candidate.address_city, "Capivari");
        assert_eq!(candidate.address_state, "SP");
        assert_eq!(candidate.address_zip_code, "13360-000");
        assert_eq!(candidate.latitude, "-22.995");
        assert_eq!(candidate.longitude, "-47.508");
        assert_eq!(candidate.place_id.as_deref(), Some("ChIJxyz"));
    }

    #[test]
    fn test_missing_components_become_empty_strings() {
        let raw = serde_json::json!({
            "results": [{
                "address_components": [],
                "geometry": {"location": {"lat": 1.0, "lng": 2.0}}
            }]
        });

        let parsed: GeocodeApiResponse = serde_json::from_value(raw).unwrap();
        let candidate = candidate_from_result(parsed.results.into_iter().next().unwrap());

        assert_eq!(candidate.address_street, "");
        assert_eq!(candidate.address_zip_code, "");
        assert_eq!(candidate.place_id, None);
    }

    #[test]
    fn test_distance_matrix_parsing() {
        let raw = serde_json::json!({
            "rows": [{
                "elements": [{
                    "status": "OK",
                    "duration": {"text": "25 mins", "value": 1500},
                    "distance": {"text": "12.3 km", "value": 12300}
                }]
            }]
        });

        let parsed: DistanceMatrixApiResponse = serde_json::from_value(raw).unwrap();
        let element = &parsed.rows[0].elements[0];

        assert_eq!(element.status, "OK");
        assert_eq!(element.duration.as_ref().unwrap().value, 1500);
        assert_eq!(element.distance.as_ref().unwrap().text, "12.3 km");
    }

    #[test]
    fn test_transport_mode_display() {
        assert_eq!(TransportMode::Driving.to_string(), "driving");
        assert_eq!(TransportMode::Transit.to_string(), "transit");
        assert_eq!(TransportMode::default(), TransportMode::Driving);
    }
}
