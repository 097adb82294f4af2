//! Modelo de Point
//!
//! Dirección geocodificada usable como parada de una Route.
//! Latitud y longitud se guardan como strings, igual que llegan
//! del servicio de geocoding.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Point {
    pub id: i32,
    pub uuid: Uuid,
    pub company_id: i32,
    pub address_zip_code: String,
    pub address_state: String,
    pub address_city: String,
    pub address_neighborhood: String,
    pub address_street: String,
    pub address_number: String,
    pub latitude: String,
    pub longitude: String,
    pub place_id: Option<String>,
}
