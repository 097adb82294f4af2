//! Modelo de Company
//!
//! Mapea exactamente a la tabla `company`. La clave primaria es el `id`
//! entero; el `uuid` es el identificador público en la API.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: i32,
    pub uuid: Uuid,
    pub company_name: String,
    pub fantasy_name: String,
    pub document_cnpj: String,
    pub email: String,
}
