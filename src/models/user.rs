//! Modelo de User
//!
//! Identidad de pasajero, espacio de tokens independiente del Agent
//! y sin vínculo con ninguna Company.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub uuid: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}
