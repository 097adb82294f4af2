//! Modelo de Agent
//!
//! Identidad de operador, siempre ligada a una Company. El campo
//! `password` almacena el hash bcrypt, nunca el texto plano.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Agent {
    pub id: i32,
    pub uuid: Uuid,
    pub company_id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}
