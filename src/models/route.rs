//! Modelos de Route y RoutePoint
//!
//! Una Route pertenece a una Company y visita una secuencia ordenada
//! de Points. El orden vive en la tabla junction `route_point` con un
//! `index` explícito, único por route.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Route {
    pub id: i32,
    pub uuid: Uuid,
    pub company_id: i32,
    pub description: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    pub ticket_price: Decimal,
}

/// Fila de la tabla junction `route_point`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoutePoint {
    pub id: i32,
    pub route_id: i32,
    pub point_id: i32,
    pub index: i32,
}
