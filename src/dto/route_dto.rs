use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::point_dto::PointResponse;
use crate::models::{Point, Route};

/// Body de creación/actualización de rutas. `point_uuids` es una lista
/// ordenada: la posición en la lista define el orden de visita.
#[derive(Debug, Deserialize, Validate)]
pub struct RouteBodyRequest {
    #[validate(length(min = 1, max = 255))]
    pub description: String,

    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    pub ticket_price: Decimal,

    pub point_uuids: Vec<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct RouteFilters {
    /// Substring match sobre la descripción
    pub description: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Response de route con sus points en orden de visita
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    pub uuid: Uuid,
    pub description: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    pub ticket_price: Decimal,
    pub points: Vec<PointResponse>,
}

impl RouteResponse {
    pub fn from_route_with_points(route: Route, ordered_points: Vec<Point>) -> Self {
        Self {
            uuid: route.uuid,
            description: route.description,
            opening_time: route.opening_time,
            closing_time: route.closing_time,
            ticket_price: route.ticket_price,
            points: ordered_points.into_iter().map(PointResponse::from).collect(),
        }
    }
}
