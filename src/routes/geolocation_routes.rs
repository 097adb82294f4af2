use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::dto::geolocation_dto::{
    AddressCandidate, DistanceQuery, DistanceResponse, FindAddressQuery,
};
use crate::dto::ApiResponse;
use crate::repositories::point_repository::PointRepository;
use crate::state::AppState;
use crate::utils::errors::{model_not_found, AppError};

pub fn create_geolocation_router() -> Router<AppState> {
    Router::new()
        .route("/find", get(find_address))
        .route("/distance", get(calculate_distance))
}

async fn find_address(
    State(state): State<AppState>,
    Query(query): Query<FindAddressQuery>,
) -> Result<Json<ApiResponse<Vec<AddressCandidate>>>, AppError> {
    let region = query.region.as_deref().unwrap_or("BR");

    let candidates = state
        .geolocation_service()
        .find_address(&query.address_description, region)
        .await?;

    Ok(Json(ApiResponse::success(candidates)))
}

/// Distancia y duración entre dos points ya registrados
async fn calculate_distance(
    State(state): State<AppState>,
    Query(query): Query<DistanceQuery>,
) -> Result<Json<ApiResponse<DistanceResponse>>, AppError> {
    let repository = PointRepository::new(state.pool.clone());

    let origin = repository
        .find_by_uuid(query.origin_uuid)
        .await?
        .ok_or_else(|| model_not_found("Point", &query.origin_uuid.to_string()))?;

    let destination = repository
        .find_by_uuid(query.destination_uuid)
        .await?
        .ok_or_else(|| model_not_found("Point", &query.destination_uuid.to_string()))?;

    let response = state
        .geolocation_service()
        .calculate_distance(&origin, &destination, query.mode.unwrap_or_default())
        .await?;

    Ok(Json(ApiResponse::success(response)))
}
