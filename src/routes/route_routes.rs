use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::route_controller::RouteController;
use crate::dto::route_dto::{RouteBodyRequest, RouteFilters, RouteResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_router() -> Router<AppState> {
    Router::new()
        .route("/company/:company_uuid", get(find_many).post(create))
        .route("/:uuid", get(find).put(update).delete(delete))
}

async fn create(
    State(state): State<AppState>,
    Path(company_uuid): Path<Uuid>,
    Json(request): Json<RouteBodyRequest>,
) -> Result<Json<ApiResponse<RouteResponse>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.create(company_uuid, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn find(
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
) -> Result<Json<ApiResponse<RouteResponse>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.find(uuid).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn find_many(
    State(state): State<AppState>,
    Path(company_uuid): Path<Uuid>,
    Query(filters): Query<RouteFilters>,
) -> Result<Json<ApiResponse<Vec<RouteResponse>>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.find_many(company_uuid, filters).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn update(
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
    Json(request): Json<RouteBodyRequest>,
) -> Result<Json<ApiResponse<RouteResponse>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.update(uuid, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete(
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
) -> Result<Json<ApiResponse<RouteResponse>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.delete(uuid).await?;
    Ok(Json(ApiResponse::success(response)))
}
