use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::company_controller::CompanyController;
use crate::dto::company_dto::{
    CompanyFilters, CompanyResponse, CreateCompanyRequest, UpdateCompanyRequest,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_company_router() -> Router<AppState> {
    Router::new()
        .route("/", get(find_many).post(create))
        .route("/:uuid", get(find).put(update).delete(delete))
}

async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateCompanyRequest>,
) -> Result<Json<ApiResponse<CompanyResponse>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn find(
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
) -> Result<Json<ApiResponse<CompanyResponse>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.find(uuid).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn find_many(
    State(state): State<AppState>,
    Query(filters): Query<CompanyFilters>,
) -> Result<Json<ApiResponse<Vec<CompanyResponse>>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.find_many(filters).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn update(
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
    Json(request): Json<UpdateCompanyRequest>,
) -> Result<Json<ApiResponse<CompanyResponse>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.update(uuid, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete(
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
) -> Result<Json<ApiResponse<CompanyResponse>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.delete(uuid).await?;
    Ok(Json(ApiResponse::success(response)))
}
