use axum::{
    extract::{Path, Query, State},
    routing::get,
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::agent_controller::AgentController;
use crate::dto::agent_dto::{
    AgentFilters, AgentResponse, CreateAgentRequest, UpdateAgentRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedAgent;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_agent_router() -> Router<AppState> {
    Router::new()
        .route("/", get(find_many).post(create))
        .route("/profile", get(profile))
        .route("/:uuid", get(find).put(update).delete(delete))
}

async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateAgentRequest>,
) -> Result<Json<ApiResponse<AgentResponse>>, AppError> {
    let controller = AgentController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(ApiResponse::success(response)))
}

/// El agent autenticado que inyectó el middleware
async fn profile(
    Extension(AuthenticatedAgent(agent)): Extension<AuthenticatedAgent>,
) -> Result<Json<ApiResponse<AgentResponse>>, AppError> {
    Ok(Json(ApiResponse::success(AgentResponse::from(agent))))
}

async fn find(
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
) -> Result<Json<ApiResponse<AgentResponse>>, AppError> {
    let controller = AgentController::new(state.pool.clone());
    let response = controller.find(uuid).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn find_many(
    State(state): State<AppState>,
    Query(filters): Query<AgentFilters>,
) -> Result<Json<ApiResponse<Vec<AgentResponse>>>, AppError> {
    let controller = AgentController::new(state.pool.clone());
    let response = controller.find_many(filters).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn update(
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
    Json(request): Json<UpdateAgentRequest>,
) -> Result<Json<ApiResponse<AgentResponse>>, AppError> {
    let controller = AgentController::new(state.pool.clone());
    let response = controller.update(uuid, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete(
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
) -> Result<Json<ApiResponse<AgentResponse>>, AppError> {
    let controller = AgentController::new(state.pool.clone());
    let response = controller.delete(uuid).await?;
    Ok(Json(ApiResponse::success(response)))
}
