use axum::{
    extract::State,
    routing::{post, put},
    Json, Router,
};

use crate::dto::auth_dto::{AuthRequest, AuthResponse, RefreshRequest, RefreshResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/agent", post(auth_agent))
        .route("/agent/refresh", put(refresh_agent))
        .route("/user", post(auth_user))
        .route("/user/refresh", put(refresh_user))
}

async fn auth_agent(
    State(state): State<AppState>,
    Json(request): Json<AuthRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    let response = state
        .auth_service()
        .auth_agent(&request.email, &request.password)
        .await?;

    Ok(Json(ApiResponse::success(response)))
}

async fn refresh_agent(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<RefreshResponse>>, AppError> {
    let response = state
        .auth_service()
        .refresh_agent_token(&request.refresh_token)
        .await?;

    Ok(Json(ApiResponse::success(response)))
}

async fn auth_user(
    State(state): State<AppState>,
    Json(request): Json<AuthRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    let response = state
        .auth_service()
        .auth_user(&request.email, &request.password)
        .await?;

    Ok(Json(ApiResponse::success(response)))
}

async fn refresh_user(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<RefreshResponse>>, AppError> {
    let response = state
        .auth_service()
        .refresh_user_token(&request.refresh_token)
        .await?;

    Ok(Json(ApiResponse::success(response)))
}
