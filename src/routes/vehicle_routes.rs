//! Rutas de vehicles: CRUD para agents y eventos de posición para users.
//!
//! Los dos grupos viven bajo /vehicle pero con middleware distinto, por
//! eso el router se arma acá con `merge` en vez de anidarse dos veces.

use axum::{
    extract::{
        ws::{Message, WebSocket},
        Path, Query, State, WebSocketUpgrade,
    },
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters, VehiclePositionRequest,
    VehicleResponse,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::{agent_auth_middleware, user_auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router(state: AppState) -> Router<AppState> {
    let crud = Router::new()
        .route("/company/:company_uuid", get(find_many).post(create))
        .route("/:uuid", get(find).put(update).delete(delete))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            agent_auth_middleware,
        ));

    let events = Router::new()
        .route("/:uuid/position", post(report_position))
        .route("/:uuid/location", get(stream_positions))
        .layer(middleware::from_fn_with_state(state, user_auth_middleware));

    crud.merge(events)
}

async fn create(
    State(state): State<AppState>,
    Path(company_uuid): Path<Uuid>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(company_uuid, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn find(
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.find(uuid).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn find_many(
    State(state): State<AppState>,
    Path(company_uuid): Path<Uuid>,
    Query(filters): Query<VehicleFilters>,
) -> Result<Json<ApiResponse<Vec<VehicleResponse>>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.find_many(company_uuid, filters).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn update(
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(uuid, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete(
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.delete(uuid).await?;
    Ok(Json(ApiResponse::success(response)))
}

/// Un user reporta la posición actual de un vehicle; el evento se
/// difunde a todos los suscriptores del stream de ese vehicle.
async fn report_position(
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Json(request): Json<VehiclePositionRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    tracing::debug!("User {} reporting position for vehicle {}", user.uuid, uuid);

    let receivers = state
        .vehicle_events_service()
        .process_vehicle_position(uuid, request.latitude, request.longitude)
        .await?;

    Ok(Json(ApiResponse::success(serde_json::json!({
        "vehicle_uuid": uuid,
        "receivers": receivers,
    }))))
}

async fn stream_positions(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_vehicle_socket(socket, uuid, state))
}

async fn handle_vehicle_socket(socket: WebSocket, vehicle_uuid: Uuid, state: AppState) {
    let mut events = state.vehicle_streams.subscribe(vehicle_uuid).await;
    let (mut sink, mut stream) = socket.split();

    tracing::debug!("WebSocket opened for vehicle {}", vehicle_uuid);

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(payload) => {
                    if sink.send(Message::Text(payload)).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        "Vehicle {} stream lagged, {} events skipped",
                        vehicle_uuid,
                        skipped
                    );
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            message = stream.next() => match message {
                // El cliente no manda nada útil; solo interesa el cierre
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
        }
    }

    tracing::debug!("WebSocket closed for vehicle {}", vehicle_uuid);
}
