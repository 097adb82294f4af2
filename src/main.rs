mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{middleware as axum_middleware, response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::EnvironmentConfig;
use middleware::auth::agent_auth_middleware;
use middleware::cors::cors_middleware;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    info!("🚌 BusStop - Transit Backend");
    info!("============================");

    let config = EnvironmentConfig::from_env();

    let pool = match database::create_pool(&config.database_url()).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    database::run_migrations(&pool).await?;
    info!("✅ Migraciones aplicadas");

    let addr: SocketAddr = config.server_addr().parse()?;
    let state = AppState::new(pool, config);

    let app = create_app(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔑 Auth:        POST /auth/agent | PUT /auth/agent/refresh");
    info!("                POST /auth/user  | PUT /auth/user/refresh");
    info!("🏢 Company:     /company");
    info!("👤 Agent/User:  /agent | /user");
    info!("📍 Point/Route: /point | /route");
    info!("🚌 Vehicle:     /vehicle (+ position stream por WebSocket)");
    info!("🗺  Geolocation: /geolocation/find | /geolocation/distance");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

fn create_app(state: AppState) -> Router {
    // Todo lo que pasa por el middleware de agent; /auth queda exento
    // por la lista de rutas públicas.
    let agent_scoped = Router::new()
        .nest("/auth", routes::auth_routes::create_auth_router())
        .nest("/company", routes::company_routes::create_company_router())
        .nest("/agent", routes::agent_routes::create_agent_router())
        .nest("/user", routes::user_routes::create_user_router())
        .nest("/point", routes::point_routes::create_point_router())
        .nest("/route", routes::route_routes::create_route_router())
        .nest(
            "/geolocation",
            routes::geolocation_routes::create_geolocation_router(),
        )
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            agent_auth_middleware,
        ));

    Router::new()
        .route("/", get(index))
        .merge(agent_scoped)
        .nest(
            "/vehicle",
            routes::vehicle_routes::create_vehicle_router(state.clone()),
        )
        .layer(cors_middleware())
        .with_state(state)
}

/// Endpoint de estado simple
async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "info": "success",
        "content": {
            "service": "busstop-backend",
            "status": "ok",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal SIGTERM recibida, apagando servidor...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    // Pool perezoso: nunca se conecta mientras el request no llegue a
    // tocar la base. Alcanza para probar routing y middleware.
    fn test_app() -> Router {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/busstop_test")
            .unwrap();

        let config = EnvironmentConfig::from_env();

        create_app(AppState::new(pool, config))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_index_responde_ok() {
        let app = test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["info"], "success");
        assert_eq!(body["content"]["status"], "ok");
    }

    #[tokio::test]
    async fn test_ruta_protegida_sin_token_devuelve_401() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/company")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = body_json(response).await;
        assert_eq!(body["info"], "unauthorized");
    }

    #[tokio::test]
    async fn test_token_invalido_devuelve_401() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/agent/profile")
                    .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_stream_de_vehicle_requiere_token_de_user() {
        let app = test_app();

        let uuid = uuid::Uuid::new_v4();

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/vehicle/{}/location", uuid))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
