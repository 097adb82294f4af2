//! Middleware de CORS

use tower_http::cors::CorsLayer;

/// CORS permisivo; los orígenes reales los controla el proxy de entrada
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
