//! Middleware de autenticación JWT
//!
//! Dos middlewares independientes, uno por espacio de identidad. Cada
//! uno tiene su propia allowlist de rutas públicas configurada por
//! entorno; el resto de las rutas exige `Authorization: Bearer` con un
//! token de acceso válido cuya identidad todavía exista en la base.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::models::{Agent, User};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::extract_token_from_header;

/// Agent autenticado, inyectado en las extensions de la request
#[derive(Debug, Clone)]
pub struct AuthenticatedAgent(pub Agent);

/// User autenticado, inyectado en las extensions de la request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

/// Una ruta es pública cuando su path empieza por algún prefijo de la
/// allowlist
pub fn is_public_path(path: &str, public_routes: &[String]) -> bool {
    public_routes.iter().any(|prefix| path.starts_with(prefix))
}

fn bearer_token(request: &Request) -> Result<&str, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authorization header required".to_string()))?;

    extract_token_from_header(auth_header)
}

/// Gate de las rutas operadas por agents
pub async fn agent_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if is_public_path(request.uri().path(), &state.config.agent_public_routes) {
        return Ok(next.run(request).await);
    }

    let token = bearer_token(&request)?;

    let agent = state.auth_service().resolve_agent_token(token).await?;

    request.extensions_mut().insert(AuthenticatedAgent(agent));

    Ok(next.run(request).await)
}

/// Gate de las rutas de cara a users (eventos de vehículos)
pub async fn user_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if is_public_path(request.uri().path(), &state.config.user_public_routes) {
        return Ok(next.run(request).await);
    }

    let token = bearer_token(&request)?;

    let user = state.auth_service().resolve_user_token(token).await?;

    request.extensions_mut().insert(AuthenticatedUser(user));

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_path_matches_by_prefix() {
        let public_routes = vec!["/auth".to_string(), "/docs".to_string()];

        assert!(is_public_path("/auth/agent", &public_routes));
        assert!(is_public_path("/auth/user/refresh", &public_routes));
        assert!(is_public_path("/docs", &public_routes));
        assert!(!is_public_path("/company", &public_routes));
        assert!(!is_public_path("/vehicle/abc/position", &public_routes));
    }

    #[test]
    fn test_empty_allowlist_protects_everything() {
        assert!(!is_public_path("/auth/agent", &[]));
    }
}
