//! Servicio de autenticación
//!
//! Emite y refresca los pares de tokens para los dos espacios de
//! identidad (agent y user) y resuelve la identidad detrás de un token
//! para el middleware.

use sqlx::PgPool;

use crate::dto::auth_dto::{AuthResponse, RefreshResponse};
use crate::models::{Agent, User};
use crate::repositories::agent_repository::AgentRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::crypt::compare_password;
use crate::utils::errors::{model_not_found, AppError};
use crate::utils::jwt::{
    generate_access_token, generate_token_pair, subject_uuid, verify_token, JwtConfig,
    TokenAudience,
};

pub struct AuthService {
    pool: PgPool,
    agent_repository: AgentRepository,
    user_repository: UserRepository,
    jwt_config: JwtConfig,
}

impl AuthService {
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self {
            agent_repository: AgentRepository::new(pool.clone()),
            user_repository: UserRepository::new(pool.clone()),
            pool,
            jwt_config,
        }
    }

    /// Autentica un agent por email (case-insensitive) y password.
    /// El token de acceso lleva además el uuid de la company.
    pub async fn auth_agent(&self, email: &str, password: &str) -> Result<AuthResponse, AppError> {
        let agent = self
            .agent_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Agent not found".to_string()))?;

        if !compare_password(password, &agent.password)? {
            return Err(AppError::Unauthorized("Invalid password".to_string()));
        }

        let company_uuid = self.agent_company_uuid(&agent).await?;

        let pair = generate_token_pair(
            agent.uuid,
            TokenAudience::Agent,
            Some(company_uuid),
            &self.jwt_config,
        )?;

        Ok(AuthResponse {
            token: pair.token,
            refresh_token: pair.refresh_token,
        })
    }

    pub async fn auth_user(&self, email: &str, password: &str) -> Result<AuthResponse, AppError> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

        if !compare_password(password, &user.password)? {
            return Err(AppError::Unauthorized("Invalid password".to_string()));
        }

        let pair = generate_token_pair(user.uuid, TokenAudience::User, None, &self.jwt_config)?;

        Ok(AuthResponse {
            token: pair.token,
            refresh_token: pair.refresh_token,
        })
    }

    /// Re-emite un token de acceso de agent a partir de un refresh token.
    /// Rechaza tokens de acceso usados como refresh, y falla con NotFound
    /// si el agent fue borrado después de la emisión.
    pub async fn refresh_agent_token(&self, refresh_token: &str) -> Result<RefreshResponse, AppError> {
        let claims = verify_token(refresh_token, TokenAudience::Agent, &self.jwt_config)?;

        if !claims.is_refresh {
            return Err(AppError::Jwt("Invalid token: not a refresh token".to_string()));
        }

        let agent_uuid = subject_uuid(&claims)?;

        let agent = self
            .agent_repository
            .find_by_uuid(agent_uuid)
            .await?
            .ok_or_else(|| model_not_found("Agent", &agent_uuid.to_string()))?;

        let company_uuid = self.agent_company_uuid(&agent).await?;

        let token = generate_access_token(
            agent.uuid,
            TokenAudience::Agent,
            Some(company_uuid),
            &self.jwt_config,
        )?;

        Ok(RefreshResponse { token })
    }

    pub async fn refresh_user_token(&self, refresh_token: &str) -> Result<RefreshResponse, AppError> {
        let claims = verify_token(refresh_token, TokenAudience::User, &self.jwt_config)?;

        if !claims.is_refresh {
            return Err(AppError::Jwt("Invalid token: not a refresh token".to_string()));
        }

        let user_uuid = subject_uuid(&claims)?;

        let user = self
            .user_repository
            .find_by_uuid(user_uuid)
            .await?
            .ok_or_else(|| model_not_found("User", &user_uuid.to_string()))?;

        let token = generate_access_token(user.uuid, TokenAudience::User, None, &self.jwt_config)?;

        Ok(RefreshResponse { token })
    }

    /// Resuelve el Agent detrás de un token de acceso (para el middleware)
    pub async fn resolve_agent_token(&self, token: &str) -> Result<Agent, AppError> {
        let claims = verify_token(token, TokenAudience::Agent, &self.jwt_config)?;

        if claims.is_refresh {
            return Err(AppError::Jwt(
                "Refresh tokens cannot be used to access the API".to_string(),
            ));
        }

        let agent_uuid = subject_uuid(&claims)?;

        self.agent_repository
            .find_by_uuid(agent_uuid)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Agent no longer exists".to_string()))
    }

    /// Resuelve el User detrás de un token de acceso (para el middleware)
    pub async fn resolve_user_token(&self, token: &str) -> Result<User, AppError> {
        let claims = verify_token(token, TokenAudience::User, &self.jwt_config)?;

        if claims.is_refresh {
            return Err(AppError::Jwt(
                "Refresh tokens cannot be used to access the API".to_string(),
            ));
        }

        let user_uuid = subject_uuid(&claims)?;

        self.user_repository
            .find_by_uuid(user_uuid)
            .await?
            .ok_or_else(|| AppError::Unauthorized("User no longer exists".to_string()))
    }

    async fn agent_company_uuid(&self, agent: &Agent) -> Result<uuid::Uuid, AppError> {
        let row: (uuid::Uuid,) = sqlx::query_as("SELECT uuid FROM company WHERE id = $1")
            .bind(agent.company_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error resolving agent company: {}", e)))?;

        Ok(row.0)
    }
}
