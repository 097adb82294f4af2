//! Utilidades JWT
//!
//! Tokens de acceso y de refresh para los dos espacios de identidad
//! (agent y user). Cada token lleva el uuid del sujeto, la audiencia
//! y el flag `is_refresh`.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Audiencia del token: agentes y users son espacios independientes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenAudience {
    Agent,
    User,
}

impl std::fmt::Display for TokenAudience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenAudience::Agent => write!(f, "agent"),
            TokenAudience::User => write!(f, "user"),
        }
    }
}

/// Claims del JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub aud: TokenAudience,
    /// Solo presente en tokens de agent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_uuid: Option<String>,
    pub exp: usize,
    pub iat: usize,
    pub is_refresh: bool,
}

/// Configuración de JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub token_expiration_minutes: i64,
    pub refresh_expiration_minutes: i64,
}

/// Par de tokens devuelto por la autenticación
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub token: String,
    pub refresh_token: String,
}

fn create_token(
    subject_uuid: Uuid,
    audience: TokenAudience,
    company_uuid: Option<Uuid>,
    expiration_minutes: i64,
    is_refresh: bool,
    config: &JwtConfig,
) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::minutes(expiration_minutes);

    let claims = JwtClaims {
        sub: subject_uuid.to_string(),
        aud: audience,
        company_uuid: company_uuid.map(|uuid| uuid.to_string()),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
        is_refresh,
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Error generating token: {}", e)))
}

/// Generar token de acceso para un sujeto
pub fn generate_access_token(
    subject_uuid: Uuid,
    audience: TokenAudience,
    company_uuid: Option<Uuid>,
    config: &JwtConfig,
) -> Result<String, AppError> {
    create_token(
        subject_uuid,
        audience,
        company_uuid,
        config.token_expiration_minutes,
        false,
        config,
    )
}

/// Generar el par token + refresh token
pub fn generate_token_pair(
    subject_uuid: Uuid,
    audience: TokenAudience,
    company_uuid: Option<Uuid>,
    config: &JwtConfig,
) -> Result<TokenPair, AppError> {
    let token = generate_access_token(subject_uuid, audience, company_uuid, config)?;

    let refresh_token = create_token(
        subject_uuid,
        audience,
        company_uuid,
        config.refresh_expiration_minutes,
        true,
        config,
    )?;

    Ok(TokenPair {
        token,
        refresh_token,
    })
}

/// Verificar y decodificar un token para la audiencia esperada
pub fn verify_token(
    token: &str,
    audience: TokenAudience,
    config: &JwtConfig,
) -> Result<JwtClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

    // La audiencia se valida manualmente porque va serializada como enum
    let mut validation = Validation::default();
    validation.validate_aud = false;

    let token_data = decode::<JwtClaims>(token, &decoding_key, &validation)
        .map_err(|e| AppError::Jwt(format!("Invalid token: {}", e)))?;

    let claims = token_data.claims;

    if claims.aud != audience {
        return Err(AppError::Jwt(format!(
            "Token was not issued for the '{}' audience",
            audience
        )));
    }

    Ok(claims)
}

/// Extraer el subject uuid de unos claims ya verificados
pub fn subject_uuid(claims: &JwtClaims) -> Result<Uuid, AppError> {
    Uuid::parse_str(&claims.sub).map_err(|_| AppError::Jwt("Invalid subject uuid".to_string()))
}

/// Extraer token del header Authorization
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Jwt("Authorization header must start with 'Bearer '".to_string()))?;

    if token.is_empty() {
        return Err(AppError::Jwt("Token cannot be empty".to_string()));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test123".to_string(),
            token_expiration_minutes: 5,
            refresh_expiration_minutes: 10,
        }
    }

    #[test]
    fn test_token_pair_round_trip() {
        let config = test_config();
        let subject = Uuid::new_v4();
        let company = Uuid::new_v4();

        let pair =
            generate_token_pair(subject, TokenAudience::Agent, Some(company), &config).unwrap();

        let access = verify_token(&pair.token, TokenAudience::Agent, &config).unwrap();
        assert_eq!(access.sub, subject.to_string());
        assert_eq!(access.company_uuid, Some(company.to_string()));
        assert!(!access.is_refresh);

        let refresh = verify_token(&pair.refresh_token, TokenAudience::Agent, &config).unwrap();
        assert_eq!(refresh.sub, subject.to_string());
        assert!(refresh.is_refresh);
    }

    #[test]
    fn test_audience_mismatch_is_rejected() {
        let config = test_config();
        let subject = Uuid::new_v4();

        let pair = generate_token_pair(subject, TokenAudience::User, None, &config).unwrap();

        let result = verify_token(&pair.token, TokenAudience::Agent, &config);
        assert!(result.is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = JwtConfig {
            secret: "test123".to_string(),
            token_expiration_minutes: -5,
            refresh_expiration_minutes: -5,
        };
        let subject = Uuid::new_v4();

        let token =
            generate_access_token(subject, TokenAudience::User, None, &config).unwrap();

        let result = verify_token(&token, TokenAudience::User, &test_config());
        assert!(result.is_err());
    }

    #[test]
    fn test_user_token_has_no_company() {
        let config = test_config();
        let subject = Uuid::new_v4();

        let token = generate_access_token(subject, TokenAudience::User, None, &config).unwrap();
        let claims = verify_token(&token, TokenAudience::User, &config).unwrap();

        assert_eq!(claims.company_uuid, None);
        assert_eq!(subject_uuid(&claims).unwrap(), subject);
    }

    #[test]
    fn test_extract_token_from_header() {
        assert_eq!(extract_token_from_header("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(extract_token_from_header("abc.def.ghi").is_err());
        assert!(extract_token_from_header("Bearer ").is_err());
    }
}
