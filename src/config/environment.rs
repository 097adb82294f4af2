//! Configuración de variables de entorno
//!
//! Toda la configuración viene del entorno, con los mismos defaults
//! que usa el entorno de desarrollo.

use std::env;

use crate::utils::jwt::JwtConfig;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub api_host: String,
    pub api_port: u16,

    pub database_host: String,
    pub database_port: String,
    pub database_name: String,
    pub database_username: String,
    pub database_password: String,

    pub secret_key: String,
    pub token_expiration_minutes: i64,
    pub refresh_token_expiration_minutes: i64,

    /// Prefijos de rutas que no exigen token de agent
    pub agent_public_routes: Vec<String>,
    /// Prefijos de rutas que no exigen token de user
    pub user_public_routes: Vec<String>,

    pub google_api_url: String,
    pub google_api_key: String,
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_list_or(name: &str, default: &str) -> Vec<String> {
    env_or(name, default)
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl EnvironmentConfig {
    pub fn from_env() -> Self {
        Self {
            api_host: env_or("API_HOST", "0.0.0.0"),
            api_port: env_or("API_PORT", "3000").parse().unwrap_or(3000),

            database_host: env_or("DATABASE_HOST", "localhost"),
            database_port: env_or("DATABASE_PORT", "5432"),
            database_name: env_or("DATABASE_DBNAME", "busstop"),
            database_username: env_or("DATABASE_USERNAME", "postgres"),
            database_password: env_or("DATABASE_PASSWORD", "postgres"),

            secret_key: env_or("SECRET_KEY", "test123"),
            token_expiration_minutes: env_or("TOKEN_EXPIRATION_MINUTE", "5")
                .parse()
                .unwrap_or(5),
            refresh_token_expiration_minutes: env_or("REFRESH_TOKEN_EXPIRATION_MINUTE", "60")
                .parse()
                .unwrap_or(60),

            agent_public_routes: env_list_or("AGENT_PUBLIC_ROUTES", "/auth"),
            user_public_routes: env_list_or("USER_PUBLIC_ROUTES", "/auth"),

            google_api_url: env_or("GOOGLE_API_URL", "https://maps.googleapis.com/maps/api"),
            google_api_key: env_or("GOOGLE_API_KEY", ""),
        }
    }

    /// URL de conexión a PostgreSQL; `DATABASE_URL` tiene prioridad
    /// sobre las partes individuales.
    pub fn database_url(&self) -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| {
            format!(
                "postgresql://{}:{}@{}:{}/{}",
                self.database_username,
                self.database_password,
                self.database_host,
                self.database_port,
                self.database_name
            )
        })
    }

    /// Dirección de escucha del servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }

    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            secret: self.secret_key.clone(),
            token_expiration_minutes: self.token_expiration_minutes,
            refresh_expiration_minutes: self.refresh_token_expiration_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_list_parsing() {
        std::env::set_var("TEST_PUBLIC_ROUTES", "/auth, /docs ,");
        let routes = env_list_or("TEST_PUBLIC_ROUTES", "/auth");
        assert_eq!(routes, vec!["/auth".to_string(), "/docs".to_string()]);
    }
}
