use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Agent;
use crate::repositories::Pagination;
use crate::utils::errors::AppError;

pub struct AgentRepository {
    pool: PgPool,
}

impl AgentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// El password ya debe llegar hasheado
    pub async fn create(
        &self,
        company_id: i32,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Agent, AppError> {
        let agent = sqlx::query_as::<_, Agent>(
            r#"
            INSERT INTO agent (uuid, company_id, name, email, password)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_id)
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating agent: {}", e)))?;

        Ok(agent)
    }

    pub async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Agent>, AppError> {
        let agent = sqlx::query_as::<_, Agent>("SELECT * FROM agent WHERE uuid = $1")
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding agent: {}", e)))?;

        Ok(agent)
    }

    /// Lookup case-insensitive para autenticación
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Agent>, AppError> {
        let agent =
            sqlx::query_as::<_, Agent>("SELECT * FROM agent WHERE LOWER(email) = LOWER($1)")
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error finding agent by email: {}", e)))?;

        Ok(agent)
    }

    pub async fn find_many(
        &self,
        company_id: Option<i32>,
        pagination: Pagination,
    ) -> Result<Vec<Agent>, AppError> {
        let agents = sqlx::query_as::<_, Agent>(
            r#"
            SELECT * FROM agent
            WHERE ($1::int IS NULL OR company_id = $1)
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(company_id)
        .bind(pagination.limit)
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing agents: {}", e)))?;

        Ok(agents)
    }

    /// Update parcial; un password_hash ausente deja el hash intacto
    pub async fn update(
        &self,
        uuid: Uuid,
        name: Option<&str>,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<Option<Agent>, AppError> {
        let agent = sqlx::query_as::<_, Agent>(
            r#"
            UPDATE agent
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                password = COALESCE($4, password)
            WHERE uuid = $1
            RETURNING *
            "#,
        )
        .bind(uuid)
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating agent: {}", e)))?;

        Ok(agent)
    }

    pub async fn delete(&self, uuid: Uuid) -> Result<Option<Agent>, AppError> {
        let agent = sqlx::query_as::<_, Agent>("DELETE FROM agent WHERE uuid = $1 RETURNING *")
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting agent: {}", e)))?;

        Ok(agent)
    }
}
