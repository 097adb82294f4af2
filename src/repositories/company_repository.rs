use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Company;
use crate::repositories::Pagination;
use crate::utils::errors::AppError;

pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        company_name: &str,
        fantasy_name: &str,
        document_cnpj: &str,
        email: &str,
    ) -> Result<Company, AppError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO company (uuid, company_name, fantasy_name, document_cnpj, email)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_name)
        .bind(fantasy_name)
        .bind(document_cnpj)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating company: {}", e)))?;

        Ok(company)
    }

    pub async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Company>, AppError> {
        let company = sqlx::query_as::<_, Company>("SELECT * FROM company WHERE uuid = $1")
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding company: {}", e)))?;

        Ok(company)
    }

    pub async fn find_many(
        &self,
        company_name: Option<&str>,
        pagination: Pagination,
    ) -> Result<Vec<Company>, AppError> {
        let companies = sqlx::query_as::<_, Company>(
            r#"
            SELECT * FROM company
            WHERE ($1::text IS NULL OR company_name ILIKE '%' || $1 || '%')
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(company_name)
        .bind(pagination.limit)
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing companies: {}", e)))?;

        Ok(companies)
    }

    /// Update parcial: los campos ausentes conservan su valor
    pub async fn update(
        &self,
        uuid: Uuid,
        company_name: Option<&str>,
        fantasy_name: Option<&str>,
        document_cnpj: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<Company>, AppError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            UPDATE company
            SET company_name = COALESCE($2, company_name),
                fantasy_name = COALESCE($3, fantasy_name),
                document_cnpj = COALESCE($4, document_cnpj),
                email = COALESCE($5, email)
            WHERE uuid = $1
            RETURNING *
            "#,
        )
        .bind(uuid)
        .bind(company_name)
        .bind(fantasy_name)
        .bind(document_cnpj)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating company: {}", e)))?;

        Ok(company)
    }

    /// Elimina y devuelve la fila borrada
    pub async fn delete(&self, uuid: Uuid) -> Result<Option<Company>, AppError> {
        let company =
            sqlx::query_as::<_, Company>("DELETE FROM company WHERE uuid = $1 RETURNING *")
                .bind(uuid)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error deleting company: {}", e)))?;

        Ok(company)
    }
}
