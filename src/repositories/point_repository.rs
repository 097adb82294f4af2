use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Point;
use crate::repositories::Pagination;
use crate::utils::errors::AppError;

pub struct PointRepository {
    pool: PgPool,
}

impl PointRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        company_id: i32,
        address_zip_code: &str,
        address_state: &str,
        address_city: &str,
        address_neighborhood: &str,
        address_street: &str,
        address_number: &str,
        latitude: &str,
        longitude: &str,
        place_id: Option<&str>,
    ) -> Result<Point, AppError> {
        let point = sqlx::query_as::<_, Point>(
            r#"
            INSERT INTO point (
                uuid, company_id, address_zip_code, address_state, address_city,
                address_neighborhood, address_street, address_number,
                latitude, longitude, place_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_id)
        .bind(address_zip_code)
        .bind(address_state)
        .bind(address_city)
        .bind(address_neighborhood)
        .bind(address_street)
        .bind(address_number)
        .bind(latitude)
        .bind(longitude)
        .bind(place_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating point: {}", e)))?;

        Ok(point)
    }

    pub async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Point>, AppError> {
        let point = sqlx::query_as::<_, Point>("SELECT * FROM point WHERE uuid = $1")
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding point: {}", e)))?;

        Ok(point)
    }

    pub async fn find_many(
        &self,
        company_id: i32,
        address_city: Option<&str>,
        pagination: Pagination,
    ) -> Result<Vec<Point>, AppError> {
        let points = sqlx::query_as::<_, Point>(
            r#"
            SELECT * FROM point
            WHERE company_id = $1
              AND ($2::text IS NULL OR address_city ILIKE '%' || $2 || '%')
            ORDER BY id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(company_id)
        .bind(address_city)
        .bind(pagination.limit)
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing points: {}", e)))?;

        Ok(points)
    }

    /// Resuelve points por uuid, restringidos a una company. El orden de
    /// entrada NO se preserva aquí; el controller reordena según la lista
    /// recibida.
    pub async fn find_many_by_uuids(
        &self,
        company_id: i32,
        uuids: &[Uuid],
    ) -> Result<Vec<Point>, AppError> {
        let points = sqlx::query_as::<_, Point>(
            "SELECT * FROM point WHERE company_id = $1 AND uuid = ANY($2)",
        )
        .bind(company_id)
        .bind(uuids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error resolving points: {}", e)))?;

        Ok(points)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        uuid: Uuid,
        address_zip_code: Option<&str>,
        address_state: Option<&str>,
        address_city: Option<&str>,
        address_neighborhood: Option<&str>,
        address_street: Option<&str>,
        address_number: Option<&str>,
        latitude: Option<&str>,
        longitude: Option<&str>,
        place_id: Option<&str>,
    ) -> Result<Option<Point>, AppError> {
        let point = sqlx::query_as::<_, Point>(
            r#"
            UPDATE point
            SET address_zip_code = COALESCE($2, address_zip_code),
                address_state = COALESCE($3, address_state),
                address_city = COALESCE($4, address_city),
                address_neighborhood = COALESCE($5, address_neighborhood),
                address_street = COALESCE($6, address_street),
                address_number = COALESCE($7, address_number),
                latitude = COALESCE($8, latitude),
                longitude = COALESCE($9, longitude),
                place_id = COALESCE($10, place_id)
            WHERE uuid = $1
            RETURNING *
            "#,
        )
        .bind(uuid)
        .bind(address_zip_code)
        .bind(address_state)
        .bind(address_city)
        .bind(address_neighborhood)
        .bind(address_street)
        .bind(address_number)
        .bind(latitude)
        .bind(longitude)
        .bind(place_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating point: {}", e)))?;

        Ok(point)
    }

    /// Borra el point y antes sus filas de junction, para no dejar
    /// filas huérfanas en route_point.
    pub async fn delete(&self, uuid: Uuid) -> Result<Option<Point>, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Error starting transaction: {}", e)))?;

        sqlx::query(
            "DELETE FROM route_point WHERE point_id = (SELECT id FROM point WHERE uuid = $1)",
        )
        .bind(uuid)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::Database(format!("Error deleting route points: {}", e)))?;

        let point = sqlx::query_as::<_, Point>("DELETE FROM point WHERE uuid = $1 RETURNING *")
            .bind(uuid)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting point: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::Database(format!("Error committing transaction: {}", e)))?;

        Ok(point)
    }
}
