use chrono::NaiveTime;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Point, Route};
use crate::repositories::Pagination;
use crate::utils::errors::AppError;

pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserta la route y sus filas de junction en una transacción.
    /// `ordered_point_ids` ya viene en orden de visita; la posición en el
    /// slice se persiste como `index`.
    pub async fn create(
        &self,
        company_id: i32,
        description: &str,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
        ticket_price: Decimal,
        ordered_point_ids: &[i32],
    ) -> Result<Route, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Error starting transaction: {}", e)))?;

        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO route (uuid, company_id, description, opening_time, closing_time, ticket_price)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_id)
        .bind(description)
        .bind(opening_time)
        .bind(closing_time)
        .bind(ticket_price)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::Database(format!("Error creating route: {}", e)))?;

        Self::insert_route_points(&mut tx, route.id, ordered_point_ids).await?;

        tx.commit()
            .await
            .map_err(|e| AppError::Database(format!("Error committing transaction: {}", e)))?;

        Ok(route)
    }

    async fn insert_route_points(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        route_id: i32,
        ordered_point_ids: &[i32],
    ) -> Result<(), AppError> {
        for (index, point_id) in ordered_point_ids.iter().enumerate() {
            sqlx::query(
                r#"INSERT INTO route_point (route_id, point_id, "index") VALUES ($1, $2, $3)"#,
            )
            .bind(route_id)
            .bind(point_id)
            .bind(index as i32)
            .execute(&mut **tx)
            .await
            .map_err(|e| AppError::Database(format!("Error inserting route point: {}", e)))?;
        }

        Ok(())
    }

    pub async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Route>, AppError> {
        let route = sqlx::query_as::<_, Route>("SELECT * FROM route WHERE uuid = $1")
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding route: {}", e)))?;

        Ok(route)
    }

    /// Points de una route en orden de visita (index ascendente)
    pub async fn find_points_ordered(&self, route_id: i32) -> Result<Vec<Point>, AppError> {
        let points = sqlx::query_as::<_, Point>(
            r#"
            SELECT p.* FROM point p
            INNER JOIN route_point rp ON rp.point_id = p.id
            WHERE rp.route_id = $1
            ORDER BY rp."index"
            "#,
        )
        .bind(route_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing route points: {}", e)))?;

        Ok(points)
    }

    pub async fn find_many(
        &self,
        company_id: i32,
        description: Option<&str>,
        pagination: Pagination,
    ) -> Result<Vec<Route>, AppError> {
        let routes = sqlx::query_as::<_, Route>(
            r#"
            SELECT * FROM route
            WHERE company_id = $1
              AND ($2::text IS NULL OR description ILIKE '%' || $2 || '%')
            ORDER BY id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(company_id)
        .bind(description)
        .bind(pagination.limit)
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing routes: {}", e)))?;

        Ok(routes)
    }

    /// Actualiza los campos de la route y reemplaza la asociación completa
    /// de points, todo en una transacción.
    pub async fn update(
        &self,
        uuid: Uuid,
        description: &str,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
        ticket_price: Decimal,
        ordered_point_ids: &[i32],
    ) -> Result<Option<Route>, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Error starting transaction: {}", e)))?;

        let route = sqlx::query_as::<_, Route>(
            r#"
            UPDATE route
            SET description = $2,
                opening_time = $3,
                closing_time = $4,
                ticket_price = $5
            WHERE uuid = $1
            RETURNING *
            "#,
        )
        .bind(uuid)
        .bind(description)
        .bind(opening_time)
        .bind(closing_time)
        .bind(ticket_price)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::Database(format!("Error updating route: {}", e)))?;

        let Some(route) = route else {
            tx.rollback()
                .await
                .map_err(|e| AppError::Database(format!("Error rolling back: {}", e)))?;
            return Ok(None);
        };

        sqlx::query("DELETE FROM route_point WHERE route_id = $1")
            .bind(route.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::Database(format!("Error clearing route points: {}", e)))?;

        Self::insert_route_points(&mut tx, route.id, ordered_point_ids).await?;

        tx.commit()
            .await
            .map_err(|e| AppError::Database(format!("Error committing transaction: {}", e)))?;

        Ok(Some(route))
    }

    /// Borra primero las filas de junction y después la route
    pub async fn delete(&self, uuid: Uuid) -> Result<Option<Route>, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Error starting transaction: {}", e)))?;

        sqlx::query(
            "DELETE FROM route_point WHERE route_id = (SELECT id FROM route WHERE uuid = $1)",
        )
        .bind(uuid)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::Database(format!("Error deleting route points: {}", e)))?;

        let route = sqlx::query_as::<_, Route>("DELETE FROM route WHERE uuid = $1 RETURNING *")
            .bind(uuid)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting route: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::Database(format!("Error committing transaction: {}", e)))?;

        Ok(route)
    }
}
