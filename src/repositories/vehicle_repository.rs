use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Vehicle, VehicleType};
use crate::repositories::Pagination;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        company_id: i32,
        vehicle_type: VehicleType,
        plate: &str,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicle (uuid, company_id, type, plate)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_id)
        .bind(vehicle_type)
        .bind(plate)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicle WHERE uuid = $1")
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn plate_exists(&self, plate: &str) -> Result<bool, AppError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicle WHERE plate = $1)")
                .bind(plate)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error checking plate: {}", e)))?;

        Ok(exists.0)
    }

    pub async fn find_many(
        &self,
        company_id: i32,
        vehicle_type: Option<VehicleType>,
        pagination: Pagination,
    ) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicle
            WHERE company_id = $1
              AND ($2::vehicle_type IS NULL OR type = $2)
            ORDER BY id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(company_id)
        .bind(vehicle_type)
        .bind(pagination.limit)
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing vehicles: {}", e)))?;

        Ok(vehicles)
    }

    pub async fn update(
        &self,
        uuid: Uuid,
        vehicle_type: Option<VehicleType>,
        plate: Option<&str>,
    ) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicle
            SET type = COALESCE($2, type),
                plate = COALESCE($3, plate)
            WHERE uuid = $1
            RETURNING *
            "#,
        )
        .bind(uuid)
        .bind(vehicle_type)
        .bind(plate)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn delete(&self, uuid: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle =
            sqlx::query_as::<_, Vehicle>("DELETE FROM vehicle WHERE uuid = $1 RETURNING *")
                .bind(uuid)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error deleting vehicle: {}", e)))?;

        Ok(vehicle)
    }
}
