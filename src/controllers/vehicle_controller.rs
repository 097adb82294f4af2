use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters, VehicleResponse,
};
use crate::repositories::company_repository::CompanyRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::repositories::Pagination;
use crate::utils::errors::{model_not_found, AppError};

pub struct VehicleController {
    repository: VehicleRepository,
    company_repository: CompanyRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            company_repository: CompanyRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        company_uuid: Uuid,
        request: CreateVehicleRequest,
    ) -> Result<VehicleResponse, AppError> {
        request.validate()?;

        let company = self
            .company_repository
            .find_by_uuid(company_uuid)
            .await?
            .ok_or_else(|| model_not_found("Company", &company_uuid.to_string()))?;

        // La placa es única en todo el sistema
        if self.repository.plate_exists(&request.plate).await? {
            return Err(AppError::Conflict(format!(
                "Vehicle with plate '{}' already exists",
                request.plate
            )));
        }

        let vehicle = self
            .repository
            .create(company.id, request.vehicle_type, &request.plate)
            .await?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn find(&self, uuid: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_uuid(uuid)
            .await?
            .ok_or_else(|| model_not_found("Vehicle", &uuid.to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn find_many(
        &self,
        company_uuid: Uuid,
        filters: VehicleFilters,
    ) -> Result<Vec<VehicleResponse>, AppError> {
        let company = self
            .company_repository
            .find_by_uuid(company_uuid)
            .await?
            .ok_or_else(|| model_not_found("Company", &company_uuid.to_string()))?;

        let pagination = Pagination::new(filters.page, filters.limit);

        let vehicles = self
            .repository
            .find_many(company.id, filters.vehicle_type, pagination)
            .await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        uuid: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<VehicleResponse, AppError> {
        request.validate()?;

        if let Some(plate) = request.plate.as_deref() {
            let current = self
                .repository
                .find_by_uuid(uuid)
                .await?
                .ok_or_else(|| model_not_found("Vehicle", &uuid.to_string()))?;

            if current.plate != plate && self.repository.plate_exists(plate).await? {
                return Err(AppError::Conflict(format!(
                    "Vehicle with plate '{}' already exists",
                    plate
                )));
            }
        }

        let vehicle = self
            .repository
            .update(uuid, request.vehicle_type, request.plate.as_deref())
            .await?
            .ok_or_else(|| model_not_found("Vehicle", &uuid.to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn delete(&self, uuid: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .delete(uuid)
            .await?
            .ok_or_else(|| model_not_found("Vehicle", &uuid.to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }
}
