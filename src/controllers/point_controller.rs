use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::point_dto::{CreatePointRequest, PointFilters, PointResponse, UpdatePointRequest};
use crate::repositories::company_repository::CompanyRepository;
use crate::repositories::point_repository::PointRepository;
use crate::repositories::Pagination;
use crate::utils::errors::{model_not_found, AppError};

pub struct PointController {
    repository: PointRepository,
    company_repository: CompanyRepository,
}

impl PointController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PointRepository::new(pool.clone()),
            company_repository: CompanyRepository::new(pool),
        }
    }

    /// Un point siempre nace dentro de una company; se resuelve primero
    /// la company por uuid.
    pub async fn create(
        &self,
        company_uuid: Uuid,
        request: CreatePointRequest,
    ) -> Result<PointResponse, AppError> {
        request.validate()?;

        let company = self
            .company_repository
            .find_by_uuid(company_uuid)
            .await?
            .ok_or_else(|| model_not_found("Company", &company_uuid.to_string()))?;

        let point = self
            .repository
            .create(
                company.id,
                &request.address_zip_code,
                &request.address_state,
                &request.address_city,
                &request.address_neighborhood,
                &request.address_street,
                &request.address_number,
                &request.latitude,
                &request.longitude,
                request.place_id.as_deref(),
            )
            .await?;

        Ok(PointResponse::from(point))
    }

    pub async fn find(&self, uuid: Uuid) -> Result<PointResponse, AppError> {
        let point = self
            .repository
            .find_by_uuid(uuid)
            .await?
            .ok_or_else(|| model_not_found("Point", &uuid.to_string()))?;

        Ok(PointResponse::from(point))
    }

    pub async fn find_many(
        &self,
        company_uuid: Uuid,
        filters: PointFilters,
    ) -> Result<Vec<PointResponse>, AppError> {
        let company = self
            .company_repository
            .find_by_uuid(company_uuid)
            .await?
            .ok_or_else(|| model_not_found("Company", &company_uuid.to_string()))?;

        let pagination = Pagination::new(filters.page, filters.limit);

        let points = self
            .repository
            .find_many(company.id, filters.address_city.as_deref(), pagination)
            .await?;

        Ok(points.into_iter().map(PointResponse::from).collect())
    }

    pub async fn update(
        &self,
        uuid: Uuid,
        request: UpdatePointRequest,
    ) -> Result<PointResponse, AppError> {
        request.validate()?;

        let point = self
            .repository
            .update(
                uuid,
                request.address_zip_code.as_deref(),
                request.address_state.as_deref(),
                request.address_city.as_deref(),
                request.address_neighborhood.as_deref(),
                request.address_street.as_deref(),
                request.address_number.as_deref(),
                request.latitude.as_deref(),
                request.longitude.as_deref(),
                request.place_id.as_deref(),
            )
            .await?
            .ok_or_else(|| model_not_found("Point", &uuid.to_string()))?;

        Ok(PointResponse::from(point))
    }

    pub async fn delete(&self, uuid: Uuid) -> Result<PointResponse, AppError> {
        let point = self
            .repository
            .delete(uuid)
            .await?
            .ok_or_else(|| model_not_found("Point", &uuid.to_string()))?;

        Ok(PointResponse::from(point))
    }
}
