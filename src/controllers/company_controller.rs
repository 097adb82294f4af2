use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::company_dto::{
    CompanyFilters, CompanyResponse, CreateCompanyRequest, UpdateCompanyRequest,
};
use crate::repositories::company_repository::CompanyRepository;
use crate::repositories::Pagination;
use crate::utils::errors::{model_not_found, AppError};

pub struct CompanyController {
    repository: CompanyRepository,
}

impl CompanyController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CompanyRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateCompanyRequest) -> Result<CompanyResponse, AppError> {
        request.validate()?;

        let company = self
            .repository
            .create(
                &request.company_name,
                &request.fantasy_name,
                &request.document_cnpj,
                &request.email,
            )
            .await?;

        Ok(CompanyResponse::from(company))
    }

    pub async fn find(&self, uuid: Uuid) -> Result<CompanyResponse, AppError> {
        let company = self
            .repository
            .find_by_uuid(uuid)
            .await?
            .ok_or_else(|| model_not_found("Company", &uuid.to_string()))?;

        Ok(CompanyResponse::from(company))
    }

    pub async fn find_many(&self, filters: CompanyFilters) -> Result<Vec<CompanyResponse>, AppError> {
        let pagination = Pagination::new(filters.page, filters.limit);

        let companies = self
            .repository
            .find_many(filters.company_name.as_deref(), pagination)
            .await?;

        Ok(companies.into_iter().map(CompanyResponse::from).collect())
    }

    pub async fn update(
        &self,
        uuid: Uuid,
        request: UpdateCompanyRequest,
    ) -> Result<CompanyResponse, AppError> {
        request.validate()?;

        let company = self
            .repository
            .update(
                uuid,
                request.company_name.as_deref(),
                request.fantasy_name.as_deref(),
                request.document_cnpj.as_deref(),
                request.email.as_deref(),
            )
            .await?
            .ok_or_else(|| model_not_found("Company", &uuid.to_string()))?;

        Ok(CompanyResponse::from(company))
    }

    /// Devuelve la fila borrada
    pub async fn delete(&self, uuid: Uuid) -> Result<CompanyResponse, AppError> {
        let company = self
            .repository
            .delete(uuid)
            .await?
            .ok_or_else(|| model_not_found("Company", &uuid.to_string()))?;

        Ok(CompanyResponse::from(company))
    }
}
