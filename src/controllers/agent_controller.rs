use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::agent_dto::{AgentFilters, AgentResponse, CreateAgentRequest, UpdateAgentRequest};
use crate::repositories::agent_repository::AgentRepository;
use crate::repositories::company_repository::CompanyRepository;
use crate::repositories::Pagination;
use crate::utils::crypt::{hash_password, hash_password_if_present};
use crate::utils::errors::{model_not_found, AppError};

pub struct AgentController {
    repository: AgentRepository,
    company_repository: CompanyRepository,
}

impl AgentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AgentRepository::new(pool.clone()),
            company_repository: CompanyRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateAgentRequest) -> Result<AgentResponse, AppError> {
        request.validate()?;

        let company = self
            .company_repository
            .find_by_uuid(request.company_uuid)
            .await?
            .ok_or_else(|| model_not_found("Company", &request.company_uuid.to_string()))?;

        let password_hash = hash_password(&request.password)?;

        let agent = self
            .repository
            .create(company.id, &request.name, &request.email, &password_hash)
            .await?;

        Ok(AgentResponse::from(agent))
    }

    pub async fn find(&self, uuid: Uuid) -> Result<AgentResponse, AppError> {
        let agent = self
            .repository
            .find_by_uuid(uuid)
            .await?
            .ok_or_else(|| model_not_found("Agent", &uuid.to_string()))?;

        Ok(AgentResponse::from(agent))
    }

    pub async fn find_many(&self, filters: AgentFilters) -> Result<Vec<AgentResponse>, AppError> {
        let company_id = match filters.company_uuid {
            Some(company_uuid) => {
                let company = self
                    .company_repository
                    .find_by_uuid(company_uuid)
                    .await?
                    .ok_or_else(|| model_not_found("Company", &company_uuid.to_string()))?;

                Some(company.id)
            }
            None => None,
        };

        let pagination = Pagination::new(filters.page, filters.limit);

        let agents = self.repository.find_many(company_id, pagination).await?;

        Ok(agents.into_iter().map(AgentResponse::from).collect())
    }

    /// Update sin password deja el hash almacenado intacto
    pub async fn update(
        &self,
        uuid: Uuid,
        request: UpdateAgentRequest,
    ) -> Result<AgentResponse, AppError> {
        request.validate()?;

        let password_hash = hash_password_if_present(request.password.as_deref())?;

        let agent = self
            .repository
            .update(
                uuid,
                request.name.as_deref(),
                request.email.as_deref(),
                password_hash.as_deref(),
            )
            .await?
            .ok_or_else(|| model_not_found("Agent", &uuid.to_string()))?;

        Ok(AgentResponse::from(agent))
    }

    pub async fn delete(&self, uuid: Uuid) -> Result<AgentResponse, AppError> {
        let agent = self
            .repository
            .delete(uuid)
            .await?
            .ok_or_else(|| model_not_found("Agent", &uuid.to_string()))?;

        Ok(AgentResponse::from(agent))
    }
}
