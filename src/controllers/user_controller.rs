use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::user_dto::{CreateUserRequest, UpdateUserRequest, UserFilters, UserResponse};
use crate::repositories::user_repository::UserRepository;
use crate::repositories::Pagination;
use crate::utils::crypt::{hash_password, hash_password_if_present};
use crate::utils::errors::{model_not_found, AppError};

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateUserRequest) -> Result<UserResponse, AppError> {
        request.validate()?;

        let password_hash = hash_password(&request.password)?;

        let user = self
            .repository
            .create(&request.name, &request.email, &password_hash)
            .await?;

        Ok(UserResponse::from(user))
    }

    pub async fn find(&self, uuid: Uuid) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_uuid(uuid)
            .await?
            .ok_or_else(|| model_not_found("User", &uuid.to_string()))?;

        Ok(UserResponse::from(user))
    }

    pub async fn find_many(&self, filters: UserFilters) -> Result<Vec<UserResponse>, AppError> {
        let pagination = Pagination::new(filters.page, filters.limit);

        let users = self
            .repository
            .find_many(filters.name.as_deref(), pagination)
            .await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn update(
        &self,
        uuid: Uuid,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, AppError> {
        request.validate()?;

        let password_hash = hash_password_if_present(request.password.as_deref())?;

        let user = self
            .repository
            .update(
                uuid,
                request.name.as_deref(),
                request.email.as_deref(),
                password_hash.as_deref(),
            )
            .await?
            .ok_or_else(|| model_not_found("User", &uuid.to_string()))?;

        Ok(UserResponse::from(user))
    }

    pub async fn delete(&self, uuid: Uuid) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .delete(uuid)
            .await?
            .ok_or_else(|| model_not_found("User", &uuid.to_string()))?;

        Ok(UserResponse::from(user))
    }
}
