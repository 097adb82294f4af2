use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Agent;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAgentRequest {
    pub company_uuid: Uuid,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8))]
    pub password: String,
}

/// El password es opcional: si no viene, el hash almacenado no cambia
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAgentRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 8))]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AgentFilters {
    pub company_uuid: Option<Uuid>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Response sin el hash de contraseña
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResponse {
    pub uuid: Uuid,
    pub name: String,
    pub email: String,
}

impl From<Agent> for AgentResponse {
    fn from(agent: Agent) -> Self {
        Self {
            uuid: agent.uuid,
            name: agent.name,
            email: agent.email,
        }
    }
}
