use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Company;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompanyRequest {
    #[validate(length(min = 1, max = 255))]
    pub company_name: String,

    #[validate(length(min = 1, max = 255))]
    pub fantasy_name: String,

    #[validate(length(min = 1, max = 20))]
    pub document_cnpj: String,

    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCompanyRequest {
    #[validate(length(min = 1, max = 255))]
    pub company_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub fantasy_name: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub document_cnpj: Option<String>,

    #[validate(email)]
    pub email: Option<String>,
}

/// Filtros de listado de companies
#[derive(Debug, Deserialize)]
pub struct CompanyFilters {
    /// Substring match sobre company_name
    pub company_name: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyResponse {
    pub uuid: Uuid,
    pub company_name: String,
    pub fantasy_name: String,
    pub document_cnpj: String,
    pub email: String,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            uuid: company.uuid,
            company_name: company.company_name,
            fantasy_name: company.fantasy_name,
            document_cnpj: company.document_cnpj,
            email: company.email,
        }
    }
}
