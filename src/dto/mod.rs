pub mod agent_dto;
pub mod auth_dto;
pub mod company_dto;
pub mod geolocation_dto;
pub mod point_dto;
pub mod response;
pub mod route_dto;
pub mod user_dto;
pub mod vehicle_dto;

pub use response::ApiResponse;
