//! Controllers por recurso
//!
//! Orquestan validación, resolución de entidades relacionadas y llamadas
//! a los repositorios. Los handlers de axum viven en `routes/`.

pub mod agent_controller;
pub mod company_controller;
pub mod point_controller;
pub mod route_controller;
pub mod user_controller;
pub mod vehicle_controller;
