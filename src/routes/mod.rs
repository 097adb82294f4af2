pub mod agent_routes;
pub mod auth_routes;
pub mod company_routes;
pub mod geolocation_routes;
pub mod point_routes;
pub mod route_routes;
pub mod user_routes;
pub mod vehicle_routes;
