pub mod auth_service;
pub mod geolocation_service;
pub mod vehicle_events_service;
