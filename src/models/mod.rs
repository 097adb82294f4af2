pub mod agent;
pub mod company;
pub mod point;
pub mod route;
pub mod user;
pub mod vehicle;

pub use agent::Agent;
pub use company::Company;
pub use point::Point;
pub use route::{Route, RoutePoint};
pub use user::User;
pub use vehicle::{Vehicle, VehicleType};
