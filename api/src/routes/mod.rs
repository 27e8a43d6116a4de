pub mod home_route;
pub mod query;
