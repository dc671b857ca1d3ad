pub mod auth_route;
pub mod poll_route;
pub mod user_route;
