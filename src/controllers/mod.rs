pub mod auth_controller;
pub mod poll_controller;
pub mod user_controller;
