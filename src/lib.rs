pub mod app;
pub mod config;
pub mod controllers;
pub mod dtos;
pub mod error;
pub mod models;
pub mod repositories;
pub mod routes;

#[cfg(test)]
mod tests;
