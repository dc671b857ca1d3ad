pub mod cors;
pub mod db;
pub mod logger;
