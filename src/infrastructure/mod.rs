//! Infrastructure layer

pub mod config;
pub mod database;
pub mod logger;
