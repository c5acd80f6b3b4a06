//! # inventory-web
//!
//! Server-rendered inventory tracking: one `inventory` table in PostgreSQL,
//! listed, added, edited and deleted through HTML forms.
//!
//! - `app`: routes, handlers, views and the item repository
//! - `core`: request errors and middleware
//! - `infrastructure`: configuration, database pool, logging

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::{routes, AppState};
pub use crate::core::error::{AppError, AppResult};
