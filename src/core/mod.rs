//! Core layer

pub mod error;
pub mod middleware;
