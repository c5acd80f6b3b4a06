//! Inventory items: model, storage, forms, views and handlers

pub mod form;
pub mod handler;
pub mod model;
pub mod repository;
pub mod view;

pub use handler::AppState;
pub use model::{Item, ItemFields};
pub use repository::{ItemRepository, MemoryItemRepository, PgItemRepository};
