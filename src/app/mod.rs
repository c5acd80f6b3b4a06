//! Application routes

pub mod inventory;

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::core::middleware::request_logging_middleware;
use inventory::handler::{add_form, add_item, delete_item, edit_form, edit_item, list_items};
pub use inventory::AppState;

/// Builds the full router over the given state.
///
/// Deletion answers on GET for existing links and bookmarks; the list page
/// itself submits a POST.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_items))
        .route("/add", get(add_form).post(add_item))
        .route("/edit/:id", get(edit_form).post(edit_item))
        .route("/delete/:id", get(delete_item).post(delete_item))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
