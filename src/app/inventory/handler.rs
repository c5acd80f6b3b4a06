//! Inventory route handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use tracing::info;

use super::{
    form::ItemForm,
    model::ItemFields,
    repository::ItemRepository,
    view,
};
use crate::core::error::{AppError, AppResult};

#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemRepository>,
}

impl AppState {
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }
}

/// Any path segment that cannot name a stored item is a 404, not a 400.
fn item_id(raw: &str) -> AppResult<i32> {
    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::UnknownId(raw.to_string()))
}

pub async fn list_items(State(state): State<AppState>) -> AppResult<Html<String>> {
    let items = state.items.list_all().await?;
    Ok(Html(view::list_page(&items)))
}

pub async fn add_form() -> Html<String> {
    Html(view::add_page())
}

pub async fn add_item(
    State(state): State<AppState>,
    Form(form): Form<ItemForm>,
) -> AppResult<Redirect> {
    let fields = ItemFields::try_from(form)?;
    let item = state.items.create(fields).await?;
    info!(id = item.id, "created {}", item);
    Ok(Redirect::to("/"))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let item = state.items.get(item_id(&id)?).await?;
    Ok(Html(view::edit_page(&item)))
}

pub async fn edit_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ItemForm>,
) -> AppResult<Redirect> {
    let id = item_id(&id)?;
    let fields = match ItemFields::try_from(form) {
        Ok(fields) => fields,
        Err(err) => {
            // an unknown id is reported ahead of a bad form
            state.items.get(id).await?;
            return Err(err);
        }
    };
    let item = state.items.update(id, fields).await?;
    info!(id = item.id, "updated {}", item);
    Ok(Redirect::to("/"))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Redirect> {
    let id = item_id(&id)?;
    state.items.delete(id).await?;
    info!(id, "deleted item");
    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_parses_stored_range() {
        assert_eq!(item_id("1").unwrap(), 1);
        assert_eq!(item_id("2147483647").unwrap(), i32::MAX);
    }

    #[test]
    fn test_item_id_rejects_as_not_found() {
        for raw in ["99999999999", "2147483648", "0", "-3", "abc", ""] {
            match item_id(raw) {
                Err(err @ AppError::UnknownId(_)) => {
                    assert_eq!(err.status(), axum::http::StatusCode::NOT_FOUND)
                }
                other => panic!("{raw:?} should be unknown, got {other:?}"),
            }
        }
    }
}
