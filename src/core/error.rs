//! Request error handling

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::app::inventory::view;

/// Request failures.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("item {0} not found")]
    NotFound(i32),

    #[error("no item with id `{0}`")]
    UnknownId(String),

    #[error("missing form field `{0}`")]
    MissingField(&'static str),

    #[error("price `{0}` is not a number")]
    InvalidPrice(String),

    #[error("field `{field}` is longer than {max} characters")]
    FieldTooLong { field: String, max: u64 },

    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[source] sqlx::Error),

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => AppError::StorageUnavailable(err),
            other => AppError::Database(other),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::UnknownId(_) => StatusCode::NOT_FOUND,
            AppError::MissingField(_)
            | AppError::InvalidPrice(_)
            | AppError::FieldTooLong { .. } => StatusCode::BAD_REQUEST,
            AppError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // storage details stay in the log
        let message = if status.is_server_error() {
            error!(error = %self, "request failed");
            "The inventory database could not complete the request.".to_string()
        } else {
            warn!(error = %self, "request rejected");
            self.to_string()
        };

        (status, Html(view::error_page(status, &message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::NotFound(1).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::UnknownId("99999999999".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::MissingField("name").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidPrice("abc".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::FieldTooLong {
                field: "name".into(),
                max: 100
            }
            .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_sqlx_errors_split_by_availability() {
        assert!(matches!(
            AppError::from(sqlx::Error::PoolTimedOut),
            AppError::StorageUnavailable(_)
        ));
        assert!(matches!(
            AppError::from(sqlx::Error::RowNotFound),
            AppError::Database(_)
        ));
        assert_eq!(
            AppError::from(sqlx::Error::PoolClosed).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_server_errors_hide_details() {
        let response = AppError::Database(sqlx::Error::Protocol("secret".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(!body.contains("secret"));
    }

    #[tokio::test]
    async fn test_client_errors_explain_themselves() {
        let response = AppError::MissingField("price").into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("missing form field `price`"));
    }
}
