//! Failure taxonomy shared by the favorites store and the lookup adapter.
//!
//! Every variant maps to one HTTP status and a JSON `{"message": ...}` body
//! through `ResponseError`, so handlers can simply return
//! `Result<HttpResponse, CatalogError>`.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::responses::ErrorMessage;
use thiserror::Error;

/// Public message for every upstream failure; the detail stays in the logs.
pub const UPSTREAM_MESSAGE: &str = "Error connecting to the external card database.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Missing or empty client input. Always the caller's fault.
    #[error("{0}")]
    Validation(String),

    /// The referenced favorite id or searched card does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The external card database failed or could not be reached.
    /// `detail` is for logs only.
    #[error("upstream failure: {detail}")]
    Upstream { detail: String },
}

impl CatalogError {
    pub fn validation(message: impl Into<String>) -> Self {
        CatalogError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        CatalogError::NotFound(message.into())
    }

    pub fn upstream(detail: impl Into<String>) -> Self {
        CatalogError::Upstream {
            detail: detail.into(),
        }
    }

    /// Message that is safe to show to the end user.
    pub fn public_message(&self) -> &str {
        match self {
            CatalogError::Validation(message) | CatalogError::NotFound(message) => message,
            CatalogError::Upstream { .. } => UPSTREAM_MESSAGE,
        }
    }
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorMessage::new(self.public_message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_variant_to_its_status() {
        assert_eq!(
            CatalogError::validation("missing").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CatalogError::not_found("gone").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::upstream("timeout").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn upstream_detail_is_not_public() {
        let err = CatalogError::upstream("HTTP 503: {\"secret\":true}");
        assert_eq!(err.public_message(), UPSTREAM_MESSAGE);
        assert!(err.to_string().contains("503"));
    }
}
