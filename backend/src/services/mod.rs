//! HTTP surface of the card catalog.
//!
//! - `search`: `GET /search-card?name=`, backed by the lookup adapter.
//! - `my_cards`: CRUD on `/my-cards`, backed by the favorites store.
//!
//! Extractor failures (malformed JSON body, bad query string) are answered
//! with the same `{"message": ...}` body as every other error.

pub mod my_cards;
pub mod search;

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};
use common::responses::ErrorMessage;
use log::warn;

/// Largest accepted JSON body.
const JSON_LIMIT: usize = 64 * 1024;

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err: JsonPayloadError, req: &HttpRequest| {
            warn!("Rejected JSON body on {} {}: {}", req.method(), req.path(), err);
            let response =
                HttpResponse::BadRequest().json(ErrorMessage::new("Invalid JSON body."));
            InternalError::from_response(err, response).into()
        })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, req: &HttpRequest| {
        warn!("Rejected query string on {}: {}", req.path(), err);
        let response =
            HttpResponse::BadRequest().json(ErrorMessage::new("Invalid query string."));
        InternalError::from_response(err, response).into()
    })
}
