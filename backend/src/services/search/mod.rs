//! # Card Search Service
//!
//! Exposes the lookup adapter as `GET /search-card?name=<text>`.
//!
//! - `200 OK` with a `CardSummary` for the first match.
//! - `400 Bad Request` when `name` is missing or empty.
//! - `404 Not Found` when the external database has no match.
//! - `500 Internal Server Error` when the external database fails; the
//!   upstream details are logged, not returned.

mod card;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/search-card";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(card::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UPSTREAM_MESSAGE;
    use crate::lookup::tests::{bolt, FakeSearch};
    use crate::lookup::{CardSearch, MISSING_QUERY_MESSAGE, NO_MATCH_MESSAGE};
    use crate::services::query_config;
    use crate::error::CatalogError;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::summary::CardSummary;
    use common::responses::ErrorMessage;
    use std::sync::Arc;

    async fn search(
        source: Arc<FakeSearch>,
        uri: &str,
    ) -> actix_web::dev::ServiceResponse {
        let source: Arc<dyn CardSearch> = source;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(source))
                .app_data(query_config())
                .service(configure_routes()),
        )
        .await;
        test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await
    }

    #[actix_web::test]
    async fn returns_first_match_as_summary() {
        let source = Arc::new(FakeSearch::returning(Ok(vec![bolt()])));
        let resp = search(source.clone(), "/search-card?name=Lightning%20Bolt").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let summary: CardSummary = test::read_body_json(resp).await;
        assert_eq!(summary.name, "Lightning Bolt");
        assert_eq!(summary.mana_cost.as_deref(), Some("{R}"));
        assert_eq!(summary.power, None);
        assert_eq!(
            source.last_query.lock().unwrap().as_deref(),
            Some("Lightning Bolt")
        );
    }

    #[actix_web::test]
    async fn missing_name_is_bad_request_without_lookup() {
        let source = Arc::new(FakeSearch::returning(Ok(vec![bolt()])));
        for uri in ["/search-card", "/search-card?name="] {
            let resp = search(source.clone(), uri).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: ErrorMessage = test::read_body_json(resp).await;
            assert_eq!(body.message, MISSING_QUERY_MESSAGE);
        }
        assert_eq!(source.calls(), 0);
    }

    #[actix_web::test]
    async fn no_match_is_not_found() {
        let source = Arc::new(FakeSearch::returning(Ok(Vec::new())));
        let resp = search(source, "/search-card?name=Bolt").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorMessage = test::read_body_json(resp).await;
        assert_eq!(body.message, NO_MATCH_MESSAGE);
    }

    #[actix_web::test]
    async fn upstream_failure_hides_details() {
        let source = Arc::new(FakeSearch::returning(Err(CatalogError::upstream(
            "HTTP 503: internal upstream payload",
        ))));
        let resp = search(source, "/search-card?name=Bolt").await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorMessage = test::read_body_json(resp).await;
        assert_eq!(body.message, UPSTREAM_MESSAGE);
    }
}
