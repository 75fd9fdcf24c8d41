//! # Favorite Cards Service
//!
//! CRUD endpoints over the in-memory `FavoritesStore`, all under `/my-cards`.
//!
//! ## Registered Routes:
//!
//! *   **`POST /my-cards`** (`create::process`): validates the four required
//!     fields, stores the card under the next id. `201` with the record, or
//!     `400` when a required field is missing or empty.
//!
//! *   **`GET /my-cards`** (`list::process`): every favorite in insertion order.
//!
//! *   **`GET /my-cards/{id}`** (`get::process`): one record or `404`.
//!
//! *   **`PUT /my-cards/{id}`** (`update::process`): partial update. Fields that
//!     are absent, `null` or empty keep their stored value. `200` with the
//!     updated record or `404`.
//!
//! *   **`DELETE /my-cards/{id}`** (`delete::process`): `204` or `404`.
//!
//! An `{id}` that is not a number can never have been issued, so it is
//! answered with `404` like any other unknown id.

mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

use crate::error::CatalogError;
use crate::favorites::store::CARD_NOT_FOUND_MESSAGE;

const API_PATH: &str = "/my-cards";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("", get().to(list::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}

fn parse_card_id(raw: &str) -> Result<u64, CatalogError> {
    raw.parse()
        .map_err(|_| CatalogError::not_found(CARD_NOT_FOUND_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::store::REQUIRED_FIELDS_MESSAGE;
    use crate::favorites::FavoritesStore;
    use crate::services::json_config;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::card::CardRecord;
    use common::responses::ErrorMessage;
    use serde_json::json;

    macro_rules! app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($store))
                    .app_data(json_config())
                    .service(configure_routes()),
            )
            .await
        };
    }

    fn bolt() -> serde_json::Value {
        json!({
            "name": "Bolt",
            "manaCost": "{R}",
            "typeLine": "Instant",
            "description": "Deal 3 damage"
        })
    }

    #[actix_web::test]
    async fn crud_round_trip() {
        let app = app!(FavoritesStore::new());

        let req = test::TestRequest::post()
            .uri("/my-cards")
            .set_json(bolt())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: CardRecord = test::read_body_json(resp).await;
        assert_eq!(created.id, 1);
        assert_eq!(created.power_toughness, None);

        let req = test::TestRequest::post()
            .uri("/my-cards")
            .set_json(json!({
                "name": "Grizzly Bears",
                "manaCost": "{1}{G}",
                "typeLine": "Creature - Bear",
                "description": "Vanilla",
                "powerToughness": "2/2"
            }))
            .to_request();
        let bears: CardRecord = test::call_and_read_body_json(&app, req).await;
        assert_eq!(bears.id, 2);

        let req = test::TestRequest::put()
            .uri("/my-cards/1")
            .set_json(json!({ "manaCost": "{1}{R}", "name": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: CardRecord = test::read_body_json(resp).await;
        assert_eq!(updated.mana_cost, "{1}{R}");
        assert_eq!(updated.name, "Bolt");

        let req = test::TestRequest::get().uri("/my-cards/1").to_request();
        let fetched: CardRecord = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, updated);

        let req = test::TestRequest::delete().uri("/my-cards/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(test::read_body(resp).await.is_empty());

        let req = test::TestRequest::get().uri("/my-cards/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorMessage = test::read_body_json(resp).await;
        assert_eq!(body.message, CARD_NOT_FOUND_MESSAGE);

        let req = test::TestRequest::get().uri("/my-cards").to_request();
        let all: Vec<CardRecord> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all, vec![bears]);
    }

    #[actix_web::test]
    async fn create_with_missing_field_is_bad_request() {
        let store = FavoritesStore::new();
        let app = app!(store.clone());

        let mut card = bolt();
        card["description"] = json!("");
        let req = test::TestRequest::post()
            .uri("/my-cards")
            .set_json(card)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorMessage = test::read_body_json(resp).await;
        assert_eq!(body.message, REQUIRED_FIELDS_MESSAGE);

        let req = test::TestRequest::post()
            .uri("/my-cards")
            .set_json(json!({ "name": "Bolt" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        assert!(store.list_all().await.is_empty());
    }

    #[actix_web::test]
    async fn malformed_body_is_bad_request_with_message() {
        let app = app!(FavoritesStore::new());
        let req = test::TestRequest::post()
            .uri("/my-cards")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorMessage = test::read_body_json(resp).await;
        assert_eq!(body.message, "Invalid JSON body.");
    }

    #[actix_web::test]
    async fn unknown_and_non_numeric_ids_are_not_found() {
        let app = app!(FavoritesStore::new());

        for uri in ["/my-cards/7", "/my-cards/abc"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

            let req = test::TestRequest::put()
                .uri(uri)
                .set_json(json!({ "name": "X" }))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

            let req = test::TestRequest::delete().uri(uri).to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
        }
    }

    #[actix_web::test]
    async fn list_starts_empty() {
        let app = app!(FavoritesStore::new());
        let req = test::TestRequest::get().uri("/my-cards").to_request();
        let all: Vec<CardRecord> = test::call_and_read_body_json(&app, req).await;
        assert!(all.is_empty());
    }
}
