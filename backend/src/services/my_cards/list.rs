use actix_web::{web, HttpResponse};

use crate::favorites::FavoritesStore;

/// `GET /my-cards`: every favorite in insertion order.
pub async fn process(store: web::Data<FavoritesStore>) -> HttpResponse {
    HttpResponse::Ok().json(store.list_all().await)
}
