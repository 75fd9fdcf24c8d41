use actix_web::{web, HttpResponse};
use common::model::card::NewCard;

use crate::error::CatalogError;
use crate::favorites::FavoritesStore;

/// `POST /my-cards`: `201 Created` with the stored record.
pub async fn process(
    store: web::Data<FavoritesStore>,
    payload: web::Json<NewCard>,
) -> Result<HttpResponse, CatalogError> {
    let record = store.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(record))
}
