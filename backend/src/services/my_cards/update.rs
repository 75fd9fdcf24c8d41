use actix_web::{web, HttpResponse};
use common::model::card::CardPatch;

use super::parse_card_id;
use crate::error::CatalogError;
use crate::favorites::FavoritesStore;

/// `PUT /my-cards/{id}`: applies the non-empty fields of the body and returns
/// the updated record.
pub async fn process(
    store: web::Data<FavoritesStore>,
    id: web::Path<String>,
    payload: web::Json<CardPatch>,
) -> Result<HttpResponse, CatalogError> {
    let id = parse_card_id(&id)?;
    let record = store.update(id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(record))
}
