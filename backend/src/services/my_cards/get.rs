use actix_web::{web, HttpResponse};

use super::parse_card_id;
use crate::error::CatalogError;
use crate::favorites::FavoritesStore;

/// `GET /my-cards/{id}`: the record, or `404 Not Found`.
pub async fn process(
    store: web::Data<FavoritesStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, CatalogError> {
    let id = parse_card_id(&id)?;
    let record = store.get_by_id(id).await?;
    Ok(HttpResponse::Ok().json(record))
}
