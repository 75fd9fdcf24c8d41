use actix_web::{web, HttpResponse};

use super::parse_card_id;
use crate::error::CatalogError;
use crate::favorites::FavoritesStore;

/// `DELETE /my-cards/{id}`: `204 No Content` once removed.
pub async fn process(
    store: web::Data<FavoritesStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, CatalogError> {
    let id = parse_card_id(&id)?;
    store.delete_by_id(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
