use actix_web::{web, HttpResponse};
use common::requests::SearchQuery;

use crate::error::CatalogError;
use crate::lookup::{lookup_card, CardSearch};

/// Actix web handler for `GET /search-card?name=<text>`.
pub async fn process(
    source: web::Data<dyn CardSearch>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, CatalogError> {
    let summary = lookup_card(source.get_ref(), query.name.as_deref()).await?;
    Ok(HttpResponse::Ok().json(summary))
}
