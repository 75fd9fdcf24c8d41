//! # Card Lookup
//!
//! Turns a free-text card name into at most one `CardSummary`.
//!
//! ## Workflow
//!
//! 1.  **Validation**: an empty (or whitespace-only) query is rejected with
//!     `CatalogError::Validation` before any external call is made.
//!
//! 2.  **Search**: the query is handed to a `CardSearch` source, which performs a
//!     single round trip to the external card database. No retries, no cache.
//!
//! 3.  **First-result policy**: the first match (the external service's own
//!     relevance order) is projected into a `CardSummary`. An empty match list
//!     is a negative result, `CatalogError::NotFound`, not a failure.
//!
//! The production source is `scryfall::ScryfallClient`; tests plug in fakes.

pub mod scryfall;

use std::collections::HashMap;

use async_trait::async_trait;
use common::model::summary::CardSummary;
use log::{debug, error};
use serde::Deserialize;

use crate::error::CatalogError;

pub const MISSING_QUERY_MESSAGE: &str = "The \"name\" parameter is required.";
pub const NO_MATCH_MESSAGE: &str = "No card found with that name.";

/// Image size picked from the external image map.
const IMAGE_SIZE: &str = "normal";

/// A card object as returned by the external text-search endpoint.
/// Only the fields the summary needs are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExternalCard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub toughness: Option<String>,
    #[serde(default)]
    pub image_uris: Option<HashMap<String, String>>,
}

impl From<ExternalCard> for CardSummary {
    fn from(card: ExternalCard) -> Self {
        let (power, toughness) = match (card.power, card.toughness) {
            (Some(power), Some(toughness)) => (Some(power), Some(toughness)),
            _ => (None, None),
        };

        CardSummary {
            external_id: card.id,
            name: card.name,
            mana_cost: card.mana_cost,
            type_line: card.type_line,
            description: card.oracle_text,
            power,
            toughness,
            image_url: card
                .image_uris
                .and_then(|mut uris| uris.remove(IMAGE_SIZE)),
        }
    }
}

/// A text-search endpoint of an external card database.
#[async_trait]
pub trait CardSearch: Send + Sync {
    /// Returns the matches for `query` in the source's relevance order.
    /// "No match" is reported as an empty list; any other failure as
    /// `CatalogError::Upstream`.
    async fn search(&self, query: &str) -> Result<Vec<ExternalCard>, CatalogError>;
}

/// Looks up a single card by name.
pub async fn lookup_card(
    source: &dyn CardSearch,
    query: Option<&str>,
) -> Result<CardSummary, CatalogError> {
    let query = query.map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err(CatalogError::validation(MISSING_QUERY_MESSAGE));
    }

    let matches = source.search(query).await.map_err(|err| {
        if let CatalogError::Upstream { detail } = &err {
            error!("Card lookup for {:?} failed: {}", query, detail);
        }
        err
    })?;

    debug!("Card lookup for {:?} returned {} match(es)", query, matches.len());

    matches
        .into_iter()
        .next()
        .map(CardSummary::from)
        .ok_or_else(|| CatalogError::not_found(NO_MATCH_MESSAGE))
}
