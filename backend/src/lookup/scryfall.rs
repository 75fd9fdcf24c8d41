//! Scryfall implementation of `CardSearch`.
//!
//! Sends `GET {base}/cards/search?q=<query>` once per lookup and interprets the
//! reply:
//! - `2xx` with a `data` list: the matches, in Scryfall's order;
//! - `404`: Scryfall's "no cards found" signal, reported as an empty list;
//! - anything else, a transport error, or an unreadable body:
//!   `CatalogError::Upstream` with the details Scryfall gave (for logs only).

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::{CardSearch, ExternalCard};
use crate::error::CatalogError;

/// Scryfall asks every client to identify itself.
const USER_AGENT: &str = concat!("card-catalog/", env!("CARGO_PKG_VERSION"));

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<ExternalCard>,
}

/// Error object returned by Scryfall on non-2xx replies.
#[derive(Deserialize)]
struct ScryfallError {
    #[serde(default)]
    details: Option<String>,
}

pub struct ScryfallClient {
    client: Client,
    base_url: String,
}

impl ScryfallClient {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(ScryfallClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn search_url(&self) -> String {
        format!("{}/cards/search", self.base_url)
    }
}

#[async_trait]
impl CardSearch for ScryfallClient {
    async fn search(&self, query: &str) -> Result<Vec<ExternalCard>, CatalogError> {
        let url = self.search_url();
        debug!("[scryfall] GET {} q={:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| CatalogError::upstream(format!("request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::upstream(format!("failed to read response body: {}", e)))?;

        debug!("[scryfall] response status {}", status);
        interpret_response(status, &body)
    }
}

/// Maps a Scryfall search reply to matches or a failure.
fn interpret_response(status: StatusCode, body: &str) -> Result<Vec<ExternalCard>, CatalogError> {
    if status == StatusCode::NOT_FOUND {
        return Ok(Vec::new());
    }

    if !status.is_success() {
        let details = serde_json::from_str::<ScryfallError>(body)
            .ok()
            .and_then(|err| err.details)
            .unwrap_or_else(|| truncate(body).to_string());
        return Err(CatalogError::upstream(format!("HTTP {}: {}", status.as_u16(), details)));
    }

    serde_json::from_str::<SearchResponse>(body)
        .map(|response| response.data)
        .map_err(|e| CatalogError::upstream(format!("invalid search response: {}", e)))
}

fn truncate(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
