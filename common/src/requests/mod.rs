use serde::Deserialize;

/// Query string of `GET /search-card`.
/// `name` is optional here so that a missing parameter reaches the handler
/// and is reported as a validation failure instead of an extractor error.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
}
