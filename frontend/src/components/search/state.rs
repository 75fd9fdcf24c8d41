use common::model::summary::CardSummary;

/// State of the search panel.
pub struct SearchComponent {
    /// Current content of the name input.
    pub query: String,
    /// A lookup is in flight.
    pub searching: bool,
    /// Last successful lookup, cleared when a new search starts.
    pub result: Option<CardSummary>,
    /// Inline error of the last lookup.
    pub error: Option<String>,
    /// The result is being copied into the favorites.
    pub saving: bool,
}

impl SearchComponent {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            searching: false,
            result: None,
            error: None,
            saving: false,
        }
    }
}
