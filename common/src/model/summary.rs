use serde::{Deserialize, Serialize};

/// A looked-up card as returned by `GET /search-card`.
///
/// This is a read-only projection of the external card database; it is never
/// stored by the backend. `power` and `toughness` are either both present or
/// both absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSummary {
    pub external_id: String,
    pub name: String,
    pub mana_cost: Option<String>,
    pub type_line: String,
    pub description: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub image_url: Option<String>,
}

impl CardSummary {
    /// `"power/toughness"` when the card has both, `None` otherwise.
    pub fn power_toughness(&self) -> Option<String> {
        match (&self.power, &self.toughness) {
            (Some(power), Some(toughness)) => Some(format!("{}/{}", power, toughness)),
            _ => None,
        }
    }
}
