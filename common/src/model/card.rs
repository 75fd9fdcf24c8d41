//! Favorite card records and the payloads used to create and edit them.
//!
//! All three types travel as camelCase JSON between the frontend and the
//! `/my-cards` endpoints of the backend.

use serde::{Deserialize, Deserializer, Serialize};

use crate::model::summary::CardSummary;

/// Placeholder stored when a looked-up card has no mana cost.
pub const MISSING_MANA_COST: &str = "N/A";

/// Placeholder stored when a looked-up card has no rules text.
pub const MISSING_DESCRIPTION: &str = "No description.";

/// A favorite card as held by the backend store.
///
/// `id` is assigned by the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub id: u64,
    pub name: String,
    pub mana_cost: String,
    pub type_line: String,
    pub description: String,
    pub power_toughness: Option<String>,
}

/// Payload of `POST /my-cards`.
///
/// Missing or `null` required fields deserialize to an empty string so that the
/// store reports them as a validation failure rather than a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mana_cost: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub type_line: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub power_toughness: Option<String>,
}

impl NewCard {
    /// Names of the required fields that are empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("manaCost", &self.mana_cost),
            ("typeLine", &self.type_line),
            ("description", &self.description),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl From<&CardSummary> for NewCard {
    /// Copies a looked-up card into a favorite payload.
    fn from(summary: &CardSummary) -> Self {
        NewCard {
            name: summary.name.clone(),
            mana_cost: summary
                .mana_cost
                .clone()
                .filter(|cost| !cost.is_empty())
                .unwrap_or_else(|| MISSING_MANA_COST.to_string()),
            type_line: summary.type_line.clone(),
            description: summary
                .description
                .clone()
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
            power_toughness: summary.power_toughness(),
        }
    }
}

/// Payload of `PUT /my-cards/{id}`.
///
/// Every field is optional. A field that is absent, `null` or an empty string
/// leaves the stored value as it is, so an update can never blank a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub power_toughness: Option<String>,
}

impl CardPatch {
    /// Applies the supplied fields to `record`, leaving its id untouched.
    pub fn apply_to(&self, record: &mut CardRecord) {
        replace_if_supplied(&mut record.name, &self.name);
        replace_if_supplied(&mut record.mana_cost, &self.mana_cost);
        replace_if_supplied(&mut record.type_line, &self.type_line);
        replace_if_supplied(&mut record.description, &self.description);
        if let Some(value) = supplied(&self.power_toughness) {
            record.power_toughness = Some(value.to_string());
        }
    }
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn replace_if_supplied(target: &mut String, value: &Option<String>) {
    if let Some(value) = supplied(value) {
        *target = value.to_string();
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
