//! State of the favorites panel and of its create/edit form.

use common::model::card::{CardPatch, CardRecord, NewCard};

/// One editable input of the card form.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    ManaCost,
    TypeLine,
    Description,
    PowerToughness,
}

/// Content of the create/edit form.
///
/// `editing` holds the id of the card being edited; `None` means the next save
/// creates a new card.
#[derive(Clone, Default, PartialEq)]
pub struct CardForm {
    pub editing: Option<u64>,
    pub name: String,
    pub mana_cost: String,
    pub type_line: String,
    pub description: String,
    pub power_toughness: String,
}

impl CardForm {
    pub fn from_record(record: &CardRecord) -> Self {
        CardForm {
            editing: Some(record.id),
            name: record.name.clone(),
            mana_cost: record.mana_cost.clone(),
            type_line: record.type_line.clone(),
            description: record.description.clone(),
            power_toughness: record.power_toughness.clone().unwrap_or_default(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::ManaCost => &self.mana_cost,
            FormField::TypeLine => &self.type_line,
            FormField::Description => &self.description,
            FormField::PowerToughness => &self.power_toughness,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::ManaCost => self.mana_cost = value,
            FormField::TypeLine => self.type_line = value,
            FormField::Description => self.description = value,
            FormField::PowerToughness => self.power_toughness = value,
        }
    }

    fn optional_power_toughness(&self) -> Option<String> {
        Some(self.power_toughness.clone()).filter(|pt| !pt.is_empty())
    }

    pub fn to_new_card(&self) -> NewCard {
        NewCard {
            name: self.name.clone(),
            mana_cost: self.mana_cost.clone(),
            type_line: self.type_line.clone(),
            description: self.description.clone(),
            power_toughness: self.optional_power_toughness(),
        }
    }

    /// The whole form as an update. Empty inputs are ignored by the backend,
    /// so clearing an input keeps the stored value.
    pub fn to_patch(&self) -> CardPatch {
        CardPatch {
            name: Some(self.name.clone()),
            mana_cost: Some(self.mana_cost.clone()),
            type_line: Some(self.type_line.clone()),
            description: Some(self.description.clone()),
            power_toughness: self.optional_power_toughness(),
        }
    }
}

pub struct MyCardsComponent {
    pub cards: Vec<CardRecord>,
    /// A list request is in flight.
    pub loading: bool,
    /// Error of the last list request, shown in place of the list.
    pub load_error: Option<String>,
    pub form: CardForm,
    /// A create or update request is in flight.
    pub saving: bool,
}

impl MyCardsComponent {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            loading: false,
            load_error: None,
            form: CardForm::default(),
            saving: false,
        }
    }
}
