use common::model::card::CardRecord;

use super::state::FormField;

pub enum Msg {
    Load,
    Loaded(Result<Vec<CardRecord>, String>),
    UpdateField(FormField, String),
    Save,
    Saved(Result<CardRecord, String>),
    Edit(u64),
    EditLoaded(Result<CardRecord, String>),
    Delete(u64),
    Deleted(Result<(), String>),
    ClearForm,
}
