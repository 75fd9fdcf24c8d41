use common::model::card::CardRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SearchProps {
    /// Fired with the stored record after a looked-up card is saved as a favorite.
    pub on_saved: Callback<CardRecord>,
}
