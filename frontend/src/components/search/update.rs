//! Update function for the search panel.
//!
//! Lookups and saves run as local futures; their outcome comes back as
//! `SearchFinished` / `AddFinished`. A failed lookup is shown inline, a failed
//! save raises an alert.

use common::model::card::NewCard;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::{alert, show_toast};

use super::messages::Msg;
use super::state::SearchComponent;

pub fn update(component: &mut SearchComponent, ctx: &Context<SearchComponent>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateQuery(query) => {
            component.query = query;
            false
        }
        Msg::Search => {
            if component.searching {
                return false;
            }
            component.searching = true;
            component.result = None;
            component.error = None;

            let link = ctx.link().clone();
            let query = component.query.clone();
            spawn_local(async move {
                let outcome = api::search_card(&query).await;
                link.send_message(Msg::SearchFinished(outcome));
            });
            true
        }
        Msg::SearchFinished(outcome) => {
            component.searching = false;
            match outcome {
                Ok(card) => component.result = Some(card),
                Err(message) => {
                    error!("Card search failed:", message.clone());
                    component.error = Some(message);
                }
            }
            true
        }
        Msg::AddToFavorites => {
            let Some(card) = component.result.as_ref() else {
                return false;
            };
            if component.saving {
                return false;
            }
            component.saving = true;

            let link = ctx.link().clone();
            let new_card = NewCard::from(card);
            spawn_local(async move {
                let outcome = api::create_card(&new_card).await;
                link.send_message(Msg::AddFinished(outcome));
            });
            true
        }
        Msg::AddFinished(outcome) => {
            component.saving = false;
            match outcome {
                Ok(record) => {
                    show_toast(&format!("\"{}\" was saved to your collection!", record.name));
                    ctx.props().on_saved.emit(record);
                }
                Err(message) => {
                    error!("Adding card to favorites failed:", message.clone());
                    alert(&format!("Error: {}", message));
                }
            }
            true
        }
    }
}
