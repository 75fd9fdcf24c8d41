//! Update function for the favorites panel.
//!
//! Every backend call runs as a local future and reports back through a
//! `*Loaded`/`Saved`/`Deleted` message. Failed CRUD calls raise an alert; a
//! failed list load is rendered in place of the list.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::{alert, confirm, show_toast};

use super::messages::Msg;
use super::state::{CardForm, MyCardsComponent};

pub fn update(
    component: &mut MyCardsComponent,
    ctx: &Context<MyCardsComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Load => {
            component.loading = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(api::list_cards().await));
            });
            true
        }
        Msg::Loaded(outcome) => {
            component.loading = false;
            match outcome {
                Ok(cards) => {
                    component.cards = cards;
                    component.load_error = None;
                }
                Err(message) => {
                    error!("Loading favorites failed:", message.clone());
                    component.load_error = Some(message);
                }
            }
            true
        }
        Msg::UpdateField(field, value) => {
            component.form.set(field, value);
            true
        }
        Msg::Save => {
            if component.saving {
                return false;
            }
            let new_card = component.form.to_new_card();
            if !new_card.is_complete() {
                show_toast("Name, mana cost, type and description are required.");
                return false;
            }
            component.saving = true;

            let link = ctx.link().clone();
            let editing = component.form.editing;
            let patch = component.form.to_patch();
            spawn_local(async move {
                let outcome = match editing {
                    Some(id) => api::update_card(id, &patch).await,
                    None => api::create_card(&new_card).await,
                };
                link.send_message(Msg::Saved(outcome));
            });
            true
        }
        Msg::Saved(outcome) => {
            component.saving = false;
            match outcome {
                Ok(record) => {
                    if component.form.editing.is_some() {
                        show_toast(&format!("\"{}\" was updated.", record.name));
                    } else {
                        show_toast(&format!("\"{}\" was saved.", record.name));
                    }
                    component.form = CardForm::default();
                    ctx.link().send_message(Msg::Load);
                }
                Err(message) => {
                    error!("Saving card failed:", message.clone());
                    alert(&format!("Error: {}", message));
                }
            }
            true
        }
        Msg::Edit(id) => {
            // Fetch the latest version instead of trusting the rendered list.
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::EditLoaded(api::get_card(id).await));
            });
            false
        }
        Msg::EditLoaded(outcome) => match outcome {
            Ok(record) => {
                component.form = CardForm::from_record(&record);
                scroll_to_form();
                true
            }
            Err(message) => {
                error!("Loading card for edit failed:", message.clone());
                alert(&format!("Error: {}", message));
                false
            }
        },
        Msg::Delete(id) => {
            if !confirm(&format!("Are you sure you want to delete card #{}?", id)) {
                return false;
            }
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Deleted(api::delete_card(id).await));
            });
            false
        }
        Msg::Deleted(outcome) => {
            match outcome {
                Ok(()) => {
                    show_toast("Card deleted.");
                    ctx.link().send_message(Msg::Load);
                }
                Err(message) => {
                    error!("Deleting card failed:", message.clone());
                    alert(&format!("Error: {}", message));
                }
            }
            false
        }
        Msg::ClearForm => {
            component.form = CardForm::default();
            true
        }
    }
}

fn scroll_to_form() {
    if let Some(form) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("card-form"))
    {
        form.scroll_into_view();
    }
}
