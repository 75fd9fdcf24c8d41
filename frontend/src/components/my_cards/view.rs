//! View rendering for the favorites panel: the create/edit form followed by
//! the card grid.

use common::model::card::CardRecord;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{FormField, MyCardsComponent};
use crate::helpers::multiline;

pub fn view(component: &MyCardsComponent, ctx: &Context<MyCardsComponent>) -> Html {
    let link = ctx.link();

    html! {
        <section>
            <h2 class="h4">{"My collection"}</h2>
            { build_form(component, link) }
            { build_card_list(component, link) }
        </section>
    }
}

fn build_form(component: &MyCardsComponent, link: &Scope<MyCardsComponent>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Save
    });
    let title = match component.form.editing {
        Some(id) => format!("Edit card #{}", id),
        None => "New card".to_string(),
    };

    html! {
        <form id="card-form" class="card bg-dark border-secondary p-3 mb-4" {onsubmit}>
            <h3 class="h5">{ title }</h3>
            { text_input(component, link, FormField::Name, "Name", true) }
            { text_input(component, link, FormField::ManaCost, "Mana cost", true) }
            { text_input(component, link, FormField::TypeLine, "Type", true) }
            <div class="mb-2">
                <label class="form-label" for="card-description">{"Description"}</label>
                <textarea
                    id="card-description"
                    class="form-control"
                    rows="3"
                    required=true
                    value={component.form.description.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                        Msg::UpdateField(FormField::Description, value)
                    })}
                />
            </div>
            { text_input(component, link, FormField::PowerToughness, "Power/Toughness", false) }
            <div class="text-end">
                <button class="btn btn-secondary me-2" type="button" onclick={link.callback(|_| Msg::ClearForm)}>
                    {"Clear"}
                </button>
                <button class="btn btn-success" type="submit" disabled={component.saving}>
                    <i class="bi bi-save"></i>{" Save"}
                </button>
            </div>
        </form>
    }
}

fn text_input(
    component: &MyCardsComponent,
    link: &Scope<MyCardsComponent>,
    field: FormField,
    label: &'static str,
    required: bool,
) -> Html {
    let id = format!("card-{}", label.to_lowercase().replace([' ', '/'], "-"));
    html! {
        <div class="mb-2">
            <label class="form-label" for={id.clone()}>{ label }</label>
            <input
                id={id}
                class="form-control"
                type="text"
                {required}
                value={component.form.field(field).to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::UpdateField(field, value)
                })}
            />
        </div>
    }
}

fn build_card_list(component: &MyCardsComponent, link: &Scope<MyCardsComponent>) -> Html {
    if let Some(message) = &component.load_error {
        return html! { <p class="text-danger">{ message.clone() }</p> };
    }
    if component.loading && component.cards.is_empty() {
        return html! { <p class="text-info">{"Loading saved cards..."}</p> };
    }
    if component.cards.is_empty() {
        return html! { <p class="text-secondary">{"No cards in your collection yet."}</p> };
    }

    html! {
        <div class="row row-cols-1 row-cols-md-3 g-3">
            { for component.cards.iter().map(|card| build_card(card, link)) }
        </div>
    }
}

fn build_card(card: &CardRecord, link: &Scope<MyCardsComponent>) -> Html {
    let id = card.id;
    html! {
        <div class="col" key={id.to_string()}>
            <div class="card h-100 bg-dark text-light border-secondary">
                <div class="card-body">
                    <h5 class="card-title text-primary">{ card.name.clone() }</h5>
                    <p class="card-text small mb-1"><strong>{"Cost: "}</strong>{ card.mana_cost.clone() }</p>
                    <p class="card-text small mb-1"><strong>{"Type: "}</strong>{ card.type_line.clone() }</p>
                    <p class="card-text small mb-1"><strong>{"Description: "}</strong>{ multiline(&card.description) }</p>
                    <p class="card-text small">
                        <strong>{"P/T: "}</strong>
                        { card.power_toughness.clone().unwrap_or_else(|| "N/A".to_string()) }
                    </p>
                </div>
                <div class="card-footer bg-transparent border-top-0 text-end">
                    <button class="btn btn-sm btn-success me-2" onclick={link.callback(move |_| Msg::Edit(id))}>
                        <i class="bi bi-pencil-fill"></i>{" Edit"}
                    </button>
                    <button class="btn btn-sm btn-danger" onclick={link.callback(move |_| Msg::Delete(id))}>
                        <i class="bi bi-trash-fill"></i>{" Delete"}
                    </button>
                </div>
            </div>
        </div>
    }
}
