//! View rendering for the search panel: a name form, then either the inline
//! error, a progress note, or the looked-up card with its "add" button.

use common::model::card::MISSING_MANA_COST;
use common::model::summary::CardSummary;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::SearchComponent;
use crate::helpers::multiline;

pub fn view(component: &SearchComponent, ctx: &Context<SearchComponent>) -> Html {
    let link = ctx.link();

    html! {
        <section>
            <h2 class="h4">{"Search the card database"}</h2>
            { build_search_form(component, link) }
            {
                if let Some(message) = &component.error {
                    html! { <div class="alert alert-danger mt-3">{ format!("Error: {}", message) }</div> }
                } else if component.searching {
                    html! { <div class="alert alert-info mt-3">{"Searching..."}</div> }
                } else if let Some(card) = &component.result {
                    build_result(card, component.saving, link)
                } else {
                    html! {}
                }
            }
        </section>
    }
}

fn build_search_form(component: &SearchComponent, link: &Scope<SearchComponent>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Search
    });
    let oninput = link.callback(|e: InputEvent| {
        Msg::UpdateQuery(e.target_unchecked_into::<HtmlInputElement>().value())
    });

    html! {
        <form class="input-group" {onsubmit}>
            <input
                id="search-name"
                class="form-control"
                type="text"
                placeholder="Card name, e.g. Lightning Bolt"
                value={component.query.clone()}
                {oninput}
            />
            <button class="btn btn-primary" type="submit" disabled={component.searching}>
                <i class="bi bi-search"></i>{" Search"}
            </button>
        </form>
    }
}

fn build_result(card: &CardSummary, saving: bool, link: &Scope<SearchComponent>) -> Html {
    let image = match &card.image_url {
        Some(url) => html! {
            <img src={url.clone()} alt={card.name.clone()} class="img-fluid rounded shadow-sm" />
        },
        None => html! { <p>{"(No image)"}</p> },
    };

    html! {
        <div class="row mt-3">
            <div class="col-md-4">{ image }</div>
            <div class="col-md-8">
                <h3 class="text-primary">{ card.name.clone() }</h3>
                <p class="card-text">
                    <strong>{"Cost: "}</strong>
                    { card.mana_cost.clone().unwrap_or_else(|| MISSING_MANA_COST.to_string()) }
                </p>
                <p class="card-text"><strong>{"Type: "}</strong>{ card.type_line.clone() }</p>
                <p class="card-text">
                    <strong>{"Text: "}</strong>
                    {
                        match &card.description {
                            Some(text) => multiline(text),
                            None => html! { {"N/A"} },
                        }
                    }
                </p>
                {
                    if let Some(pt) = card.power_toughness() {
                        html! { <p class="card-text"><strong>{"P/T: "}</strong>{ pt }</p> }
                    } else {
                        html! {}
                    }
                }
                <button
                    class="btn btn-primary mt-3"
                    disabled={saving}
                    onclick={link.callback(|_| Msg::AddToFavorites)}
                >
                    <i class="bi bi-plus-circle-fill"></i>{" Add to collection"}
                </button>
            </div>
        </div>
    }
}
