//! Thin client for the backend HTTP surface.
//!
//! Every call returns `Err(String)` with a message fit for the user: the
//! backend's own `message` when the response carries one, a fixed fallback
//! otherwise. The frontend is served by the backend, so all paths are
//! same-origin.

use common::model::card::{CardPatch, CardRecord, NewCard};
use common::model::summary::CardSummary;
use common::responses::ErrorMessage;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const SEARCH_PATH: &str = "/search-card";
const MY_CARDS_PATH: &str = "/my-cards";

pub async fn search_card(name: &str) -> Result<CardSummary, String> {
    let response = Request::get(SEARCH_PATH)
        .query([("name", name)])
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response, "Card not found.").await
}

pub async fn list_cards() -> Result<Vec<CardRecord>, String> {
    let response = Request::get(MY_CARDS_PATH)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response, "Could not load the cards.").await
}

pub async fn get_card(id: u64) -> Result<CardRecord, String> {
    let response = Request::get(&card_url(id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response, "Could not find the card to edit.").await
}

pub async fn create_card(card: &NewCard) -> Result<CardRecord, String> {
    let response = Request::post(MY_CARDS_PATH)
        .json(card)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response, "Failed to create the card.").await
}

pub async fn update_card(id: u64, patch: &CardPatch) -> Result<CardRecord, String> {
    let response = Request::put(&card_url(id))
        .json(patch)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response, "Failed to update the card.").await
}

pub async fn delete_card(id: u64) -> Result<(), String> {
    let response = Request::delete(&card_url(id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.ok() {
        Ok(())
    } else {
        Err(error_message(response, "Failed to delete the card.").await)
    }
}

fn card_url(id: u64) -> String {
    format!("{}/{}", MY_CARDS_PATH, id)
}

async fn read_json<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, String> {
    if !response.ok() {
        return Err(error_message(response, fallback).await);
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

async fn error_message(response: Response, fallback: &str) -> String {
    response
        .json::<ErrorMessage>()
        .await
        .map(|body| body.message)
        .unwrap_or_else(|_| fallback.to_string())
}
