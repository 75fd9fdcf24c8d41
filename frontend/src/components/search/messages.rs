use common::model::card::CardRecord;
use common::model::summary::CardSummary;

pub enum Msg {
    UpdateQuery(String),
    Search,
    SearchFinished(Result<CardSummary, String>),
    AddToFavorites,
    AddFinished(Result<CardRecord, String>),
}
