pub mod my_cards;
pub mod search;
