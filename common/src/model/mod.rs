pub mod card;
pub mod summary;
