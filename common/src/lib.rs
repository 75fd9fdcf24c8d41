//! Wire types shared by the card catalog backend and frontend.

pub mod model;
pub mod requests;
pub mod responses;
