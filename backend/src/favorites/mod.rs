pub mod store;

pub use store::FavoritesStore;
