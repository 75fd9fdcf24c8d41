//! In-memory store of favorite cards.
//!
//! The store owns the ordered list of `CardRecord`s together with the id
//! counter. Both live behind a single `RwLock`, so:
//! - every mutation (id assignment + insert, update, delete) is exclusive and
//!   can never interleave with another one;
//! - `list_all` and `get_by_id` may run concurrently with each other and always
//!   observe a complete state, never a half-applied mutation.
//!
//! `FavoritesStore` is cheap to clone; clones share the same state. It is
//! created in `main.rs` and injected into Actix as `web::Data`.

use std::sync::Arc;

use common::model::card::{CardPatch, CardRecord, NewCard};
use log::{debug, info};
use tokio::sync::RwLock;

use crate::error::CatalogError;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, mana cost, type and description are required.";
pub const CARD_NOT_FOUND_MESSAGE: &str = "Card not found in your list.";

#[derive(Clone, Default)]
pub struct FavoritesStore {
    inner: Arc<RwLock<Favorites>>,
}

struct Favorites {
    /// Records in insertion order.
    cards: Vec<CardRecord>,
    /// Next id to hand out. Only ever increases.
    next_id: u64,
}

impl Default for Favorites {
    fn default() -> Self {
        Favorites {
            cards: Vec::new(),
            next_id: 1,
        }
    }
}

impl Favorites {
    fn position(&self, id: u64) -> Result<usize, CatalogError> {
        self.cards
            .iter()
            .position(|card| card.id == id)
            .ok_or_else(|| CatalogError::not_found(CARD_NOT_FOUND_MESSAGE))
    }
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts with the demo favorite as id 1; the next id is 2.
    pub fn with_example() -> Self {
        let example = CardRecord {
            id: 1,
            name: "Jurubebinha".to_string(),
            mana_cost: "{G}{1}{U}".to_string(),
            type_line: "Legendary Creature - Restored Chaos".to_string(),
            description: "Jurubebinha enters the battlefield tapped. If she becomes untapped \
                          during the turn she was cast, she enters chaos mode and gets +3/+3."
                .to_string(),
            power_toughness: Some("10/5".to_string()),
        };

        FavoritesStore {
            inner: Arc::new(RwLock::new(Favorites {
                cards: vec![example],
                next_id: 2,
            })),
        }
    }

    /// Validates `card`, assigns it the next id and appends it.
    ///
    /// Fails with `Validation` when a required field is empty; the store (and
    /// the id counter) is left untouched in that case.
    pub async fn create(&self, card: NewCard) -> Result<CardRecord, CatalogError> {
        let missing = card.missing_fields();
        if !missing.is_empty() {
            debug!("Rejected favorite, missing fields: {}", missing.join(", "));
            return Err(CatalogError::validation(REQUIRED_FIELDS_MESSAGE));
        }

        let mut favorites = self.inner.write().await;
        let record = CardRecord {
            id: favorites.next_id,
            name: card.name,
            mana_cost: card.mana_cost,
            type_line: card.type_line,
            description: card.description,
            power_toughness: card.power_toughness.filter(|pt| !pt.is_empty()),
        };
        favorites.next_id += 1;
        favorites.cards.push(record.clone());

        info!("Favorite {} created ({})", record.id, record.name);
        Ok(record)
    }

    pub async fn list_all(&self) -> Vec<CardRecord> {
        self.inner.read().await.cards.clone()
    }

    pub async fn get_by_id(&self, id: u64) -> Result<CardRecord, CatalogError> {
        let favorites = self.inner.read().await;
        let index = favorites.position(id)?;
        Ok(favorites.cards[index].clone())
    }

    /// Replaces each field of the record that `patch` supplies with a
    /// non-empty value. See `CardPatch::apply_to`.
    pub async fn update(&self, id: u64, patch: CardPatch) -> Result<CardRecord, CatalogError> {
        let mut favorites = self.inner.write().await;
        let index = favorites.position(id)?;

        let record = &mut favorites.cards[index];
        patch.apply_to(record);

        info!("Favorite {} updated", id);
        Ok(record.clone())
    }

    /// Removes the record. Other records keep their ids and relative order.
    pub async fn delete_by_id(&self, id: u64) -> Result<(), CatalogError> {
        let mut favorites = self.inner.write().await;
        let index = favorites.position(id)?;
        favorites.cards.remove(index);

        info!("Favorite {} deleted", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_card(name: &str) -> NewCard {
        NewCard {
            name: name.to_string(),
            mana_cost: "{R}".to_string(),
            type_line: "Instant".to_string(),
            description: "Deal 3 damage".to_string(),
            power_toughness: None,
        }
    }

    #[tokio::test]
    async fn bolt_lifecycle() {
        let store = FavoritesStore::new();

        let bolt = store.create(new_card("Bolt")).await.unwrap();
        assert_eq!(bolt.id, 1);
        assert_eq!(bolt.name, "Bolt");

        let shock = store.create(new_card("Shock")).await.unwrap();
        assert_eq!(shock.id, 2);

        let updated = store
            .update(
                1,
                CardPatch {
                    mana_cost: Some("{1}{R}".to_string()),
                    ..CardPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.mana_cost, "{1}{R}");
        assert_eq!(updated.name, "Bolt");
        assert_eq!(updated.description, "Deal 3 damage");

        store.delete_by_id(1).await.unwrap();
        assert_eq!(
            store.get_by_id(1).await.unwrap_err(),
            CatalogError::not_found(CARD_NOT_FOUND_MESSAGE)
        );

        let remaining = store.list_all().await;
        assert_eq!(remaining, vec![shock]);
    }

    #[tokio::test]
    async fn invalid_create_does_not_touch_store_or_counter() {
        let store = FavoritesStore::new();
        store.create(new_card("Bolt")).await.unwrap();

        for blank in 0..4 {
            let mut card = new_card("Broken");
            match blank {
                0 => card.name.clear(),
                1 => card.mana_cost.clear(),
                2 => card.type_line.clear(),
                _ => card.description.clear(),
            }
            let err = store.create(card).await.unwrap_err();
            assert!(matches!(err, CatalogError::Validation(_)));
        }

        assert_eq!(store.list_all().await.len(), 1);
        assert_eq!(store.create(new_card("Shock")).await.unwrap().id, 2);
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        let store = FavoritesStore::new();
        let first = store.create(new_card("A")).await.unwrap();
        let second = store.create(new_card("B")).await.unwrap();
        store.delete_by_id(second.id).await.unwrap();
        store.delete_by_id(first.id).await.unwrap();

        let third = store.create(new_card("C")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn unknown_or_deleted_ids_are_not_found() {
        let store = FavoritesStore::new();
        let card = store.create(new_card("Bolt")).await.unwrap();
        store.delete_by_id(card.id).await.unwrap();

        for id in [card.id, 42] {
            assert!(matches!(
                store.get_by_id(id).await,
                Err(CatalogError::NotFound(_))
            ));
            assert!(matches!(
                store.update(id, CardPatch::default()).await,
                Err(CatalogError::NotFound(_))
            ));
            assert!(matches!(
                store.delete_by_id(id).await,
                Err(CatalogError::NotFound(_))
            ));
        }
    }

    #[tokio::test]
    async fn update_with_empty_fields_changes_nothing() {
        let store = FavoritesStore::new();
        let mut card = new_card("Bear");
        card.power_toughness = Some("2/2".to_string());
        let original = store.create(card).await.unwrap();

        let patch = CardPatch {
            name: Some(String::new()),
            mana_cost: None,
            type_line: Some(String::new()),
            description: None,
            power_toughness: Some(String::new()),
        };
        let updated = store.update(original.id, patch).await.unwrap();
        assert_eq!(updated, original);
    }

    #[tokio::test]
    async fn delete_keeps_order_and_ids_of_others() {
        let store = FavoritesStore::new();
        for name in ["A", "B", "C"] {
            store.create(new_card(name)).await.unwrap();
        }
        store.delete_by_id(2).await.unwrap();

        let ids: Vec<u64> = store.list_all().await.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn empty_power_toughness_is_stored_as_absent() {
        let store = FavoritesStore::new();
        let mut card = new_card("Bolt");
        card.power_toughness = Some(String::new());
        assert_eq!(store.create(card).await.unwrap().power_toughness, None);
    }

    #[tokio::test]
    async fn example_store_continues_after_demo_card() {
        let store = FavoritesStore::with_example();
        assert_eq!(store.get_by_id(1).await.unwrap().name, "Jurubebinha");
        assert_eq!(store.create(new_card("Bolt")).await.unwrap().id, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_distinct_ids() {
        let store = FavoritesStore::new();
        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(new_card(&format!("Card {i}"))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=50).collect::<Vec<u64>>());

        let listed: Vec<u64> = store.list_all().await.iter().map(|c| c.id).collect();
        assert_eq!(listed.len(), 50);
        assert!(listed.windows(2).all(|w| w[0] < w[1]));
    }
}
