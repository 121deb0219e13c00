//! In-memory item collection.
//!
//! Items are kept in creation order. Every operation takes the lock once, so
//! each call is atomic on its own; nothing is ordered across requests.

use crate::models::{Item, ItemChanges};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Items {
    by_id: HashMap<String, Item>,
    order: Vec<String>,
}

/// Shared handle to the process-wide store. Clones point at the same data.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    inner: Arc<RwLock<Items>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the three demo items, ids "1", "2", "3".
    pub fn seeded() -> Self {
        let seed = [
            ("1", "Sample Item 1", "First demo item"),
            ("2", "Sample Item 2", "Second demo item"),
            ("3", "Sample Item 3", "Third demo item"),
        ];

        let mut items = Items::default();
        for (id, name, description) in seed {
            items.push(Item::with_id(id.to_string(), name, description));
        }

        Self {
            inner: Arc::new(RwLock::new(items)),
        }
    }

    /// Page of items in creation order plus the total store size.
    ///
    /// Bounds behave like `items[offset..offset + limit]` with negative
    /// values counted from the end; anything out of range yields an empty
    /// page rather than an error.
    pub async fn list(&self, offset: i64, limit: i64) -> (Vec<Item>, usize) {
        let items = self.inner.read().await;
        let total = items.order.len();
        let (start, end) = slice_bounds(total, offset, offset.saturating_add(limit));

        let page = items.order[start..end]
            .iter()
            .filter_map(|id| items.by_id.get(id).cloned())
            .collect();

        (page, total)
    }

    pub async fn get(&self, id: &str) -> Option<Item> {
        self.inner.read().await.by_id.get(id).cloned()
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.inner.read().await.by_id.contains_key(id)
    }

    /// Adds an item. Ids are expected to be fresh; a duplicate replaces the
    /// stored value in place.
    pub async fn insert(&self, item: Item) {
        self.inner.write().await.push(item);
    }

    /// Creates, stores and returns a new item with a random id.
    pub async fn create(&self, name: Value, description: Value) -> Item {
        let item = Item::new(name, description);
        self.insert(item.clone()).await;
        item
    }

    pub async fn update(&self, id: &str, changes: ItemChanges) -> Option<Item> {
        let mut items = self.inner.write().await;
        let item = items.by_id.get_mut(id)?;
        item.apply(changes);
        Some(item.clone())
    }

    pub async fn delete(&self, id: &str) -> bool {
        let mut items = self.inner.write().await;
        if items.by_id.remove(id).is_none() {
            return false;
        }
        items.order.retain(|existing| existing != id);
        true
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.order.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Items {
    fn push(&mut self, item: Item) {
        if !self.by_id.contains_key(&item.id) {
            self.order.push(item.id.clone());
        }
        self.by_id.insert(item.id.clone(), item);
    }
}

fn slice_bounds(len: usize, start: i64, stop: i64) -> (usize, usize) {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let clamp = |index: i64| -> usize {
        let resolved = if index < 0 {
            index.saturating_add(len_i).max(0)
        } else {
            index.min(len_i)
        };
        // resolved is within 0..=len
        resolved as usize
    };

    let (start, stop) = (clamp(start), clamp(stop));
    if stop <= start {
        (start, start)
    } else {
        (start, stop)
    }
}
