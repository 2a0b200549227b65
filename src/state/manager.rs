use log::{debug, info};
use strsim::jaro_winkler;

use crate::comparator::MAX_ITEMS;
use crate::error::{ComPriceError, Result};
use crate::models::{Item, ItemId, ItemPatch};

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Manages the ordered list of items being compared.
///
/// Items are addressed by [`ItemId`], so edits land on the right item no
/// matter how the list is currently displayed.
pub struct ItemListManager {
    items: Vec<Item>,
}

impl ItemListManager {
    /// Create a new manager from a list of items.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// All items in their stored order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Get an item by id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Get a mutable reference to an item by id.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Stored position of an item.
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Whether another item can be added.
    pub fn has_room(&self) -> bool {
        self.items.len() < MAX_ITEMS
    }

    /// Append a new item built from the placeholder plus `patch`.
    pub fn add_item(&mut self, patch: &ItemPatch) -> Result<ItemId> {
        if !self.has_room() {
            return Err(ComPriceError::TooManyItems(MAX_ITEMS));
        }

        let mut item = Item::placeholder();
        // Random ids are 32-bit; re-roll on the rare collision
        while self.get(item.id).is_some() {
            item.id = ItemId::random();
        }
        patch.apply(&mut item);

        let id = item.id;
        info!("Added {}", item.debug_string());
        self.items.push(item);
        Ok(id)
    }

    /// Apply a partial update to one item.
    pub fn update(&mut self, id: ItemId, patch: &ItemPatch) -> Result<()> {
        let item = self
            .get_mut(id)
            .ok_or_else(|| ComPriceError::ItemNotFound(id.to_string()))?;

        patch.apply(item);
        debug!("Updated {}", item.debug_string());
        Ok(())
    }

    /// Remove one item, returning it.
    pub fn remove(&mut self, id: ItemId) -> Result<Item> {
        let position = self
            .position(id)
            .ok_or_else(|| ComPriceError::ItemNotFound(id.to_string()))?;

        let removed = self.items.remove(position);
        info!("Removed {}", removed.debug_string());
        Ok(removed)
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        info!("Cleared {} items", self.items.len());
        self.items.clear();
    }

    /// Items whose names resemble `query`, best match first.
    pub fn fuzzy_candidates(&self, query: &str) -> Vec<&Item> {
        let query = query.to_lowercase();

        let mut candidates: Vec<(&Item, f64)> = self
            .items
            .iter()
            .map(|item| (item, jaro_winkler(&item.key(), &query)))
            .filter(|(_, score)| *score > FUZZY_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.into_iter().map(|(item, _)| item).collect()
    }

    /// Resolve a user reference to an item id.
    ///
    /// Accepts, in order: an 8-digit hex id, a 1-based position (`3` or `#3`),
    /// an exact name (case-insensitive), or a single unambiguous fuzzy match.
    pub fn resolve(&self, reference: &str) -> Result<ItemId> {
        let reference = reference.trim();

        if let Ok(id) = reference.parse::<ItemId>() {
            if self.get(id).is_some() {
                return Ok(id);
            }
        }

        let digits = reference.strip_prefix('#').unwrap_or(reference);
        if let Ok(n) = digits.parse::<usize>() {
            if let Some(item) = n.checked_sub(1).and_then(|i| self.items.get(i)) {
                return Ok(item.id);
            }
        }

        let key = reference.to_lowercase();
        if let Some(item) = self.items.iter().find(|item| item.key() == key) {
            return Ok(item.id);
        }

        match self.fuzzy_candidates(reference).as_slice() {
            [only] => Ok(only.id),
            [] => Err(ComPriceError::ItemNotFound(reference.to_string())),
            many => Err(ComPriceError::InvalidInput(format!(
                "'{}' is ambiguous: {}",
                reference,
                many.iter()
                    .map(|item| item.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }

    /// Count of items in the manager.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if manager has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::{best_value_indices, sorted_by_value};
    use crate::models::Unit;

    fn sample_items() -> Vec<Item> {
        vec![
            Item::new("Whole milk", 1.2, 1.0, Unit::L),
            Item::new("Oat milk", 2.5, 1.0, Unit::L),
            Item::new("Milk carton", 0.2, 250.0, Unit::Ml),
        ]
    }

    #[test]
    fn test_add_item_defaults() {
        let mut manager = ItemListManager::new(Vec::new());
        let id = manager.add_item(&ItemPatch::default()).unwrap();

        let item = manager.get(id).unwrap();
        assert!(item.name.starts_with("Item "));
        assert_eq!(item.price, 0.0);
        assert_eq!(item.unit, Unit::Pcs);
    }

    #[test]
    fn test_add_item_capped() {
        let mut manager = ItemListManager::new(Vec::new());
        for _ in 0..MAX_ITEMS {
            manager.add_item(&ItemPatch::default()).unwrap();
        }
        assert!(!manager.has_room());
        assert!(matches!(
            manager.add_item(&ItemPatch::default()),
            Err(ComPriceError::TooManyItems(10))
        ));
        assert_eq!(manager.len(), MAX_ITEMS);
    }

    #[test]
    fn test_update_from_sorted_view_hits_right_item() {
        let mut manager = ItemListManager::new(sample_items());

        // Cheapest item in the sorted view is stored last
        let sorted = sorted_by_value(manager.items());
        let cheapest = sorted[0].id;
        assert_eq!(manager.position(cheapest), Some(2));

        let pricey = sorted[2].id;
        let patch = ItemPatch {
            price: Some(0.1),
            ..Default::default()
        };
        manager.update(pricey, &patch).unwrap();

        assert_eq!(manager.items()[1].name, "Oat milk");
        assert_eq!(manager.items()[1].price, 0.1);
        assert_eq!(best_value_indices(manager.items()).into_iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut manager = ItemListManager::new(sample_items());
        let id = manager.items()[1].id;

        let removed = manager.remove(id).unwrap();
        assert_eq!(removed.name, "Oat milk");
        assert_eq!(manager.len(), 2);
        assert!(manager.remove(id).is_err());

        manager.clear();
        assert!(manager.is_empty());
    }

    #[test]
    fn test_resolve_references() {
        let manager = ItemListManager::new(sample_items());
        let first = manager.items()[0].id;
        let third = manager.items()[2].id;

        assert_eq!(manager.resolve(&first.to_string()).unwrap(), first);
        assert_eq!(manager.resolve("3").unwrap(), third);
        assert_eq!(manager.resolve("#1").unwrap(), first);
        assert_eq!(manager.resolve("WHOLE MILK").unwrap(), first);
        assert_eq!(manager.resolve("whole mlk").unwrap(), first);
        assert!(manager.resolve("zzz").is_err());
        assert!(manager.resolve("0").is_err());
    }
}
