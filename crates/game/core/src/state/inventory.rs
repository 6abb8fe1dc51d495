//! Item containers.
//!
//! [`ItemContainer`] is the narrow surface the invocation engine needs from
//! whatever owns an item; [`Inventory`] is the bounded actor inventory.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Item, ItemId, ItemTemplate};

/// Owner of item instances.
pub trait ItemContainer {
    fn item(&self, id: ItemId) -> Option<&Item>;

    fn item_mut(&mut self, id: ItemId) -> Option<&mut Item>;

    /// Removes an item unconditionally, returning it if it was present.
    fn remove(&mut self, id: ItemId) -> Option<Item>;
}

/// Errors raised when adding items to an inventory.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("inventory is full ({capacity} items)")]
    Full { capacity: usize },

    #[error("item {0} is already in this inventory")]
    DuplicateItem(ItemId),

    #[error("no item ids left to allocate")]
    IdsExhausted,
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Full { .. } => ErrorSeverity::Validation,
            Self::DuplicateItem(_) | Self::IdsExhausted => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Full { .. } => "INVENTORY_FULL",
            Self::DuplicateItem(_) => "INVENTORY_DUPLICATE_ITEM",
            Self::IdsExhausted => "INVENTORY_IDS_EXHAUSTED",
        }
    }
}

/// Ordered, capacity-bounded item storage for a single actor.
#[derive(Clone, Debug, PartialEq)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
    next_id: u32,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
            next_id: 1,
        }
    }

    /// Instantiates `template` into this inventory and returns the new item's id.
    pub fn add(&mut self, template: &ItemTemplate) -> Result<ItemId, InventoryError> {
        self.ensure_space()?;
        let next_id = self
            .next_id
            .checked_add(1)
            .ok_or(InventoryError::IdsExhausted)?;
        let id = ItemId(self.next_id);
        self.next_id = next_id;
        self.items.push(template.instantiate(id));
        Ok(id)
    }

    /// Inserts an existing instance, keeping its id.
    pub fn insert(&mut self, item: Item) -> Result<(), InventoryError> {
        if self.items.iter().any(|held| held.id == item.id) {
            return Err(InventoryError::DuplicateItem(item.id));
        }
        self.ensure_space()?;
        self.next_id = self.next_id.max(item.id.0.saturating_add(1));
        self.items.push(item);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Resolves player input such as `potion` or `2.potion` to an item id.
    pub fn resolve(&self, input: &str) -> Option<ItemId> {
        crate::resolve::resolve(input, self.items.iter())
    }

    fn ensure_space(&self) -> Result<(), InventoryError> {
        if self.is_full() {
            Err(InventoryError::Full {
                capacity: self.capacity,
            })
        } else {
            Ok(())
        }
    }
}

impl ItemContainer for Inventory {
    fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn potion() -> ItemTemplate {
        ItemTemplate::new("limbo:potion", "a red potion").with_keywords(["potion", "red"])
    }

    #[test]
    fn add_allocates_distinct_ids() {
        let mut inventory = Inventory::new(4);
        let first = inventory.add(&potion()).unwrap();
        let second = inventory.add(&potion()).unwrap();

        assert_ne!(first, second);
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn add_rejects_when_full() {
        let mut inventory = Inventory::new(1);
        inventory.add(&potion()).unwrap();

        assert_eq!(
            inventory.add(&potion()),
            Err(InventoryError::Full { capacity: 1 })
        );
    }

    #[test]
    fn insert_rejects_duplicate_ids_and_advances_allocator() {
        let mut inventory = Inventory::new(4);
        let item = potion().instantiate(ItemId(7));
        inventory.insert(item.clone()).unwrap();

        assert_eq!(
            inventory.insert(item),
            Err(InventoryError::DuplicateItem(ItemId(7)))
        );
        assert_eq!(inventory.add(&potion()).unwrap(), ItemId(8));
    }

    #[test]
    fn add_fails_once_ids_run_out() {
        let mut inventory = Inventory::new(4);
        inventory
            .insert(potion().instantiate(ItemId(u32::MAX - 1)))
            .unwrap();

        assert_eq!(inventory.add(&potion()), Err(InventoryError::IdsExhausted));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn remove_is_safe_to_repeat() {
        let mut inventory = Inventory::new(4);
        let id = inventory.add(&potion()).unwrap();

        assert!(inventory.remove(id).is_some());
        assert!(inventory.remove(id).is_none());
        assert!(inventory.is_empty());
    }
}
