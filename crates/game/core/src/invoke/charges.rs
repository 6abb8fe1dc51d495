//! Charge bookkeeping and depletion.
//!
//! [`ChargeLifecycleManager`] is the only code that writes `charges` or
//! removes an item because it ran out.

use crate::state::{ItemContainer, ItemId};

/// Result of spending one charge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DepletionResult {
    /// Charges left after the decrement (`None` if the item tracks none).
    pub remaining: Option<u32>,
    pub item_destroyed: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ChargeLifecycleManager;

impl ChargeLifecycleManager {
    /// Spends exactly one charge of `item` and removes it from `owner` when it
    /// is depleted and configured to be destroyed.
    pub fn consume(&self, item: ItemId, owner: &mut dyn ItemContainer) -> DepletionResult {
        let Some(config) = owner
            .item_mut(item)
            .and_then(|held| held.usable.as_mut())
        else {
            return DepletionResult::default();
        };

        let Some(charges) = config.charges.as_mut() else {
            return DepletionResult::default();
        };

        *charges = charges.saturating_sub(1);
        let remaining = *charges;
        let destroy = remaining == 0 && config.destroy_on_depleted;

        tracing::debug!(item = %item, remaining, "Charge consumed");

        if destroy {
            owner.remove(item);
            tracing::debug!(item = %item, "Depleted item removed from owner");
        }

        DepletionResult {
            remaining: Some(remaining),
            item_destroyed: destroy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Inventory, ItemTemplate, UsableConfig};

    fn wand(usable: UsableConfig) -> (Inventory, ItemId) {
        let mut inventory = Inventory::new(4);
        let id = inventory
            .add(&ItemTemplate::new("limbo:wand", "a wand").with_usable(usable))
            .unwrap();
        (inventory, id)
    }

    #[test]
    fn decrements_by_one() {
        let (mut inventory, id) = wand(UsableConfig::ability("zap").with_charges(3));

        let result = ChargeLifecycleManager.consume(id, &mut inventory);

        assert_eq!(result.remaining, Some(2));
        assert!(!result.item_destroyed);
        assert_eq!(
            inventory.item(id).unwrap().usable.as_ref().unwrap().charges,
            Some(2)
        );
    }

    #[test]
    fn last_charge_destroys_when_configured() {
        let (mut inventory, id) = wand(
            UsableConfig::ability("zap")
                .with_charges(1)
                .destroy_on_depleted(),
        );

        let result = ChargeLifecycleManager.consume(id, &mut inventory);

        assert!(result.item_destroyed);
        assert!(inventory.item(id).is_none());
    }

    #[test]
    fn last_charge_keeps_item_without_destroy_flag() {
        let (mut inventory, id) = wand(UsableConfig::ability("zap").with_charges(1));

        let result = ChargeLifecycleManager.consume(id, &mut inventory);

        assert_eq!(result.remaining, Some(0));
        assert!(!result.item_destroyed);
        assert!(inventory.item(id).is_some());
    }

    #[test]
    fn unlimited_items_are_untouched() {
        let (mut inventory, id) = wand(UsableConfig::ability("zap").destroy_on_depleted());

        let result = ChargeLifecycleManager.consume(id, &mut inventory);

        assert_eq!(result, DepletionResult::default());
        assert!(inventory.item(id).is_some());
    }
}
