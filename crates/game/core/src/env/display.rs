use crate::state::Item;

/// Formats items for actor-facing messages. Must be pure.
pub trait ItemDisplay: Send + Sync {
    fn display(&self, item: &Item) -> String;
}

/// Displays the item's authored name unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainDisplay;

impl ItemDisplay for PlainDisplay {
    fn display(&self, item: &Item) -> String {
        item.name.clone()
    }
}
