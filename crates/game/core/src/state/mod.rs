//! State owned by actors and items.
//!
//! This module owns the data structures the invocation engine reads and
//! mutates: item templates and instances, usable configurations, inventories,
//! and the actor's resources, cooldowns and effects.
mod actor;
mod effects;
mod ids;
mod inventory;
mod item;
mod usable;

pub use actor::{ActorState, ResourceMeter};
pub use effects::{EffectConfigError, EffectFlags, EffectInstance, EffectList};
pub use ids::{EffectId, ItemId, SkillId};
pub use inventory::{Inventory, InventoryError, ItemContainer};
pub use item::{Item, ItemTemplate};
pub use usable::UsableConfig;
