//! Decision engine behind "use an item".
//!
//! `usable-core` defines the usable-item data model, the invocation core that
//! dispatches an item's configuration to skills and effects, and the charge
//! lifecycle that retires depleted items. Skills, effects and item naming are
//! supplied through the traits in [`env`]; the content crate ships data-driven
//! implementations.
pub mod command;
pub mod config;
#[cfg(feature = "serde")]
pub mod duration_secs;
pub mod env;
pub mod error;
pub mod invoke;
pub mod resolve;
pub mod state;

pub use command::{CommandReport, USE_ALIASES, UseCommand, is_use_verb};
pub use config::GameConfig;
pub use env::{
    Ability, EffectRegistry, Env, ItemDisplay, PlainDisplay, SkillArgs, SkillError, SkillRegistry,
};
pub use error::{ErrorSeverity, GameError};
pub use invoke::{
    AbilityFailure, ChargeLifecycleManager, DepletionResult, DispatchPlan, EffectFailure,
    InvocationCore, InvocationOutcome, RejectReason,
};
pub use state::{
    ActorState, EffectFlags, EffectId, EffectInstance, EffectList, Inventory, InventoryError,
    Item, ItemContainer, ItemId, ItemTemplate, ResourceMeter, SkillId, UsableConfig,
};
