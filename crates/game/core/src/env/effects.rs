use serde_json::{Map, Value};

use crate::state::{ActorState, EffectId, EffectInstance};

/// Builds effect instances from configuration.
pub trait EffectRegistry: Send + Sync {
    /// Returns `None` when `effect` is unknown or its configuration is unusable.
    fn create(
        &self,
        effect: &EffectId,
        actor: &ActorState,
        config: Map<String, Value>,
        state: Value,
    ) -> Option<EffectInstance>;
}
