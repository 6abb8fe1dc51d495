//! Effect dispatch: configuration merge, construction, attachment.

use core::time::Duration;

use serde_json::{Map, Value};

use crate::env::EffectRegistry;
use crate::invoke::EffectFailure;
use crate::state::{ActorState, EffectId};

/// One effect attachment requested by an item.
#[derive(Clone, Debug)]
pub struct EffectRequest<'r> {
    pub effect: &'r EffectId,
    /// Item-supplied keys, layered over the defaults.
    pub overrides: Option<&'r Map<String, Value>>,
    pub state: Value,
    /// Display name of the item, the default effect `name`.
    pub item_name: &'r str,
    pub item_ref: &'r str,
}

/// Builds effects from item configuration and attaches them to actors.
#[derive(Clone, Copy)]
pub struct EffectApplicationAdapter<'a> {
    registry: &'a dyn EffectRegistry,
}

impl<'a> EffectApplicationAdapter<'a> {
    pub fn new(registry: &'a dyn EffectRegistry) -> Self {
        Self { registry }
    }

    pub fn apply(
        &self,
        request: EffectRequest<'_>,
        actor: &mut ActorState,
        now: Duration,
    ) -> Result<(), EffectFailure> {
        let config = merge_config(request.item_name, request.overrides);

        let Some(mut instance) = self
            .registry
            .create(request.effect, actor, config, request.state)
        else {
            tracing::error!(
                item = request.item_ref,
                effect = %request.effect,
                "Item has invalid usable configuration: effect could not be created"
            );
            return Err(EffectFailure::Misconfigured);
        };

        instance.activate(now);

        if !actor.add_effect(instance) {
            tracing::debug!(
                effect = %request.effect,
                actor = actor.name(),
                "Effect rejected by actor"
            );
            return Err(EffectFailure::Rejected);
        }

        tracing::debug!(effect = %request.effect, actor = actor.name(), "Effect attached");
        Ok(())
    }
}

/// Default configuration `{ name: item_name }` with item-supplied keys on top.
pub fn merge_config(item_name: &str, overrides: Option<&Map<String, Value>>) -> Map<String, Value> {
    let mut config = Map::new();
    config.insert("name".to_string(), Value::String(item_name.to_string()));
    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            config.insert(key.clone(), value.clone());
        }
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merge_injects_item_name() {
        let config = merge_config("a green vial", None);
        assert_eq!(Value::Object(config), json!({ "name": "a green vial" }));
    }

    #[test]
    fn merge_keeps_defaults_and_lets_item_keys_win() {
        let overrides = match json!({ "name": "Venom", "duration": 10 }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        let config = merge_config("a green vial", Some(&overrides));

        assert_eq!(
            Value::Object(config),
            json!({ "name": "Venom", "duration": 10 })
        );
    }
}
