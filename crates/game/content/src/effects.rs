//! Data-driven effect templates.

use std::collections::HashMap;

use serde_json::{Map, Value};
use usable_core::{ActorState, EffectFlags, EffectId, EffectInstance, EffectRegistry};

/// Defaults for an effect; item configuration is layered on top.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectTemplate {
    pub id: EffectId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub config: Map<String, Value>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub state: Value,
}

impl EffectTemplate {
    pub fn new(id: impl Into<EffectId>) -> Self {
        Self {
            id: id.into(),
            config: Map::new(),
            state: Value::Null,
        }
    }

    pub fn with_config(mut self, config: Map<String, Value>) -> Self {
        self.config = config;
        self
    }

    pub fn with_state(mut self, state: Value) -> Self {
        self.state = state;
        self
    }
}

/// Overlays `overrides` on `base`. Objects merge key by key; anything else replaces.
fn merge_state(base: &Value, overrides: Value) -> Value {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            let mut merged = base.clone();
            merged.extend(overrides);
            Value::Object(merged)
        }
        (base, Value::Null) => base.clone(),
        (_, overrides) => overrides,
    }
}

#[derive(Clone, Debug, Default)]
pub struct EffectCatalog {
    templates: HashMap<EffectId, EffectTemplate>,
}

impl EffectCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_templates(templates: impl IntoIterator<Item = EffectTemplate>) -> Self {
        let mut catalog = Self::new();
        for template in templates {
            catalog.insert(template);
        }
        catalog
    }

    pub fn insert(&mut self, template: EffectTemplate) {
        if let Some(previous) = self.templates.insert(template.id.clone(), template) {
            tracing::warn!(effect = %previous.id, "Duplicate effect template replaced");
        }
    }

    pub fn contains(&self, id: &EffectId) -> bool {
        self.templates.contains_key(id)
    }

    pub fn template(&self, id: &EffectId) -> Option<&EffectTemplate> {
        self.templates.get(id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl EffectRegistry for EffectCatalog {
    fn create(
        &self,
        effect: &EffectId,
        actor: &ActorState,
        config: Map<String, Value>,
        state: Value,
    ) -> Option<EffectInstance> {
        let template = self.templates.get(effect)?;

        let mut merged = template.config.clone();
        merged.extend(config);

        let flags = match EffectFlags::from_config(&merged) {
            Ok(flags) => flags,
            Err(error) => {
                tracing::error!(
                    effect = %effect,
                    actor = actor.name(),
                    %error,
                    "Invalid effect configuration"
                );
                return None;
            }
        };

        let name = merged
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(effect.as_str())
            .to_string();
        let state = merge_state(&template.state, state);

        Some(EffectInstance::new(effect.clone(), name, flags, merged, state))
    }
}
