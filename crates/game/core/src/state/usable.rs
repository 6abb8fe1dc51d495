//! Declarative "use" configuration attached to items.

use core::time::Duration;

use serde_json::{Map, Value};

use super::{EffectId, SkillId};

/// Describes what happens when an actor uses the item carrying it.
///
/// Every field is optional; presence drives dispatch:
/// - `ability` routes to a skill invocation
/// - `effect` routes to an effect attachment
/// - `charges` enables the charge budget (absent = unlimited uses)
///
/// Only the charge lifecycle manager mutates this record, and only `charges`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct UsableConfig {
    /// Skill invoked on use.
    pub ability: Option<SkillId>,

    /// Options handed to the skill for this invocation, opaque to the engine.
    #[cfg_attr(feature = "serde", serde(rename = "options"))]
    pub ability_options: Option<Value>,

    /// Replaces the skill's default cooldown for invocations through this item.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "cooldown", with = "crate::duration_secs")
    )]
    pub cooldown_override: Option<Duration>,

    /// Effect attached to the actor on use.
    pub effect: Option<EffectId>,

    /// Effect parameters; `name` defaults to the item's display name.
    #[cfg_attr(feature = "serde", serde(rename = "config"))]
    pub effect_config: Option<Map<String, Value>>,

    /// Initial internal state of the effect instance.
    #[cfg_attr(feature = "serde", serde(rename = "state"))]
    pub effect_state: Option<Value>,

    /// Remaining uses. `None` means unlimited.
    pub charges: Option<u32>,

    /// Remove the item from its owner once charges reach zero.
    pub destroy_on_depleted: bool,
}

impl UsableConfig {
    /// Configuration that invokes `ability` on use.
    pub fn ability(ability: impl Into<SkillId>) -> Self {
        Self {
            ability: Some(ability.into()),
            ..Self::default()
        }
    }

    /// Configuration that attaches `effect` on use.
    pub fn effect(effect: impl Into<EffectId>) -> Self {
        Self {
            effect: Some(effect.into()),
            ..Self::default()
        }
    }

    pub fn with_ability(mut self, ability: impl Into<SkillId>) -> Self {
        self.ability = Some(ability.into());
        self
    }

    pub fn with_options(mut self, options: Value) -> Self {
        self.ability_options = Some(options);
        self
    }

    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown_override = Some(cooldown);
        self
    }

    pub fn with_effect(mut self, effect: impl Into<EffectId>) -> Self {
        self.effect = Some(effect.into());
        self
    }

    pub fn with_effect_config(mut self, config: Map<String, Value>) -> Self {
        self.effect_config = Some(config);
        self
    }

    pub fn with_effect_state(mut self, state: Value) -> Self {
        self.effect_state = Some(state);
        self
    }

    pub fn with_charges(mut self, charges: u32) -> Self {
        self.charges = Some(charges);
        self
    }

    pub fn destroy_on_depleted(mut self) -> Self {
        self.destroy_on_depleted = true;
        self
    }

    /// True when charges are tracked and none remain.
    pub fn is_depleted(&self) -> bool {
        self.charges == Some(0)
    }

    /// True when the configuration neither invokes a skill nor attaches an effect.
    pub fn is_inert(&self) -> bool {
        self.ability.is_none() && self.effect.is_none()
    }
}
