//! Pure translation of a usable configuration into dispatch steps.

use serde_json::{Map, Value};

use crate::env::SkillArgs;
use crate::invoke::RejectReason;
use crate::state::{EffectId, SkillId, UsableConfig};

#[derive(Clone, Debug, PartialEq)]
pub struct SkillStep {
    pub skill: SkillId,
    pub args: SkillArgs,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectStep {
    pub effect: EffectId,
    /// Item-supplied overrides, merged over the defaults by the effect adapter.
    pub config: Option<Map<String, Value>>,
    pub state: Value,
}

/// What a single `use` will do, decided before anything is mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct DispatchPlan {
    pub skill: Option<SkillStep>,
    pub effect: Option<EffectStep>,
    /// Charges are tracked, so a completed dispatch spends one.
    pub spends_charge: bool,
}

impl DispatchPlan {
    /// Builds the plan, or the rejection when the item has no charges left.
    pub fn from_config(config: &UsableConfig, item_name: &str) -> Result<Self, RejectReason> {
        if config.is_depleted() {
            return Err(RejectReason::Depleted {
                item_name: item_name.to_string(),
            });
        }

        let skill = config.ability.as_ref().map(|skill| SkillStep {
            skill: skill.clone(),
            args: SkillArgs::new(config.ability_options.clone(), config.cooldown_override),
        });

        let effect = config.effect.as_ref().map(|effect| EffectStep {
            effect: effect.clone(),
            config: config.effect_config.clone(),
            state: config
                .effect_state
                .clone()
                .unwrap_or_else(|| Value::Object(Map::new())),
        });

        Ok(Self {
            skill,
            effect,
            spends_charge: config.charges.is_some(),
        })
    }

    /// True when the plan neither invokes a skill nor attaches an effect.
    pub fn is_empty(&self) -> bool {
        self.skill.is_none() && self.effect.is_none()
    }
}
