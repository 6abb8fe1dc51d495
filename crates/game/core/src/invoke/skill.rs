//! Skill dispatch: lookup, per-use configuration, execution, classification.

use core::time::Duration;

use crate::env::{SkillArgs, SkillError, SkillRegistry};
use crate::error::GameError;
use crate::invoke::AbilityFailure;
use crate::state::{ActorState, SkillId};

/// Invokes skills on behalf of items and classifies their failures.
#[derive(Clone, Copy)]
pub struct SkillInvocationAdapter<'a> {
    registry: &'a dyn SkillRegistry,
}

impl<'a> SkillInvocationAdapter<'a> {
    pub fn new(registry: &'a dyn SkillRegistry) -> Self {
        Self { registry }
    }

    /// Runs `skill` against `actor`.
    ///
    /// `item_ref` identifies the item in logs when its configuration is broken.
    pub fn invoke(
        &self,
        skill: &SkillId,
        args: &SkillArgs,
        actor: &mut ActorState,
        now: Duration,
        item_ref: &str,
    ) -> Result<(), AbilityFailure> {
        let Some(ability) = self.registry.get(skill) else {
            tracing::error!(
                item = item_ref,
                skill = %skill,
                "Item has invalid usable configuration: unknown skill"
            );
            return Err(AbilityFailure::Misconfigured);
        };

        tracing::debug!(skill = %skill, actor = actor.name(), ?args, "Invoking skill");

        ability
            .execute(args, actor, now)
            .map_err(|error| classify(error, ability.name()))
    }
}

fn classify(error: SkillError, skill_name: &str) -> AbilityFailure {
    let code = error.error_code();
    match error {
        SkillError::Cooldown { remaining } => AbilityFailure::CooldownActive {
            skill_name: skill_name.to_string(),
            remaining,
        },
        SkillError::Passive => AbilityFailure::Passive,
        SkillError::NotEnoughResources => AbilityFailure::InsufficientResources,
        SkillError::Failed(detail) => {
            tracing::error!(
                skill = skill_name,
                code,
                "Skill failed unexpectedly: {}",
                detail
            );
            AbilityFailure::Unexpected(detail)
        }
    }
}
