//! Usable-item invocation.
//!
//! [`InvocationCore::invoke`] turns "actor uses item" into exactly one
//! [`InvocationOutcome`]:
//!
//! 1. reject items without a usable configuration, or with no charges left
//! 2. invoke the configured skill (failure ends the invocation)
//! 3. attach the configured effect (failure ends the invocation, the skill stays committed)
//! 4. spend a charge and retire the item if it is depleted
//!
//! The core is a reconciliation layer: every mutation goes through
//! [`SkillInvocationAdapter`], [`EffectApplicationAdapter`] or
//! [`ChargeLifecycleManager`], and no failure escapes as an error or panic.
mod charges;
mod effect;
mod outcome;
mod plan;
mod skill;

pub use charges::{ChargeLifecycleManager, DepletionResult};
pub use effect::{EffectApplicationAdapter, EffectRequest, merge_config};
pub use outcome::{
    AbilityFailure, CANNOT_USE, EffectFailure, InvocationOutcome, NOT_ENOUGH_RESOURCES,
    NOT_FOUND, NOTHING_HAPPENS, PASSIVE_SKILL, RejectReason, UNEXPECTED, humanize,
};
pub use plan::{DispatchPlan, EffectStep, SkillStep};
pub use skill::SkillInvocationAdapter;

use crate::env::Env;
use crate::state::{ActorState, ItemContainer, ItemId};

/// Orchestrates a single use of an item by an actor.
#[derive(Clone, Copy, Debug)]
pub struct InvocationCore<'a> {
    env: Env<'a>,
    charges: ChargeLifecycleManager,
}

impl<'a> InvocationCore<'a> {
    pub fn new(env: Env<'a>) -> Self {
        Self {
            env,
            charges: ChargeLifecycleManager,
        }
    }

    pub fn env(&self) -> &Env<'a> {
        &self.env
    }

    /// Uses `item`, held by `owner`, on behalf of `actor`.
    ///
    /// The exclusive borrows of `actor` and `owner` guarantee no other
    /// invocation touches the same item or charge counter meanwhile.
    pub fn invoke(
        &self,
        item: ItemId,
        actor: &mut ActorState,
        owner: &mut dyn ItemContainer,
    ) -> InvocationOutcome {
        let Some(target) = owner.item(item) else {
            tracing::warn!(item = %item, actor = actor.name(), "Item to use is not held by owner");
            return InvocationOutcome::Rejected(RejectReason::Missing);
        };

        let Some(config) = target.usable.as_ref() else {
            return InvocationOutcome::Rejected(RejectReason::NotUsable);
        };

        let item_name = self.env.display().display(target);
        let item_ref = target.entity_ref.clone();

        let plan = match DispatchPlan::from_config(config, &item_name) {
            Ok(plan) => plan,
            Err(reason) => return InvocationOutcome::Rejected(reason),
        };

        if plan.is_empty() {
            tracing::warn!(
                item = %item_ref,
                "Usable configuration has neither ability nor effect"
            );
        }

        if let Some(step) = &plan.skill {
            let adapter = SkillInvocationAdapter::new(self.env.skills());
            if let Err(failure) =
                adapter.invoke(&step.skill, &step.args, actor, self.env.now(), &item_ref)
            {
                return InvocationOutcome::AbilityFailed(failure);
            }
        }

        if let Some(step) = plan.effect {
            let adapter = EffectApplicationAdapter::new(self.env.effects());
            let request = EffectRequest {
                effect: &step.effect,
                overrides: step.config.as_ref(),
                state: step.state,
                item_name: &item_name,
                item_ref: &item_ref,
            };
            if let Err(failure) = adapter.apply(request, actor, self.env.now()) {
                return InvocationOutcome::EffectFailed(failure);
            }
        }

        let mut messages = Vec::new();
        let mut item_consumed = false;

        if plan.spends_charge {
            let depletion = self.charges.consume(item, owner);
            if depletion.item_destroyed {
                messages.push(format!("You used up {item_name}."));
                item_consumed = true;
            }
        }

        InvocationOutcome::Applied {
            messages,
            item_consumed,
        }
    }
}
