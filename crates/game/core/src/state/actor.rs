//! Actor state touched by item use: resources, cooldowns, effects, immunities.

use core::time::Duration;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::state::{EffectId, EffectInstance, EffectList, SkillId};

/// Current and maximum value of a resource pool (health, mana, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    /// Subtracts `amount`, returning false (and leaving the meter untouched) if short.
    pub fn spend(&mut self, amount: u32) -> bool {
        match self.current.checked_sub(amount) {
            Some(rest) => {
                self.current = rest;
                true
            }
            None => false,
        }
    }

    /// Adds `amount` up to the maximum and returns how much was actually restored.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.maximum);
        self.current - before
    }
}

/// The acting entity of a "use" command.
///
/// Mutation rights during invocation: skills touch resources and cooldowns,
/// the effect adapter touches effects. Nothing else writes here.
#[derive(Clone, Debug, PartialEq)]
pub struct ActorState {
    name: String,
    resources: BTreeMap<String, ResourceMeter>,
    /// Skill → time at which it becomes ready again.
    cooldowns: HashMap<SkillId, Duration>,
    effects: EffectList,
    immunities: BTreeSet<EffectId>,
}

impl ActorState {
    pub fn new(name: impl Into<String>, max_effects: usize) -> Self {
        Self {
            name: name.into(),
            resources: BTreeMap::new(),
            cooldowns: HashMap::new(),
            effects: EffectList::new(max_effects),
            immunities: BTreeSet::new(),
        }
    }

    pub fn with_resource(mut self, name: impl Into<String>, meter: ResourceMeter) -> Self {
        self.resources.insert(name.into(), meter);
        self
    }

    pub fn with_immunity(mut self, effect: impl Into<EffectId>) -> Self {
        self.immunities.insert(effect.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resource(&self, name: &str) -> Option<&ResourceMeter> {
        self.resources.get(name)
    }

    pub fn resource_mut(&mut self, name: &str) -> Option<&mut ResourceMeter> {
        self.resources.get_mut(name)
    }

    pub fn resources(&self) -> impl Iterator<Item = (&str, &ResourceMeter)> {
        self.resources.iter().map(|(name, meter)| (name.as_str(), meter))
    }

    /// Time left before `skill` can be used again, or `None` if it is ready.
    pub fn cooldown_remaining(&self, skill: &SkillId, now: Duration) -> Option<Duration> {
        self.cooldowns
            .get(skill)
            .filter(|ready_at| **ready_at > now)
            .map(|ready_at| *ready_at - now)
    }

    pub fn start_cooldown(&mut self, skill: SkillId, now: Duration, length: Duration) {
        if length.is_zero() {
            self.cooldowns.remove(&skill);
        } else {
            self.cooldowns.insert(skill, now.saturating_add(length));
        }
    }

    pub fn add_immunity(&mut self, effect: impl Into<EffectId>) {
        self.immunities.insert(effect.into());
    }

    pub fn is_immune(&self, effect: &EffectId) -> bool {
        self.immunities.contains(effect)
    }

    pub fn effects(&self) -> &EffectList {
        &self.effects
    }

    /// Attaches an effect. Returns false when immunity or stacking rules reject it.
    pub fn add_effect(&mut self, instance: EffectInstance) -> bool {
        if self.is_immune(&instance.effect) {
            return false;
        }
        self.effects.add(instance)
    }

    /// Drops effects whose duration has elapsed.
    pub fn tick(&mut self, now: Duration) {
        self.effects.remove_expired(now);
        self.cooldowns.retain(|_, ready_at| *ready_at > now);
    }
}
