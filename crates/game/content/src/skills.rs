//! Data-driven skills.
//!
//! A [`SkillDefinition`] describes an active or passive skill: what it costs,
//! what it restores and how long it cools down. [`SkillBook`] holds the
//! definitions and serves them to the invocation core as a [`SkillRegistry`].

use std::collections::HashMap;
use std::time::Duration;

use usable_core::{Ability, ActorState, SkillArgs, SkillError, SkillId, SkillRegistry};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillKind {
    #[default]
    Active,
    /// Always-on; cannot be invoked.
    Passive,
}

/// An amount drawn from, or returned to, a named resource pool.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceCost {
    pub resource: String,
    pub amount: u32,
}

impl ResourceCost {
    pub fn new(resource: impl Into<String>, amount: u32) -> Self {
        Self {
            resource: resource.into(),
            amount,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDefinition {
    pub id: SkillId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: SkillKind,
    /// Default cooldown; an item's `cooldown` replaces it per use.
    #[cfg_attr(
        feature = "serde",
        serde(default, with = "usable_core::duration_secs")
    )]
    pub cooldown: Option<Duration>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cost: Vec<ResourceCost>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub restores: Vec<ResourceCost>,
}

impl SkillDefinition {
    pub fn new(id: impl Into<SkillId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: SkillKind::Active,
            cooldown: None,
            cost: Vec::new(),
            restores: Vec::new(),
        }
    }

    pub fn passive(mut self) -> Self {
        self.kind = SkillKind::Passive;
        self
    }

    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = Some(cooldown);
        self
    }

    pub fn with_cost(mut self, resource: impl Into<String>, amount: u32) -> Self {
        self.cost.push(ResourceCost::new(resource, amount));
        self
    }

    pub fn with_restore(mut self, resource: impl Into<String>, amount: u32) -> Self {
        self.restores.push(ResourceCost::new(resource, amount));
        self
    }
}

/// Multiplier for `restores`, read from the invocation's `potency` option.
fn potency(args: &SkillArgs) -> u32 {
    args.options
        .as_ref()
        .and_then(|options| options.get("potency"))
        .and_then(|value| value.as_u64())
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or(1)
}

impl Ability for SkillDefinition {
    fn id(&self) -> &SkillId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// Checks run before anything is paid, so a failed use leaves the actor as it was.
    fn execute(
        &self,
        args: &SkillArgs,
        actor: &mut ActorState,
        now: Duration,
    ) -> Result<(), SkillError> {
        if self.kind == SkillKind::Passive {
            return Err(SkillError::Passive);
        }

        if let Some(remaining) = actor.cooldown_remaining(&self.id, now) {
            return Err(SkillError::Cooldown { remaining });
        }

        for cost in &self.cost {
            let Some(pool) = actor.resource(&cost.resource) else {
                return Err(SkillError::Failed(format!(
                    "{} has no {} pool",
                    actor.name(),
                    cost.resource
                )));
            };
            if pool.current < cost.amount {
                return Err(SkillError::NotEnoughResources);
            }
        }

        for cost in &self.cost {
            if let Some(pool) = actor.resource_mut(&cost.resource) {
                pool.spend(cost.amount);
            }
        }

        let potency = potency(args);
        for restore in &self.restores {
            if let Some(pool) = actor.resource_mut(&restore.resource) {
                let restored = pool.restore(restore.amount.saturating_mul(potency));
                tracing::debug!(
                    skill = %self.id,
                    resource = %restore.resource,
                    restored,
                    "Restored resource"
                );
            }
        }

        if let Some(cooldown) = args.cooldown.or(self.cooldown) {
            actor.start_cooldown(self.id.clone(), now, cooldown);
        }

        Ok(())
    }
}

/// All skills known to the game, keyed by id.
#[derive(Clone, Debug, Default)]
pub struct SkillBook {
    skills: HashMap<SkillId, SkillDefinition>,
}

impl SkillBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from definitions. A repeated id replaces the earlier one.
    pub fn from_definitions(definitions: impl IntoIterator<Item = SkillDefinition>) -> Self {
        let mut book = Self::new();
        for definition in definitions {
            book.insert(definition);
        }
        book
    }

    pub fn insert(&mut self, definition: SkillDefinition) {
        if let Some(previous) = self.skills.insert(definition.id.clone(), definition) {
            tracing::warn!(skill = %previous.id, "Duplicate skill definition replaced");
        }
    }

    pub fn contains(&self, id: &SkillId) -> bool {
        self.skills.contains_key(id)
    }

    pub fn definition(&self, id: &SkillId) -> Option<&SkillDefinition> {
        self.skills.get(id)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl SkillRegistry for SkillBook {
    fn get(&self, id: &SkillId) -> Option<&dyn Ability> {
        self.skills.get(id).map(|skill| skill as &dyn Ability)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use usable_core::ResourceMeter;

    use super::*;

    fn mage() -> ActorState {
        ActorState::new("Rend", 4)
            .with_resource("mana", ResourceMeter::new(10, 20))
            .with_resource("health", ResourceMeter::new(5, 30))
    }

    fn fireball() -> SkillDefinition {
        SkillDefinition::new("fireball", "Fireball")
            .with_cost("mana", 8)
            .with_cooldown(Duration::from_secs(30))
    }

    #[test]
    fn passive_skill_cannot_be_invoked() {
        let skill = SkillDefinition::new("toughness", "Toughness").passive();
        let mut actor = mage();
        assert_eq!(
            skill.execute(&SkillArgs::default(), &mut actor, Duration::ZERO),
            Err(SkillError::Passive)
        );
    }

    #[test]
    fn pays_cost_and_starts_cooldown() {
        let skill = fireball();
        let mut actor = mage();

        skill
            .execute(&SkillArgs::default(), &mut actor, Duration::from_secs(5))
            .unwrap();

        assert_eq!(actor.resource("mana").unwrap().current, 2);
        assert_eq!(
            actor.cooldown_remaining(&skill.id, Duration::from_secs(5)),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn second_use_hits_cooldown() {
        let skill = fireball();
        let mut actor = mage().with_resource("mana", ResourceMeter::full(40));

        skill
            .execute(&SkillArgs::default(), &mut actor, Duration::ZERO)
            .unwrap();
        let result = skill.execute(&SkillArgs::default(), &mut actor, Duration::from_secs(10));

        assert_eq!(
            result,
            Err(SkillError::Cooldown {
                remaining: Duration::from_secs(20)
            })
        );
        assert_eq!(actor.resource("mana").unwrap().current, 32);
    }

    #[test]
    fn insufficient_resources_leave_actor_untouched() {
        let skill = fireball().with_cost("health", 50);
        let mut actor = mage();
        let before = actor.clone();

        let result = skill.execute(&SkillArgs::default(), &mut actor, Duration::ZERO);

        assert_eq!(result, Err(SkillError::NotEnoughResources));
        assert_eq!(actor, before);
    }

    #[test]
    fn missing_pool_is_unexpected() {
        let skill = SkillDefinition::new("rage", "Rage").with_cost("fury", 1);
        let result = skill.execute(&SkillArgs::default(), &mut mage(), Duration::ZERO);
        assert!(matches!(result, Err(SkillError::Failed(_))));
    }

    #[test]
    fn restore_scales_with_potency_option() {
        let skill = SkillDefinition::new("heal", "Heal").with_restore("health", 4);
        let mut actor = mage();
        let args = SkillArgs::new(Some(json!({ "potency": 3 })), None);

        skill.execute(&args, &mut actor, Duration::ZERO).unwrap();

        assert_eq!(actor.resource("health").unwrap().current, 17);
        assert_eq!(actor.cooldown_remaining(&skill.id, Duration::ZERO), None);
    }

    #[test]
    fn cooldown_argument_replaces_default() {
        let skill = fireball();
        let mut actor = mage();
        let args = SkillArgs::new(None, Some(Duration::from_secs(3)));

        skill.execute(&args, &mut actor, Duration::ZERO).unwrap();

        assert_eq!(
            actor.cooldown_remaining(&skill.id, Duration::ZERO),
            Some(Duration::from_secs(3))
        );
    }

    #[test]
    fn book_serves_definitions_as_abilities() {
        let book = SkillBook::from_definitions([fireball()]);
        let ability = book.get(&SkillId::new("fireball")).unwrap();
        assert_eq!(ability.name(), "Fireball");
        assert!(book.get(&SkillId::new("meteor")).is_none());
        assert_eq!(book.len(), 1);
    }
}
