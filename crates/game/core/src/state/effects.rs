//! Stateful effects attached to actors.
//!
//! An [`EffectInstance`] is built by an effect registry from merged
//! configuration and handed to the actor, whose [`EffectList`] applies the
//! stacking rules:
//!
//! - non-unique effects always stack as separate instances
//! - a unique effect with `max_stacks` gains a stack until the cap is reached
//! - a unique effect with `refreshes` restarts its duration
//! - any other duplicate of a unique effect is rejected
//!
//! Durations are measured against the engine clock (`now`), and expired
//! instances are pruned with [`EffectList::remove_expired`].

use core::time::Duration;

use serde_json::{Map, Value};

use crate::error::{ErrorSeverity, GameError};
use crate::state::EffectId;

/// Stacking and lifetime rules read from an effect's configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectFlags {
    /// `None` means the effect persists until removed.
    pub duration: Option<Duration>,
    pub unique: bool,
    pub max_stacks: Option<u32>,
    pub refreshes: bool,
}

impl Default for EffectFlags {
    fn default() -> Self {
        Self {
            duration: None,
            unique: true,
            max_stacks: None,
            refreshes: false,
        }
    }
}

/// Malformed flag values in an effect configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EffectConfigError {
    #[error("effect config key `{key}` must be {expected}")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
    },
}

impl GameError for EffectConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        "EFFECT_CONFIG_INVALID_VALUE"
    }
}

impl EffectFlags {
    /// Reads `duration` (seconds), `unique`, `maxStacks` and `refreshes`.
    ///
    /// Missing keys keep their defaults; present keys of the wrong type are errors.
    pub fn from_config(config: &Map<String, Value>) -> Result<Self, EffectConfigError> {
        let mut flags = Self::default();

        if let Some(value) = config.get("duration") {
            let secs = value.as_f64().ok_or(EffectConfigError::InvalidValue {
                key: "duration",
                expected: "a number of seconds",
            })?;
            let duration = Duration::try_from_secs_f64(secs).map_err(|_| {
                EffectConfigError::InvalidValue {
                    key: "duration",
                    expected: "a non-negative number of seconds",
                }
            })?;
            flags.duration = Some(duration);
        }

        if let Some(value) = config.get("unique") {
            flags.unique = value.as_bool().ok_or(EffectConfigError::InvalidValue {
                key: "unique",
                expected: "a boolean",
            })?;
        }

        if let Some(value) = config.get("maxStacks") {
            let stacks = value
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .filter(|n| *n > 0)
                .ok_or(EffectConfigError::InvalidValue {
                    key: "maxStacks",
                    expected: "a positive integer",
                })?;
            flags.max_stacks = Some(stacks);
        }

        if let Some(value) = config.get("refreshes") {
            flags.refreshes = value.as_bool().ok_or(EffectConfigError::InvalidValue {
                key: "refreshes",
                expected: "a boolean",
            })?;
        }

        Ok(flags)
    }
}

/// A live effect owned by an actor.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectInstance {
    pub effect: EffectId,
    pub name: String,
    pub flags: EffectFlags,
    pub config: Map<String, Value>,
    pub state: Value,
    pub started_at: Duration,
    pub stacks: u32,
}

impl EffectInstance {
    pub fn new(
        effect: EffectId,
        name: impl Into<String>,
        flags: EffectFlags,
        config: Map<String, Value>,
        state: Value,
    ) -> Self {
        Self {
            effect,
            name: name.into(),
            flags,
            config,
            state,
            started_at: Duration::ZERO,
            stacks: 1,
        }
    }

    /// Stamps the instance with the time it was attached.
    pub fn activate(&mut self, now: Duration) {
        self.started_at = now;
    }

    pub fn expires_at(&self) -> Option<Duration> {
        self.flags.duration.map(|d| self.started_at.saturating_add(d))
    }

    pub fn is_active(&self, now: Duration) -> bool {
        self.expires_at().is_none_or(|expires| expires > now)
    }

    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.expires_at().map(|expires| expires.saturating_sub(now))
    }
}

/// Effects attached to one actor, bounded by `capacity`.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectList {
    effects: Vec<EffectInstance>,
    capacity: usize,
}

impl EffectList {
    pub fn new(capacity: usize) -> Self {
        Self {
            effects: Vec::new(),
            capacity,
        }
    }

    /// Attaches `instance`, applying stacking rules. Returns false if rejected.
    pub fn add(&mut self, instance: EffectInstance) -> bool {
        let duplicate = if instance.flags.unique {
            self.effects
                .iter_mut()
                .find(|e| e.effect == instance.effect)
        } else {
            None
        };

        if let Some(existing) = duplicate {
            if existing.flags.max_stacks.is_some_and(|max| existing.stacks < max) {
                existing.stacks += 1;
                existing.started_at = instance.started_at;
                return true;
            }

            if existing.flags.refreshes {
                existing.started_at = instance.started_at;
                existing.config = instance.config;
                return true;
            }

            return false;
        }

        if self.effects.len() >= self.capacity {
            return false;
        }

        self.effects.push(instance);
        true
    }

    pub fn get(&self, effect: &EffectId) -> Option<&EffectInstance> {
        self.effects.iter().find(|e| &e.effect == effect)
    }

    pub fn has(&self, effect: &EffectId) -> bool {
        self.get(effect).is_some()
    }

    /// Removes all expired effects at the current time.
    pub fn remove_expired(&mut self, now: Duration) {
        self.effects.retain(|e| e.is_active(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &EffectInstance> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn instance(id: &str, flags: EffectFlags) -> EffectInstance {
        EffectInstance::new(EffectId::new(id), id, flags, Map::new(), Value::Null)
    }

    #[test]
    fn flags_default_when_keys_missing() {
        let flags = EffectFlags::from_config(&Map::new()).unwrap();
        assert_eq!(flags, EffectFlags::default());
        assert!(flags.unique);
    }

    #[test]
    fn flags_parse_all_keys() {
        let flags = EffectFlags::from_config(&config(json!({
            "duration": 10,
            "unique": true,
            "maxStacks": 3,
            "refreshes": true,
        })))
        .unwrap();

        assert_eq!(flags.duration, Some(Duration::from_secs(10)));
        assert_eq!(flags.max_stacks, Some(3));
        assert!(flags.refreshes);
    }

    #[test]
    fn flags_reject_wrong_types() {
        let err = EffectFlags::from_config(&config(json!({ "duration": "ten" }))).unwrap_err();
        assert_eq!(
            err,
            EffectConfigError::InvalidValue {
                key: "duration",
                expected: "a number of seconds",
            }
        );

        assert!(EffectFlags::from_config(&config(json!({ "duration": -1.0 }))).is_err());
        assert!(EffectFlags::from_config(&config(json!({ "unique": 1 }))).is_err());
    }

    #[test]
    fn flags_reject_zero_max_stacks() {
        assert_eq!(
            EffectFlags::from_config(&config(json!({ "maxStacks": 0 }))),
            Err(EffectConfigError::InvalidValue {
                key: "maxStacks",
                expected: "a positive integer",
            })
        );
    }

    #[test]
    fn duplicate_unique_effect_is_rejected() {
        let mut list = EffectList::new(4);
        assert!(list.add(instance("poison", EffectFlags::default())));
        assert!(!list.add(instance("poison", EffectFlags::default())));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn stacking_effect_gains_stacks_up_to_cap() {
        let flags = EffectFlags {
            max_stacks: Some(2),
            ..EffectFlags::default()
        };
        let mut list = EffectList::new(4);

        assert!(list.add(instance("bleed", flags)));
        assert!(list.add(instance("bleed", flags)));
        assert!(!list.add(instance("bleed", flags)));
        assert_eq!(list.get(&EffectId::new("bleed")).unwrap().stacks, 2);
    }

    #[test]
    fn refreshing_effect_restarts_duration() {
        let flags = EffectFlags {
            duration: Some(Duration::from_secs(10)),
            refreshes: true,
            ..EffectFlags::default()
        };
        let mut list = EffectList::new(4);

        let mut first = instance("regen", flags);
        first.activate(Duration::from_secs(0));
        assert!(list.add(first));

        let mut second = instance("regen", flags);
        second.activate(Duration::from_secs(5));
        assert!(list.add(second));

        let regen = list.get(&EffectId::new("regen")).unwrap();
        assert_eq!(regen.expires_at(), Some(Duration::from_secs(15)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn non_unique_effects_stack_as_instances_until_capacity() {
        let flags = EffectFlags {
            unique: false,
            ..EffectFlags::default()
        };
        let mut list = EffectList::new(2);

        assert!(list.add(instance("ward", flags)));
        assert!(list.add(instance("ward", flags)));
        assert!(!list.add(instance("ward", flags)));
    }

    #[test]
    fn expired_effects_are_pruned() {
        let flags = EffectFlags {
            duration: Some(Duration::from_secs(3)),
            ..EffectFlags::default()
        };
        let mut list = EffectList::new(4);
        let mut effect = instance("haste", flags);
        effect.activate(Duration::from_secs(1));
        list.add(effect);
        list.add(instance("curse", EffectFlags::default()));

        list.remove_expired(Duration::from_secs(3));
        assert_eq!(list.len(), 2);

        list.remove_expired(Duration::from_secs(4));
        assert_eq!(list.len(), 1);
        assert!(list.has(&EffectId::new("curse")));
    }
}
