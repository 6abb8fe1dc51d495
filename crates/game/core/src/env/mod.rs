//! Traits describing read-only collaborators of the invocation engine.
//!
//! Registries expose skill and effect content, and the display formatter
//! renders item names. The [`Env`] aggregate bundles them with the current
//! engine time so one invocation sees a single, stable view of content.
mod display;
mod effects;
mod skills;

use core::time::Duration;

pub use display::{ItemDisplay, PlainDisplay};
pub use effects::EffectRegistry;
pub use skills::{Ability, SkillArgs, SkillError, SkillRegistry};

/// Aggregates the read-only collaborators required by the invocation engine.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    skills: &'a dyn SkillRegistry,
    effects: &'a dyn EffectRegistry,
    display: &'a dyn ItemDisplay,
    now: Duration,
}

impl<'a> Env<'a> {
    /// Creates an environment at time zero that displays items by name.
    pub fn new(skills: &'a dyn SkillRegistry, effects: &'a dyn EffectRegistry) -> Self {
        Self {
            skills,
            effects,
            display: &PlainDisplay,
            now: Duration::ZERO,
        }
    }

    pub fn with_display(mut self, display: &'a dyn ItemDisplay) -> Self {
        self.display = display;
        self
    }

    /// Returns a copy of this environment at engine time `now`.
    pub fn at(mut self, now: Duration) -> Self {
        self.now = now;
        self
    }

    pub fn skills(&self) -> &'a dyn SkillRegistry {
        self.skills
    }

    pub fn effects(&self) -> &'a dyn EffectRegistry {
        self.effects
    }

    pub fn display(&self) -> &'a dyn ItemDisplay {
        self.display
    }

    pub fn now(&self) -> Duration {
        self.now
    }
}

impl core::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Env").field("now", &self.now).finish_non_exhaustive()
    }
}
