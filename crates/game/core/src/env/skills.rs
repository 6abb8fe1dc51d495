use core::time::Duration;

use serde_json::Value;

use crate::error::{ErrorSeverity, GameError};
use crate::state::{ActorState, SkillId};

/// Per-invocation configuration handed to a skill.
///
/// Built fresh for every use so item-specific options never leak into the
/// shared skill definition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillArgs {
    pub options: Option<Value>,
    /// Replaces the skill's default cooldown when set.
    pub cooldown: Option<Duration>,
}

impl SkillArgs {
    pub fn new(options: Option<Value>, cooldown: Option<Duration>) -> Self {
        Self { options, cooldown }
    }
}

/// Failures a skill may raise when executed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SkillError {
    #[error("skill is on cooldown ({remaining:?} remaining)")]
    Cooldown { remaining: Duration },

    #[error("skill is passive and cannot be invoked")]
    Passive,

    #[error("not enough resources")]
    NotEnoughResources,

    #[error("skill failed: {0}")]
    Failed(String),
}

impl GameError for SkillError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Cooldown { .. } | Self::NotEnoughResources => ErrorSeverity::Recoverable,
            Self::Passive => ErrorSeverity::Validation,
            Self::Failed(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Cooldown { .. } => "SKILL_COOLDOWN",
            Self::Passive => "SKILL_PASSIVE",
            Self::NotEnoughResources => "SKILL_NOT_ENOUGH_RESOURCES",
            Self::Failed(_) => "SKILL_FAILED",
        }
    }
}

/// An invocable unit with its own cooldown and resource semantics.
pub trait Ability: Send + Sync {
    fn id(&self) -> &SkillId;

    /// Player-facing name, used in cooldown messages.
    fn name(&self) -> &str;

    fn execute(&self, args: &SkillArgs, actor: &mut ActorState, now: Duration)
    -> Result<(), SkillError>;
}

/// Read-only lookup of abilities by reference.
pub trait SkillRegistry: Send + Sync {
    fn get(&self, id: &SkillId) -> Option<&dyn Ability>;
}
