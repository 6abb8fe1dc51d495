//! Invocation results and their actor-facing language.

use core::time::Duration;

use chrono_humanize::{Accuracy, HumanTime, Tense};

use crate::error::{ErrorSeverity, GameError};

pub const CANNOT_USE: &str = "You can't use that.";
pub const NOT_FOUND: &str = "You don't have anything like that.";
pub const NOTHING_HAPPENS: &str = "Nothing happens.";
pub const PASSIVE_SKILL: &str = "That skill is passive.";
pub const NOT_ENOUGH_RESOURCES: &str = "You do not have enough resources.";
pub const UNEXPECTED: &str = "Huh?";

/// Why an invocation was refused before any dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// The item carries no usable configuration.
    NotUsable,
    /// Charges are tracked and none remain.
    Depleted { item_name: String },
    /// The item is no longer held by the container.
    Missing,
}

impl RejectReason {
    pub fn message(&self) -> String {
        match self {
            Self::NotUsable => CANNOT_USE.to_string(),
            Self::Depleted { item_name } => format!("You've used up {item_name}."),
            Self::Missing => NOT_FOUND.to_string(),
        }
    }
}

/// Classified failure of the skill dispatch path.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AbilityFailure {
    #[error("configured skill does not exist")]
    Misconfigured,

    #[error("{skill_name} is on cooldown ({remaining:?} remaining)")]
    CooldownActive {
        skill_name: String,
        remaining: Duration,
    },

    #[error("skill is passive")]
    Passive,

    #[error("insufficient resources")]
    InsufficientResources,

    #[error("unexpected skill failure: {0}")]
    Unexpected(String),
}

impl AbilityFailure {
    pub fn message(&self) -> String {
        match self {
            Self::Misconfigured => CANNOT_USE.to_string(),
            Self::CooldownActive {
                skill_name,
                remaining,
            } => format!(
                "{skill_name} is on cooldown. {} remaining.",
                humanize(*remaining)
            ),
            Self::Passive => PASSIVE_SKILL.to_string(),
            Self::InsufficientResources => NOT_ENOUGH_RESOURCES.to_string(),
            Self::Unexpected(_) => UNEXPECTED.to_string(),
        }
    }
}

impl GameError for AbilityFailure {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Misconfigured | Self::Unexpected(_) => ErrorSeverity::Internal,
            Self::CooldownActive { .. } | Self::InsufficientResources => {
                ErrorSeverity::Recoverable
            }
            Self::Passive => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Misconfigured => "ABILITY_MISCONFIGURED",
            Self::CooldownActive { .. } => "ABILITY_COOLDOWN_ACTIVE",
            Self::Passive => "ABILITY_PASSIVE",
            Self::InsufficientResources => "ABILITY_INSUFFICIENT_RESOURCES",
            Self::Unexpected(_) => "ABILITY_UNEXPECTED",
        }
    }
}

/// Classified failure of the effect dispatch path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EffectFailure {
    /// The registry could not build the configured effect.
    #[error("configured effect could not be created")]
    Misconfigured,

    /// The actor's immunity or stacking rules refused the effect.
    #[error("effect rejected by actor")]
    Rejected,
}

impl EffectFailure {
    pub fn message(&self) -> String {
        match self {
            Self::Misconfigured => CANNOT_USE.to_string(),
            Self::Rejected => NOTHING_HAPPENS.to_string(),
        }
    }
}

impl GameError for EffectFailure {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Misconfigured => ErrorSeverity::Internal,
            Self::Rejected => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Misconfigured => "EFFECT_MISCONFIGURED",
            Self::Rejected => "EFFECT_REJECTED",
        }
    }
}

/// The single result of one `use`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvocationOutcome {
    Rejected(RejectReason),
    AbilityFailed(AbilityFailure),
    EffectFailed(EffectFailure),
    Applied {
        messages: Vec<String>,
        item_consumed: bool,
    },
}

impl InvocationOutcome {
    /// Lines to show the actor for this outcome.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Rejected(reason) => vec![reason.message()],
            Self::AbilityFailed(failure) => vec![failure.message()],
            Self::EffectFailed(failure) => vec![failure.message()],
            Self::Applied { messages, .. } => messages.clone(),
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// True when the item was removed from its owner by this invocation.
    pub fn item_consumed(&self) -> bool {
        matches!(
            self,
            Self::Applied {
                item_consumed: true,
                ..
            }
        )
    }
}

/// Renders a duration for players, rounded to whole seconds ("30 seconds").
pub fn humanize(duration: Duration) -> String {
    let secs = duration.as_secs() + u64::from(duration.subsec_millis() >= 500);
    let secs = i64::try_from(secs).unwrap_or(i64::MAX);
    let delta = chrono::Duration::try_seconds(secs).unwrap_or(chrono::Duration::MAX);
    HumanTime::from(delta).to_text_en(Accuracy::Precise, Tense::Present)
}
