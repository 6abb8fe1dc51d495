//! Common error infrastructure for usable-core.
//!
//! This module provides shared types and traits used across all error types in
//! the crate. Domain-specific errors (e.g., `SkillError`, `AbilityFailure`) are
//! defined in their respective modules alongside the operations that raise them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each failure domain has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized so callers know what to log
//! - **No Unwinding**: Every failure is a value; nothing in the invocation path panics

/// Severity level of an error, used for categorization and logging strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: Normal gameplay conditions (cooldowns, immunities)
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Content-authoring defects or unexpected failures that need investigation
/// - **Fatal**: Unrecoverable errors indicating corrupted state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - expected steady-state condition.
    ///
    /// Examples: skill on cooldown, effect rejected by immunity
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: item is not usable, inventory full
    Validation,

    /// Internal error - content or code defect.
    ///
    /// Examples: item references an unknown skill, skill raised an unclassified failure
    /// These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all usable-core errors.
///
/// This trait provides a uniform interface for error classification across all
/// error types in the crate.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, log filtering, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
