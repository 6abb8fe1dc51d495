//! The player-facing `use` command.
//!
//! Resolves the argument text against the actor's inventory, runs the
//! invocation core, and turns the outcome into the lines shown to the player.

use crate::invoke::{InvocationCore, InvocationOutcome, NOT_FOUND};
use crate::state::{ActorState, Inventory};

/// Verbs routed to the `use` command.
pub const USE_ALIASES: [&str; 5] = ["use", "quaff", "recite", "drink", "throw"];

pub const USE_WHAT: &str = "Use what?";

/// Returns true if `verb` (case-insensitive) is `use` or one of its aliases.
pub fn is_use_verb(verb: &str) -> bool {
    USE_ALIASES
        .iter()
        .any(|alias| alias.eq_ignore_ascii_case(verb))
}

/// Result of running the command: the outcome, when an item was targeted,
/// and the lines for the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandReport {
    pub outcome: Option<InvocationOutcome>,
    pub messages: Vec<String>,
}

impl CommandReport {
    fn say(message: &str) -> Self {
        Self {
            outcome: None,
            messages: vec![message.to_string()],
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct UseCommand<'a> {
    core: InvocationCore<'a>,
}

impl<'a> UseCommand<'a> {
    pub fn new(core: InvocationCore<'a>) -> Self {
        Self { core }
    }

    pub fn execute(
        &self,
        args: &str,
        actor: &mut ActorState,
        inventory: &mut Inventory,
    ) -> CommandReport {
        tracing::info!("{} is trying to use {}", actor.name(), args);

        let args = args.trim();
        if args.is_empty() {
            return CommandReport::say(USE_WHAT);
        }

        let Some(item) = inventory.resolve(args) else {
            return CommandReport::say(NOT_FOUND);
        };

        let outcome = self.core.invoke(item, actor, inventory);
        CommandReport {
            messages: outcome.messages(),
            outcome: Some(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_are_case_insensitive() {
        assert!(is_use_verb("use"));
        assert!(is_use_verb("Quaff"));
        assert!(is_use_verb("THROW"));
        assert!(!is_use_verb("eat"));
    }
}
