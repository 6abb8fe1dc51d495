//! One player's session: the actor, what they carry, and the command loop.
use std::time::{Duration, Instant};

use anyhow::Result;
use usable_content::Content;
use usable_core::invoke::humanize;
use usable_core::{ActorState, Env, Inventory, InvocationCore, UseCommand, is_use_verb};

const HELP: [&str; 6] = [
    "Commands:",
    "  use <item>       (also quaff, recite, drink, throw; 2.potion picks the second)",
    "  inventory, i     list what you carry",
    "  effects          list active effects",
    "  status           show resource pools",
    "  quit             leave",
];

/// Lines to print after a command, and whether the session is over.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Reply {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }

    fn say(line: impl Into<String>) -> Self {
        Self::lines(vec![line.into()])
    }
}

pub struct Session<'c> {
    content: &'c Content,
    actor: ActorState,
    inventory: Inventory,
    started: Instant,
}

impl<'c> Session<'c> {
    pub fn new(content: &'c Content, player_name: Option<&str>) -> Result<Self> {
        let (actor, inventory) =
            content
                .player
                .spawn(player_name, &content.config, &content.items)?;

        tracing::info!(
            player = actor.name(),
            items = inventory.len(),
            "Session started"
        );

        Ok(Self {
            content,
            actor,
            inventory,
            started: Instant::now(),
        })
    }

    pub fn player(&self) -> &str {
        self.actor.name()
    }

    pub fn handle_line(&mut self, line: &str) -> Reply {
        let now = self.started.elapsed();
        self.handle_line_at(line, now)
    }

    /// Handles one input line at engine time `now`.
    pub fn handle_line_at(&mut self, line: &str, now: Duration) -> Reply {
        self.actor.tick(now);

        let line = line.trim();
        let (verb, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match verb.to_ascii_lowercase().as_str() {
            "" => Reply::default(),
            "quit" | "exit" => Reply {
                lines: vec!["Goodbye.".to_string()],
                quit: true,
            },
            "help" => Reply::lines(HELP.iter().map(|line| line.to_string()).collect()),
            "inventory" | "i" => self.inventory_lines(),
            "effects" => self.effect_lines(now),
            "status" => self.status_lines(),
            verb if is_use_verb(verb) => self.use_item(args, now),
            _ => Reply::say("Unknown command. Type 'help' for a list."),
        }
    }

    fn use_item(&mut self, args: &str, now: Duration) -> Reply {
        let content = self.content;
        let env = Env::new(&content.skills, &content.effects).at(now);
        let command = UseCommand::new(InvocationCore::new(env));

        let report = command.execute(args, &mut self.actor, &mut self.inventory);
        Reply::lines(report.messages)
    }

    fn inventory_lines(&self) -> Reply {
        if self.inventory.is_empty() {
            return Reply::say("You are not carrying anything.");
        }

        let mut lines = vec![format!(
            "You are carrying ({}/{}):",
            self.inventory.len(),
            self.inventory.capacity()
        )];
        for item in self.inventory.iter() {
            let charges = item.usable.as_ref().and_then(|usable| usable.charges);
            let line = match charges {
                Some(0) => format!("  {} (empty)", item.name),
                Some(1) => format!("  {} (1 charge)", item.name),
                Some(n) => format!("  {} ({} charges)", item.name, n),
                None => format!("  {}", item.name),
            };
            lines.push(line);
        }
        Reply::lines(lines)
    }

    fn effect_lines(&self, now: Duration) -> Reply {
        if self.actor.effects().is_empty() {
            return Reply::say("You feel normal.");
        }

        let lines = self
            .actor
            .effects()
            .iter()
            .map(|effect| {
                let stacks = if effect.stacks > 1 {
                    format!(" x{}", effect.stacks)
                } else {
                    String::new()
                };
                match effect.remaining(now) {
                    Some(left) => format!("  {}{} ({} left)", effect.name, stacks, humanize(left)),
                    None => format!("  {}{}", effect.name, stacks),
                }
            })
            .collect();
        Reply::lines(lines)
    }

    fn status_lines(&self) -> Reply {
        let mut lines = vec![format!("{}:", self.actor.name())];
        for (name, meter) in self.actor.resources() {
            lines.push(format!("  {}: {}/{}", name, meter.current, meter.maximum));
        }
        Reply::lines(lines)
    }
}
