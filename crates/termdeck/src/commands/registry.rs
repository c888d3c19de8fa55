//! Command registry and metadata.
//!
//! Defines the global verbs and each app's verbs with usage and description
//! text. Used for help display, hint lines while typing, and verb
//! completion. Dispatch itself lives in exec; this table is metadata.

use crate::apps::AppId;

/// Specification for a single command.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub verb: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    pub scope: CommandScope,
}

/// Where a command applies: everywhere, or only while one app is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandScope {
    Global,
    App(AppId),
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        verb: "open",
        usage: "open [app]",
        description: "Open an app",
        scope: CommandScope::Global,
    },
    CommandSpec {
        verb: "home",
        usage: "home",
        description: "Return to home",
        scope: CommandScope::Global,
    },
    CommandSpec {
        verb: "ls",
        usage: "ls",
        description: "List apps",
        scope: CommandScope::Global,
    },
    CommandSpec {
        verb: "clear",
        usage: "clear",
        description: "Clear terminal",
        scope: CommandScope::Global,
    },
    CommandSpec {
        verb: "help",
        usage: "help",
        description: "Show this message",
        scope: CommandScope::Global,
    },
    CommandSpec {
        verb: "new",
        usage: "new [title]",
        description: "Create a note",
        scope: CommandScope::App(AppId::Notes),
    },
    CommandSpec {
        verb: "list",
        usage: "list",
        description: "List notes",
        scope: CommandScope::App(AppId::Notes),
    },
    CommandSpec {
        verb: "add",
        usage: "add [task]",
        description: "Add a task",
        scope: CommandScope::App(AppId::Todo),
    },
    CommandSpec {
        verb: "done",
        usage: "done [id]",
        description: "Mark a task done",
        scope: CommandScope::App(AppId::Todo),
    },
    CommandSpec {
        verb: "list",
        usage: "list",
        description: "List tasks",
        scope: CommandScope::App(AppId::Todo),
    },
];

/// Commands usable while `active` is the current app: the globals plus the
/// app's own verbs.
pub fn commands_in_scope(active: AppId) -> impl Iterator<Item = &'static CommandSpec> {
    COMMANDS.iter().filter(move |command| match command.scope {
        CommandScope::Global => true,
        CommandScope::App(id) => id == active,
    })
}

/// The usage block returned by `help`, enumerating the global verbs.
pub fn global_help() -> String {
    let mut output = String::from("Global Commands:");
    for command in COMMANDS {
        if command.scope == CommandScope::Global {
            output.push_str(&format!("\n  {} - {}", command.usage, command.description));
        }
    }
    output
}

/// Hint lines matching the typed verb prefix, for display while the command
/// line is being edited.
pub fn command_hint_lines(input: &str, active: AppId, max: usize) -> Vec<String> {
    let query = input
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_lowercase();

    let mut matches: Vec<&CommandSpec> = commands_in_scope(active)
        .filter(|command| query.is_empty() || command.verb.starts_with(&query))
        .collect();
    if matches.is_empty() {
        return Vec::new();
    }

    matches.sort_by(|a, b| a.verb.cmp(b.verb));
    let longest = matches
        .iter()
        .map(|command| command.usage.len())
        .max()
        .unwrap_or(0);

    matches
        .into_iter()
        .take(max)
        .map(|command| {
            format!(
                "{:<width$} {}",
                command.usage,
                command.description,
                width = longest
            )
        })
        .collect()
}
