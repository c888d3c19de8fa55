//! Command execution and dispatch.
//!
//! `execute` is the single entry point: global verbs are tried first
//! regardless of the active app, then the line falls through to the active
//! app's handler. Every path terminates in a well-formed `CommandOutcome`;
//! errors are message text, never panics.

mod notes;
mod todo;


use log::debug;

use crate::apps::{AppId, DESCRIPTORS};
use crate::store::Store;

use super::parse::parse_command;
use super::registry::global_help;

/// Structured result of one command: text to display, an optional app id to
/// activate, and whether the active view must re-render.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub output: String,
    pub redirect: Option<String>,
    pub reload: bool,
}

/// Execute one command line against the active app and the store.
pub fn execute(line: &str, active: AppId, store: &Store) -> CommandOutcome {
    let Some(command) = parse_command(line) else {
        // Blank input; callers normally filter this out before dispatching.
        return CommandOutcome {
            output: String::new(),
            redirect: None,
            reload: false,
        };
    };
    debug!("execute verb={} app={}", command.verb, active.as_str());

    match command.verb.as_str() {
        "open" => open_app(&command.args),
        "home" => CommandOutcome {
            output: "Returning home...".to_string(),
            redirect: Some(AppId::Home.as_str().to_string()),
            reload: false,
        },
        "ls" => list_apps(),
        "clear" => CommandOutcome {
            output: String::new(),
            redirect: None,
            reload: false,
        },
        "help" => CommandOutcome {
            output: global_help(),
            redirect: None,
            reload: false,
        },
        verb => match active {
            AppId::Notes => notes::handle_notes_command(verb, &command.args, store),
            AppId::Todo => todo::handle_todo_command(verb, &command.args, store),
            AppId::Home => unknown_command(verb),
        },
    }
}

/// `open <app>`: redirect to the joined, lowercased target. The target is
/// not validated here; the shell ignores redirects it cannot resolve.
fn open_app(args: &[String]) -> CommandOutcome {
    if args.is_empty() {
        return CommandOutcome {
            output: "Usage: open [app]".to_string(),
            redirect: None,
            reload: false,
        };
    }
    let target = args.join(" ").to_lowercase();
    CommandOutcome {
        output: format!("Opening {target}..."),
        redirect: Some(target),
        reload: false,
    }
}

/// `ls`: enumerate the registered apps from the descriptor table.
fn list_apps() -> CommandOutcome {
    let mut output = String::from("Available apps:");
    for descriptor in DESCRIPTORS {
        output.push_str(&format!("\n  {}", descriptor.id.as_str()));
    }
    CommandOutcome {
        output,
        redirect: None,
        reload: false,
    }
}

fn unknown_command(verb: &str) -> CommandOutcome {
    CommandOutcome {
        output: format!("Unknown command: {verb}. Type 'help' for commands."),
        redirect: None,
        reload: false,
    }
}
