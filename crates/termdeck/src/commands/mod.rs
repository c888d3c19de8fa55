//! Command system for the CLI panel.
//!
//! This module covers the full life of a command line:
//! - Registry: command specs and metadata (registry.rs)
//! - Parsing: tokenizing input and completing verbs (parse.rs)
//! - Execution: dispatching verbs and returning outcomes (exec/)
//!
//! Global verbs (`open`, `home`, `ls`, `clear`, `help`) resolve regardless of
//! the active app; everything else goes to the active app's handler.

mod exec;
mod parse;
mod registry;

pub use exec::{execute, CommandOutcome};
pub use parse::complete_command_input;
pub use registry::command_hint_lines;
