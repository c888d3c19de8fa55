//! Shell state types.
//!
//! The App struct holds all mutable session state: the active app, panel
//! focus, CLI line editing, scrollback, command history, and the cached view
//! of the active app.

use crate::apps::AppId;
use crate::keymap::KeyChord;
use crate::store::Store;

/// Which panel receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Nav,
    Cli,
}

/// Main shell state container.
///
/// Constructed in runner.rs; mutated by input.rs; read by render.rs.
pub struct App {
    pub active: AppId,
    pub focus: Focus,
    pub nav_selected: usize,
    /// Cached output of the active app's renderer; refreshed when the active
    /// app changes and when a command reports `reload`.
    pub view: String,
    pub cli_input: String,
    pub cli_output: String,
    pub history: Vec<String>,
    pub history_index: usize,
    pub should_quit: bool,
    pub quit_chord: Option<KeyChord>,
    pub focus_chord: Option<KeyChord>,
    pub clear_chord: Option<KeyChord>,
    pub store: Store,
}

pub const NAV_PANEL_WIDTH: u16 = 24;
pub const CLI_PANEL_HEIGHT: u16 = 10;
