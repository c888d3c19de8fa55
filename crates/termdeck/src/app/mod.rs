//! Shell orchestration and main event loop.
//!
//! This module owns the hosting shell around the command router:
//! - Initialization (terminal setup, config and store loading)
//! - Event loop (keyboard input, redraw)
//! - Session state (active app, focus, history, scrollback)
//! - UI rendering delegation
//!
//! All mutable session state lives in the `App` struct and is passed
//! explicitly to the input and render paths; events are processed
//! sequentially, so one command fully resolves before the next.
//!
//! Submodules:
//! - state: App struct and type definitions
//! - runner: main loop and terminal setup
//! - input: keyboard event handling
//! - render: panel layout and drawing

mod input;
mod render;
mod runner;
mod state;

pub use runner::run;
