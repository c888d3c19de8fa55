//! Application event types.
//!
//! Events are produced by the input-reader thread, sent over an mpsc
//! channel, and processed sequentially in the main loop. One command is
//! fully resolved before the next event is taken.

use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Resize,
}
