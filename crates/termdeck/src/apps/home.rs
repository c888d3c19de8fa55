//! Home view: a fixed welcome screen, no store access.

const WELCOME: &str = "Welcome to termdeck!

A terminal deck of small apps sharing one command line.

Keyboard shortcuts:
  ↑↓ - Navigate apps
  Enter - Open selected app
  : - Focus the command line
  Esc - Clear the command line

Try typing a command below, or jump to Notes/Todo from the nav panel.";

pub(crate) fn render() -> String {
    WELCOME.to_string()
}
