//! Keyboard event handling.
//!
//! Routes key events by panel focus: nav-panel navigation and app
//! shortcuts, or CLI line editing with history and verb completion.
//! Submitted lines go through `commands::execute` and the outcome is
//! applied here: scrollback, redirects, and view reloads.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

use crate::apps::{self, AppId, DESCRIPTORS};
use crate::commands::{self, CommandOutcome};
use crate::events::AppEvent;
use crate::keymap::matches_chord;

use super::state::{App, Focus};

pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Input(key) => handle_key(app, key),
        AppEvent::Resize => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // The clear binding works from either focus.
    if let Some(chord) = &app.clear_chord {
        if matches_chord(&key, chord) {
            app.cli_input.clear();
            app.cli_output.clear();
            return;
        }
    }

    match app.focus {
        Focus::Nav => handle_nav_key(app, key),
        Focus::Cli => handle_cli_key(app, key),
    }
}

fn handle_nav_key(app: &mut App, key: KeyEvent) {
    if let Some(chord) = &app.quit_chord {
        if matches_chord(&key, chord) {
            app.should_quit = true;
            return;
        }
    }
    if let Some(chord) = &app.focus_chord {
        if matches_chord(&key, chord) {
            app.focus = Focus::Cli;
            return;
        }
    }

    match key.code {
        KeyCode::Up => {
            if app.nav_selected > 0 {
                app.nav_selected -= 1;
            }
        }
        KeyCode::Down => {
            if app.nav_selected + 1 < DESCRIPTORS.len() {
                app.nav_selected += 1;
            }
        }
        KeyCode::Enter => {
            switch_app(app, DESCRIPTORS[app.nav_selected].id);
        }
        KeyCode::Right => app.focus = Focus::Cli,
        KeyCode::Char(ch) => {
            if let Some(descriptor) = DESCRIPTORS
                .iter()
                .find(|descriptor| descriptor.shortcut == ch)
            {
                switch_app(app, descriptor.id);
            }
        }
        _ => {}
    }
}

fn handle_cli_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => submit_command(app),
        KeyCode::Tab => {
            if let Some(completed) = commands::complete_command_input(&app.cli_input, app.active) {
                app.cli_input = completed;
            }
        }
        KeyCode::Backspace => {
            app.cli_input.pop();
        }
        KeyCode::Left if app.cli_input.is_empty() => app.focus = Focus::Nav,
        KeyCode::Up => history_back(app),
        KeyCode::Down => history_forward(app),
        KeyCode::Char(ch) => {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
            {
                app.cli_input.push(ch);
            }
        }
        _ => {}
    }
}

fn submit_command(app: &mut App) {
    let line = app.cli_input.trim().to_string();
    app.cli_input.clear();
    if line.is_empty() {
        return;
    }
    app.history.push(line.clone());
    app.history_index = app.history.len();

    let outcome = commands::execute(&line, app.active, &app.store);
    apply_outcome(app, &line, outcome);
}

/// Apply a command outcome: scrollback, redirect, reload.
fn apply_outcome(app: &mut App, line: &str, outcome: CommandOutcome) {
    if outcome.output.is_empty() {
        // Only `clear` produces an empty output: blank the scrollback.
        app.cli_output.clear();
    } else {
        if !app.cli_output.is_empty() {
            app.cli_output.push('\n');
        }
        app.cli_output
            .push_str(&format!("> {line}\n{}", outcome.output));
    }

    if let Some(target) = outcome.redirect.as_deref() {
        match AppId::parse(target) {
            Some(id) => switch_app(app, id),
            None => debug!("ignoring redirect to unknown app {target:?}"),
        }
    }

    if outcome.reload {
        app.view = apps::render(app.active, &app.store);
    }
}

fn switch_app(app: &mut App, id: AppId) {
    app.active = id;
    if let Some(position) = DESCRIPTORS
        .iter()
        .position(|descriptor| descriptor.id == id)
    {
        app.nav_selected = position;
    }
    app.view = apps::render(id, &app.store);
}

fn history_back(app: &mut App) {
    if !app.history.is_empty() && app.history_index > 0 {
        app.history_index -= 1;
        app.cli_input = app.history[app.history_index].clone();
    }
}

fn history_forward(app: &mut App) {
    if app.history.is_empty() {
        return;
    }
    if app.history_index + 1 < app.history.len() {
        app.history_index += 1;
        app.cli_input = app.history[app.history_index].clone();
    } else {
        app.history_index = app.history.len();
        app.cli_input.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::handle_event;
    use crate::app::state::{App, Focus};
    use crate::apps::AppId;
    use crate::config::{Config, KeymapConfig, StorageConfig};
    use crate::events::AppEvent;
    use crate::store::Store;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tempfile::TempDir;

    fn test_app() -> (TempDir, App) {
        let dir = TempDir::new().expect("temp dir");
        let config = Config {
            keymap: KeymapConfig {
                quit: "q".to_string(),
                focus_cli: ":".to_string(),
                clear: "esc".to_string(),
            },
            storage: StorageConfig {
                root: dir.path().to_path_buf(),
            },
        };
        let store = Store::new(config.storage.root.clone());
        let app = App::new(&config, store);
        (dir, app)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, AppEvent::Input(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_line(app: &mut App, line: &str) {
        for ch in line.chars() {
            press(app, KeyCode::Char(ch));
        }
        press(app, KeyCode::Enter);
    }

    fn focus_cli(app: &mut App) {
        press(app, KeyCode::Char(':'));
        assert_eq!(app.focus, Focus::Cli);
    }

    #[test]
    fn quit_key_quits_from_nav_focus() {
        let (_dir, mut app) = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn quit_key_types_into_a_focused_cli() {
        let (_dir, mut app) = test_app();
        focus_cli(&mut app);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.cli_input, "q");
    }

    #[test]
    fn shortcut_keys_switch_apps() {
        let (_dir, mut app) = test_app();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.active, AppId::Todo);
        assert!(app.view.starts_with("No tasks yet."));

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.active, AppId::Notes);
        assert_eq!(app.nav_selected, 1);
    }

    #[test]
    fn nav_selection_moves_and_opens() {
        let (_dir, mut app) = test_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.active, AppId::Notes);
    }

    #[test]
    fn submitted_command_reloads_the_view() {
        let (_dir, mut app) = test_app();
        press(&mut app, KeyCode::Char('t'));
        focus_cli(&mut app);

        type_line(&mut app, "add buy milk");

        assert!(app.cli_output.contains("> add buy milk"));
        assert!(app.cli_output.contains("Added task: buy milk"));
        assert!(app.view.contains("Pending Tasks:"));
        assert!(app.view.contains("  0: buy milk"));
    }

    #[test]
    fn redirect_switches_to_a_known_app() {
        let (_dir, mut app) = test_app();
        focus_cli(&mut app);

        type_line(&mut app, "open todo");
        assert_eq!(app.active, AppId::Todo);
        assert_eq!(app.nav_selected, 2);
    }

    #[test]
    fn unknown_redirect_is_ignored() {
        let (_dir, mut app) = test_app();
        focus_cli(&mut app);

        type_line(&mut app, "open bogus");
        assert_eq!(app.active, AppId::Home);
        assert!(app.cli_output.contains("Opening bogus..."));
    }

    #[test]
    fn clear_blanks_the_scrollback() {
        let (_dir, mut app) = test_app();
        focus_cli(&mut app);

        type_line(&mut app, "help");
        assert!(!app.cli_output.is_empty());

        type_line(&mut app, "clear");
        assert!(app.cli_output.is_empty());
    }

    #[test]
    fn escape_clears_input_and_output() {
        let (_dir, mut app) = test_app();
        focus_cli(&mut app);

        type_line(&mut app, "help");
        for ch in "ls".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        press(&mut app, KeyCode::Esc);

        assert!(app.cli_input.is_empty());
        assert!(app.cli_output.is_empty());
    }

    #[test]
    fn history_recalls_previous_commands() {
        let (_dir, mut app) = test_app();
        focus_cli(&mut app);

        type_line(&mut app, "ls");
        type_line(&mut app, "help");

        press(&mut app, KeyCode::Up);
        assert_eq!(app.cli_input, "help");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.cli_input, "ls");

        press(&mut app, KeyCode::Down);
        assert_eq!(app.cli_input, "help");
        press(&mut app, KeyCode::Down);
        assert!(app.cli_input.is_empty());
    }

    #[test]
    fn tab_completes_the_verb() {
        let (_dir, mut app) = test_app();
        press(&mut app, KeyCode::Char('t'));
        focus_cli(&mut app);

        for ch in "do".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.cli_input, "done ");
    }

    #[test]
    fn left_on_empty_input_returns_to_nav() {
        let (_dir, mut app) = test_app();
        focus_cli(&mut app);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.focus, Focus::Nav);
    }
}
