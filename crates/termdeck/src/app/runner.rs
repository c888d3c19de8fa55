//! Shell runner and event loop.
//!
//! Handles terminal setup/teardown and the main event loop. Events are read
//! from an mpsc channel fed by a dedicated input thread and dispatched
//! sequentially to the handlers.

use std::io;
use std::sync::mpsc::{self, Sender};

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::info;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::apps::{self, AppId};
use crate::config::{load_config, Config};
use crate::events::AppEvent;
use crate::keymap::parse_key_chord;
use crate::store::Store;

use super::state::{App, Focus};

/// Entry point: set up the terminal and run the event loop.
pub fn run() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main event loop: process events until quit.
fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    spawn_input_thread(event_tx);

    let config = load_config();
    let store = Store::new(config.storage.root.clone());
    let mut app = App::new(&config, store);
    info!("termdeck started, data root {}", app.store.root().display());

    terminal.clear()?;
    terminal.draw(|frame| super::render::render(&app, frame))?;

    while !app.should_quit {
        let event = match event_rx.recv() {
            Ok(event) => event,
            Err(_) => break,
        };
        super::input::handle_event(&mut app, event);
        // Drain any pending events before redraw
        while let Ok(event) = event_rx.try_recv() {
            super::input::handle_event(&mut app, event);
        }

        terminal.draw(|frame| super::render::render(&app, frame))?;
    }

    info!("termdeck exiting");
    Ok(())
}

/// Spawn a thread to read terminal input events.
fn spawn_input_thread(sender: Sender<AppEvent>) {
    std::thread::spawn(move || loop {
        match event::read() {
            Ok(Event::Key(key)) => {
                if sender.send(AppEvent::Input(key)).is_err() {
                    break;
                }
            }
            Ok(Event::Resize(_, _)) => {
                if sender.send(AppEvent::Resize).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(_) => break,
        }
    });
}

impl App {
    /// Create a new App on the home screen, with key chords from `config`.
    pub fn new(config: &Config, store: Store) -> Self {
        let active = AppId::Home;
        let view = apps::render(active, &store);
        Self {
            active,
            focus: Focus::Nav,
            nav_selected: 0,
            view,
            cli_input: String::new(),
            cli_output: String::new(),
            history: Vec::new(),
            history_index: 0,
            should_quit: false,
            quit_chord: parse_key_chord(&config.keymap.quit),
            focus_chord: parse_key_chord(&config.keymap.focus_cli),
            clear_chord: parse_key_chord(&config.keymap.clear),
            store,
        }
    }
}
