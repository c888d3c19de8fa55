//! Panel layout and drawing.
//!
//! Draws the fixed shell layout each frame:
//! title bar / nav panel | (app panel over CLI panel) / hint bar.
//! Rendering reads App state and the cached view string only; it performs
//! no store access and no mutation beyond the nav list's selection state.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::apps::{self, DESCRIPTORS};
use crate::commands::command_hint_lines;

use super::state::{App, Focus, CLI_PANEL_HEIGHT, NAV_PANEL_WIDTH};

const HINT_MAX_LINES: usize = 6;

/// Main render entry point. Called each frame by the event loop.
pub fn render(app: &App, frame: &mut ratatui::Frame) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title_bar(frame, rows[0]);
    render_main(app, frame, rows[1]);
    render_hint_bar(frame, rows[2]);
}

fn render_title_bar(frame: &mut ratatui::Frame, area: Rect) {
    let title = Paragraph::new(format!("TERMDECK v{}", env!("CARGO_PKG_VERSION")))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, area);
}

fn render_main(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(NAV_PANEL_WIDTH), Constraint::Min(1)])
        .split(area);

    render_nav_panel(app, frame, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(CLI_PANEL_HEIGHT)])
        .split(columns[1]);

    render_app_panel(app, frame, right[0]);
    render_cli_panel(app, frame, right[1]);
}

fn render_nav_panel(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    let items: Vec<ListItem> = DESCRIPTORS
        .iter()
        .map(|descriptor| {
            let style = if descriptor.id == app.active {
                Style::default().fg(Color::Magenta)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::styled(descriptor.name, style))
        })
        .collect();

    let list = List::new(items)
        .block(panel_block("NAVIGATION", app.focus == Focus::Nav))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.nav_selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_app_panel(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    let descriptor = apps::descriptor(app.active);
    let view = Paragraph::new(app.view.as_str())
        .block(panel_block(&descriptor.name.to_uppercase(), false))
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(view, area);
}

fn render_cli_panel(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    let descriptor = apps::descriptor(app.active);
    let block = panel_block(
        &format!("CLI - {}", descriptor.hints),
        app.focus == Focus::Cli,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let output = Paragraph::new(output_lines(app, rows[0].height as usize))
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(output, rows[0]);
    frame.render_widget(Paragraph::new(input_line(app)), rows[1]);
}

/// Output area content: hint lines while a command is being typed,
/// otherwise the scrollback tail that fits the panel.
fn output_lines(app: &App, height: usize) -> Vec<Line<'static>> {
    if app.focus == Focus::Cli && !app.cli_input.is_empty() {
        let hints = command_hint_lines(&app.cli_input, app.active, HINT_MAX_LINES.min(height));
        if !hints.is_empty() {
            return hints.into_iter().map(Line::raw).collect();
        }
    }

    let lines: Vec<&str> = app.cli_output.lines().collect();
    let skip = lines.len().saturating_sub(height);
    lines[skip..]
        .iter()
        .map(|line| Line::raw(line.to_string()))
        .collect()
}

/// CLI input line with a block cursor while focused.
fn input_line(app: &App) -> Line<'static> {
    let prompt = Span::styled("> ", Style::default().fg(Color::DarkGray));
    let input = Span::styled(app.cli_input.clone(), Style::default().fg(Color::White));
    if app.focus == Focus::Cli {
        let cursor = Span::styled(" ", Style::default().bg(Color::White).fg(Color::Black));
        Line::from(vec![prompt, input, cursor])
    } else {
        Line::from(vec![prompt, input])
    }
}

fn render_hint_bar(frame: &mut ratatui::Frame, area: Rect) {
    let shortcuts: Vec<String> = DESCRIPTORS
        .iter()
        .map(|descriptor| format!("{}: {}", descriptor.shortcut, descriptor.name))
        .collect();
    let hint = Paragraph::new(format!(
        "←→: focus | ↑↓: navigate | {} | ↑↓ in CLI: history | q: quit",
        shortcuts.join(" | ")
    ))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    );
    frame.render_widget(hint, area);
}

fn panel_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(border_style)
}
