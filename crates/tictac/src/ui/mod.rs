//! Stateless rendering of the [`App`](crate::App).

mod board;
mod confetti;
mod dialog;
mod history;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictac_core::GamePhase;

use crate::app::App;
use crate::input::Focus;

pub use confetti::ConfettiWidget;

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and history
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(42), Constraint::Length(28)])
        .split(chunks[1]);

    draw_game(frame, body[0], app);
    history::draw(frame, body[1], app);
    draw_hints(frame, chunks[2], app);

    if let Some(confetti) = app.confetti() {
        frame.render_widget(ConfettiWidget::new(confetti), area);
    }
    if let Some(outcome) = app.dialog_outcome() {
        dialog::draw(frame, area, outcome, app.dialog_button());
    }
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(11)])
        .split(area);

    let color = match app.controller().phase() {
        GamePhase::InProgress => Color::Yellow,
        GamePhase::Won => Color::Green,
        GamePhase::Drawn => Color::Magenta,
    };
    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[0]);

    board::draw(frame, chunks[1], app);
}

fn draw_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.dialog_outcome().is_some() {
        "←/→ choose  Enter confirm  c close  r restart  q quit"
    } else {
        match app.focus() {
            Focus::Board => "1-9/arrows+Enter place  Tab history  r restart  q quit",
            Focus::History => "↑/↓ select  Enter jump  Tab board  r restart  q quit",
        }
    };
    let paragraph = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Centers a `width` x `height` rectangle inside `area`, clamped to fit.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
