//! Move history list.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::App;
use crate::input::Focus;

/// Renders the history panel: the entry list, or a placeholder before the
/// first move.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::History;
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title("Game History")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let history = app.controller().history();
    if !history.has_entries() {
        let placeholder = Paragraph::new("Awaiting Moves")
            .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::SLOW_BLINK))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = history
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let marker = if i == history.cursor() { "▶ " } else { "  " };
            let detail = entry
                .last_move()
                .as_ref()
                .map(|mv| format!(" ({mv})"))
                .unwrap_or_default();
            let style = if i == history.cursor() {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(format!("{marker}{}{detail}", entry.label())).style(style)
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(if focused { Color::Blue } else { Color::Reset })
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    state.select(Some(app.history_selected()));
    frame.render_stateful_widget(list, area, &mut state);
}
