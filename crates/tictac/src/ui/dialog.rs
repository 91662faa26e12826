//! End-of-game dialog drawn over the board.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tictac_core::Outcome;

use super::center_rect;
use crate::app::DialogButton;

/// Renders the dialog for `outcome` with `selected` highlighted.
pub fn draw(frame: &mut Frame, area: Rect, outcome: Outcome, selected: DialogButton) {
    let popup = center_rect(area, 36, 7);

    let (headline, color) = match outcome {
        Outcome::Win { player, .. } => (format!("Winner : {player}"), Color::Green),
        Outcome::Draw => ("It's a draw!".to_string(), Color::Magenta),
    };

    let button = |label: &'static str, which: DialogButton| {
        let style = if which == selected {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        Span::styled(format!("[ {label} ]"), style)
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            button("Close", DialogButton::Close),
            Span::raw("   "),
            button("Start Again", DialogButton::StartAgain),
        ]),
    ];

    let dialog = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .title("Game Over")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(dialog, popup);
}
