//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tictac_core::{Board, Player, Position, Square};

use super::center_rect;
use crate::app::App;
use crate::input::Focus;

const CELL_WIDTH: u16 = 12;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = 3 * 3 + 2;

/// Renders the board under the history cursor.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let board = app.controller().board();
    let winning = app.controller().status().outcome().and_then(|o| o.line());
    let selected = (app.focus() == Focus::Board).then_some(app.selected());
    let open = app.controller().valid_moves();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], board, &open, row, selected, winning);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    open: &[Position],
    row: usize,
    selected: Option<Position>,
    winning: Option<[Position; 3]>,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            let on_line = winning.is_some_and(|line| line.contains(&pos));
            let cell = Cell {
                pos,
                open: open.contains(&pos),
                selected: selected == Some(pos),
                on_line,
            };
            draw_cell(frame, cols[col * 2], board, cell);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

/// How one cell is drawn.
#[derive(Debug, Clone, Copy)]
struct Cell {
    pos: Position,
    /// Still playable; shows its key.
    open: bool,
    selected: bool,
    on_line: bool,
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cell: Cell) {
    let Cell {
        pos,
        open,
        selected,
        on_line,
    } = cell;
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty if open => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (
            String::new(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if selected {
        base_style.bg(Color::White).fg(Color::Black)
    } else if on_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else {
        base_style
    };

    let text = vec![
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
        Line::from(Span::styled(format!("{symbol:^width$}", width = area.width as usize), style)),
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
