//! Key bindings: translating key events into app commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictac_core::Position;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move history list.
    History,
}

impl Focus {
    /// The other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Arrow direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Row above.
    Up,
    /// Row below.
    Down,
    /// Column to the left.
    Left,
    /// Column to the right.
    Right,
}

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the application.
    Quit,
    /// Clear the game.
    Restart,
    /// Close the end-of-game dialog.
    CloseDialog,
    /// Switch the selected dialog button.
    ToggleDialogButton,
    /// Press the selected dialog button.
    ConfirmDialog,
    /// Place a mark on a specific cell.
    PlaceAt(Position),
    /// Place a mark on the selected cell.
    PlaceSelected,
    /// Move the cell selection.
    MoveSelection(Direction),
    /// Switch between board and history.
    ToggleFocus,
    /// Select the previous history entry.
    HistoryUp,
    /// Select the next history entry.
    HistoryDown,
    /// Jump to the selected history entry.
    JumpSelected,
}

/// Moves the grid selection one step, stopping at the edges.
pub fn move_selection(selected: Position, direction: Direction) -> Position {
    let (row, col) = (selected.row(), selected.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(selected)
}

/// Maps a key to a command, given what is on screen.
///
/// While the dialog is open it captures every key except quit and restart.
pub fn command_for(key: KeyEvent, dialog_open: bool, focus: Focus) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return Some(Command::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => return Some(Command::Restart),
        _ => {}
    }

    if dialog_open {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::CloseDialog),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                Some(Command::ToggleDialogButton)
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::ConfirmDialog),
            _ => None,
        };
    }

    match (focus, key.code) {
        (_, KeyCode::Tab | KeyCode::BackTab) => Some(Command::ToggleFocus),
        (_, KeyCode::Char(c @ '1'..='9')) => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Command::PlaceAt),

        (Focus::Board, KeyCode::Up | KeyCode::Char('k')) => {
            Some(Command::MoveSelection(Direction::Up))
        }
        (Focus::Board, KeyCode::Down | KeyCode::Char('j')) => {
            Some(Command::MoveSelection(Direction::Down))
        }
        (Focus::Board, KeyCode::Left | KeyCode::Char('h')) => {
            Some(Command::MoveSelection(Direction::Left))
        }
        (Focus::Board, KeyCode::Right | KeyCode::Char('l')) => {
            Some(Command::MoveSelection(Direction::Right))
        }
        (Focus::Board, KeyCode::Enter | KeyCode::Char(' ')) => Some(Command::PlaceSelected),

        (Focus::History, KeyCode::Up | KeyCode::Char('k')) => Some(Command::HistoryUp),
        (Focus::History, KeyCode::Down | KeyCode::Char('j')) => Some(Command::HistoryDown),
        (Focus::History, KeyCode::Enter | KeyCode::Char(' ')) => Some(Command::JumpSelected),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_selection_stops_at_edges() {
        assert_eq!(move_selection(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_selection(Position::TopLeft, Direction::Right), Position::TopCenter);
        assert_eq!(move_selection(Position::Center, Direction::Down), Position::BottomCenter);
        assert_eq!(
            move_selection(Position::BottomRight, Direction::Right),
            Position::BottomRight
        );
    }

    #[test]
    fn test_digits_place() {
        assert_eq!(
            command_for(key(KeyCode::Char('1')), false, Focus::Board),
            Some(Command::PlaceAt(Position::TopLeft))
        );
        assert_eq!(
            command_for(key(KeyCode::Char('9')), false, Focus::History),
            Some(Command::PlaceAt(Position::BottomRight))
        );
        assert_eq!(command_for(key(KeyCode::Char('0')), false, Focus::Board), None);
    }

    #[test]
    fn test_dialog_captures_keys() {
        assert_eq!(command_for(key(KeyCode::Char('5')), true, Focus::Board), None);
        assert_eq!(
            command_for(key(KeyCode::Esc), true, Focus::Board),
            Some(Command::CloseDialog)
        );
        assert_eq!(
            command_for(key(KeyCode::Char('r')), true, Focus::Board),
            Some(Command::Restart)
        );
    }

    #[test]
    fn test_arrows_follow_focus() {
        assert_eq!(
            command_for(key(KeyCode::Up), false, Focus::History),
            Some(Command::HistoryUp)
        );
        assert_eq!(
            command_for(key(KeyCode::Up), false, Focus::Board),
            Some(Command::MoveSelection(Direction::Up))
        );
    }
}
