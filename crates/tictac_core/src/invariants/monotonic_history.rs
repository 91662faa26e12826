//! Monotonic history invariant: entry i holds exactly i marks.

use super::Invariant;
use crate::History;

/// Invariant: the board at entry `i` has exactly `i` occupied squares,
/// and its recorded move number is `i`.
pub struct MonotonicHistoryInvariant;

impl Invariant<History> for MonotonicHistoryInvariant {
    fn holds(history: &History) -> bool {
        history
            .entries()
            .iter()
            .enumerate()
            .all(|(i, entry)| *entry.move_number() == i && entry.board().filled() == i)
    }

    fn description() -> &'static str {
        "Entry i has exactly i occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, HistoryEntry, Move, Player, Position};

    #[test]
    fn test_skipped_entry_violates() {
        let mut history = History::new();
        let board = Board::new()
            .apply_move(Position::Center, Player::X)
            .unwrap();
        history.record_move(board, Move::new(Player::X, Position::Center));
        assert!(MonotonicHistoryInvariant::holds(&history));

        // Same board recorded again: entry 2 would only hold one mark.
        history.entries_mut().push(HistoryEntry::new(
            board,
            2,
            Some(Move::new(Player::O, Position::Center)),
        ));
        assert!(!MonotonicHistoryInvariant::holds(&history));
    }
}
