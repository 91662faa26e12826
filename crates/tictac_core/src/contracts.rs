//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use tracing::{instrument, warn};

use crate::action::{Move, MoveError};
use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::{History, rules};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the board under the cursor has no outcome yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] on a won or drawn board.
    #[instrument(skip(history))]
    pub fn check(history: &History) -> Result<(), MoveError> {
        match rules::detect(history.current_board()) {
            Some(_) => Err(MoveError::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] when the square is taken.
    #[instrument(skip(history))]
    pub fn check(mov: &Move, history: &History) -> Result<(), MoveError> {
        if history.current_board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions against the history.
///
/// Preconditions:
/// - Game under the cursor is not over
/// - Square must be empty
///
/// Postconditions:
/// - Every history invariant holds
pub struct MoveContract;

impl Contract<History, Move> for MoveContract {
    fn pre(history: &History, action: &Move) -> Result<(), MoveError> {
        GameNotOver::check(history)?;
        SquareIsEmpty::check(action, history)
    }

    fn post(_before: &History, after: &History) -> Result<(), MoveError> {
        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "History postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {descriptions}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player, Position, Square};

    fn with_center_x() -> History {
        let mut history = History::new();
        let board = Board::new()
            .apply_move(Position::Center, Player::X)
            .unwrap();
        history.record_move(board, Move::new(Player::X, Position::Center));
        history
    }

    #[test]
    fn test_precondition_empty_square() {
        let history = History::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&history, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let history = with_center_x();
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&history, &action),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let mut history = History::new();
        let mut squares = [Square::Empty; 9];
        for i in [0, 4, 8] {
            squares[i] = Square::Occupied(Player::X);
        }
        history.entries_mut()[0] = crate::HistoryEntry::new(Board::from_squares(squares), 0, None);

        let action = Move::new(Player::O, Position::TopRight);
        assert_eq!(MoveContract::pre(&history, &action), Err(MoveError::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = History::new();
        let after = with_center_x();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = History::new();
        let mut after = with_center_x();
        after.entries_mut().truncate(0);

        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
