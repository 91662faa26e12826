//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{History, Player};

/// Invariant: the mark placed by move `n` is X when `n` is odd, O when even.
///
/// Move 1 is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        history.entries().iter().skip(1).all(|entry| {
            let expected = if entry.move_number() % 2 == 1 {
                Player::X
            } else {
                Player::O
            };
            entry.last_move().is_some_and(|mv| mv.player == expected)
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Move, Position};

    #[test]
    fn test_same_player_twice_violates() {
        let mut history = History::new();
        let first = Board::new()
            .apply_move(Position::TopLeft, Player::X)
            .unwrap();
        history.record_move(first, Move::new(Player::X, Position::TopLeft));
        let second = first.apply_move(Position::Center, Player::X).unwrap();
        history.record_move(second, Move::new(Player::X, Position::Center));

        assert!(!AlternatingTurnInvariant::holds(&history));
    }
}
