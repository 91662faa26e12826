//! Single-step invariant: each entry adds exactly one mark to its predecessor.

use super::Invariant;
use crate::{History, HistoryEntry, Square};

/// Invariant: entry `i` equals entry `i - 1` plus one mark, placed on a
/// previously empty square, at the position its recorded move names.
pub struct SingleStepInvariant;

impl SingleStepInvariant {
    fn step_ok(prev: &HistoryEntry, next: &HistoryEntry) -> bool {
        let Some(mv) = next.last_move() else {
            return false;
        };

        let changed: Vec<usize> = (0..9)
            .filter(|&i| prev.board().squares()[i] != next.board().squares()[i])
            .collect();

        changed == [mv.position.to_index()]
            && prev.board().get(mv.position) == Square::Empty
            && next.board().get(mv.position) == Square::Occupied(mv.player)
    }
}

impl Invariant<History> for SingleStepInvariant {
    fn holds(history: &History) -> bool {
        let entries = history.entries();
        entries
            .first()
            .is_some_and(|start| start.last_move().is_none())
            && entries.windows(2).all(|w| Self::step_ok(&w[0], &w[1]))
    }

    fn description() -> &'static str {
        "Each entry adds exactly one mark to an empty square of its predecessor"
    }
}
