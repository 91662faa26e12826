//! Move history with time travel.
//!
//! The history is an ordered list of board snapshots, one per move, with a
//! cursor selecting the snapshot in play. Recording a move while the cursor
//! sits behind the tail discards the snapshots after it first.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::action::{JumpError, Move};
use crate::types::Board;

/// A board snapshot and the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Ordinal of the move; 0 is the empty starting board.
    move_number: usize,
    /// The move that led here, `None` for the starting board.
    last_move: Option<Move>,
}

impl HistoryEntry {
    /// The empty starting entry.
    pub fn start() -> Self {
        Self::new(Board::new(), 0, None)
    }

    /// Label used for this entry in history lists.
    pub fn label(&self) -> String {
        if self.move_number == 0 {
            "Start Again?".to_string()
        } else {
            format!("Go to move #{}", self.move_number)
        }
    }
}

/// What a [`History::jump_to`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jump {
    /// The cursor moved; entries are unchanged.
    Moved {
        /// Cursor before the jump.
        from: usize,
        /// Cursor after the jump.
        to: usize,
    },
    /// Jumping to the start cleared the history.
    Reset,
}

/// Ordered board snapshots plus the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    has_entries: bool,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::start()],
            cursor: 0,
            has_entries: false,
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Index of the entry in play.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of entries, including the starting board.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any move was recorded since the last reset.
    ///
    /// Drives the difference between an entry list and the
    /// "Awaiting Moves" placeholder.
    pub fn has_entries(&self) -> bool {
        self.has_entries
    }

    /// True when the cursor is on the newest entry.
    pub fn is_at_tail(&self) -> bool {
        self.cursor + 1 == self.entries.len()
    }

    /// The entry under the cursor.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    /// The board under the cursor.
    pub fn current_board(&self) -> &Board {
        &self.current_entry().board
    }

    /// Appends `board` as the successor of the entry under the cursor.
    ///
    /// Entries after the cursor are dropped before appending; the number of
    /// dropped entries is returned.
    #[instrument(skip(self, board), fields(cursor = self.cursor, len = self.entries.len()))]
    pub fn record_move(&mut self, board: Board, mv: Move) -> usize {
        let discarded = self.entries.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding entries after cursor");
            self.entries.truncate(self.cursor + 1);
        }

        let move_number = self.entries.len();
        self.entries
            .push(HistoryEntry::new(board, move_number, Some(mv)));
        self.cursor = move_number;
        self.has_entries = true;
        debug!(move_number, %mv, "Recorded move");
        discarded
    }

    /// Moves the cursor to `index`, treating the start entry as a restart.
    ///
    /// Jumping to entry 0 clears the history back to the empty board, the
    /// same as [`History::reset`]. Use [`History::view`] to look at the start
    /// without discarding anything.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if `index` is not an entry.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.entries.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<Jump, JumpError> {
        self.check_index(index)?;
        if index == 0 {
            self.reset();
            return Ok(Jump::Reset);
        }
        let from = self.cursor;
        self.cursor = index;
        Ok(Jump::Moved { from, to: index })
    }

    /// Moves the cursor to `index` without changing any entry.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if `index` is not an entry.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.entries.len()))]
    pub fn view(&mut self, index: usize) -> Result<(), JumpError> {
        self.check_index(index)?;
        self.cursor = index;
        Ok(())
    }

    /// Clears the history back to the empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(discarded = self.entries.len() - 1, "Resetting history");
        self.entries.clear();
        self.entries.push(HistoryEntry::start());
        self.cursor = 0;
        self.has_entries = false;
    }

    fn check_index(&self, index: usize) -> Result<(), JumpError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(JumpError::OutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }

    #[cfg(test)]
    pub(crate) fn entries_mut(&mut self) -> &mut Vec<HistoryEntry> {
        &mut self.entries
    }

    #[cfg(test)]
    pub(crate) fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn play(history: &mut History, pos: Position) {
        let player = if history.cursor() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        let board = history.current_board().apply_move(pos, player).unwrap();
        history.record_move(board, Move::new(player, pos));
    }

    #[test]
    fn test_new_history_has_start_entry() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert!(!history.has_entries());
        assert_eq!(history.current_board(), &Board::new());
        assert!(history.current_entry().last_move().is_none());
    }

    #[test]
    fn test_record_move_advances_cursor() {
        let mut history = History::new();
        play(&mut history, Position::Center);

        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), 1);
        assert!(history.has_entries());
        assert!(history.is_at_tail());
        assert_eq!(*history.current_entry().move_number(), 1);
    }

    #[test]
    fn test_record_after_view_truncates() {
        let mut history = History::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            play(&mut history, pos);
        }
        history.view(1).unwrap();
        assert!(!history.is_at_tail());

        let board = history
            .current_board()
            .apply_move(Position::BottomRight, Player::O)
            .unwrap();
        let discarded = history.record_move(board, Move::new(Player::O, Position::BottomRight));

        assert_eq!(discarded, 2);
        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
        assert!(history.current_board().is_empty(Position::Center));
    }

    #[test]
    fn test_jump_to_start_resets() {
        let mut history = History::new();
        play(&mut history, Position::Center);
        play(&mut history, Position::TopLeft);

        assert_eq!(history.jump_to(0), Ok(Jump::Reset));
        assert_eq!(history, History::new());
    }

    #[test]
    fn test_jump_to_middle_keeps_entries() {
        let mut history = History::new();
        play(&mut history, Position::Center);
        play(&mut history, Position::TopLeft);

        assert_eq!(history.jump_to(1), Ok(Jump::Moved { from: 2, to: 1 }));
        assert_eq!(history.len(), 3);
        assert!(history.has_entries());
    }

    #[test]
    fn test_view_start_keeps_entries() {
        let mut history = History::new();
        play(&mut history, Position::Center);

        history.view(0).unwrap();
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.len(), 2);
        assert!(history.has_entries());
    }

    #[test]
    fn test_out_of_range() {
        let mut history = History::new();
        assert_eq!(
            history.jump_to(1),
            Err(JumpError::OutOfRange { index: 1, len: 1 })
        );
        assert!(history.view(3).is_err());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut history = History::new();
        play(&mut history, Position::Center);

        history.reset();
        let once = history.clone();
        history.reset();
        assert_eq!(history, once);
    }

    #[test]
    fn test_entry_labels() {
        let mut history = History::new();
        play(&mut history, Position::Center);
        let labels: Vec<_> = history.entries().iter().map(|e| e.label()).collect();
        assert_eq!(labels, ["Start Again?", "Go to move #1"]);
    }
}
