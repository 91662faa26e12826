//! Pure tic-tac-toe game logic with a time-travel move history.
//!
//! # Architecture
//!
//! - **Rules**: [`rules::detect`] maps a board to a win, a draw, or nothing
//! - **Board**: immutable snapshots; [`Board::apply_move`] returns a new one
//! - **History**: snapshots plus a cursor, truncated when play resumes from
//!   the past
//! - **Controller**: turn order, end-of-game dialog, observer notifications
//!
//! # Example
//!
//! ```
//! use tictac_core::{GameController, GameStatus, Position};
//!
//! let mut game = GameController::new();
//! game.apply_move(Position::Center)?;
//! game.apply_move(Position::TopLeft)?;
//! game.jump_to(1)?;
//! game.apply_move(Position::BottomRight)?;
//!
//! assert_eq!(game.history().len(), 3);
//! assert!(matches!(game.status(), GameStatus::Ongoing { .. }));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod controller;
mod history;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use action::{JumpError, Move, MoveError};
pub use controller::{
    Dialog, GameController, GameEvent, GameObserver, MoveApplied, StartEntryPolicy,
    SubscriptionId,
};
pub use history::{History, HistoryEntry, Jump};
pub use outcome::{GamePhase, GameStatus, Outcome};
pub use position::Position;
pub use rules::WinningLine;
pub use types::{Board, Player, Square};

/// Alias matching the cell-value vocabulary: the mark a player leaves.
pub type Mark = Player;
