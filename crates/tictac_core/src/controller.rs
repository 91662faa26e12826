//! Game controller: turns, terminal detection and change notification.
//!
//! The controller is the single owner of the game. Front ends send it
//! requests (place a mark, jump, close the dialog, restart) and learn about
//! the results through [`GameObserver`] subscriptions, which are called
//! synchronously before each request returns.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::action::{JumpError, Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::history::{History, Jump};
use crate::outcome::{GamePhase, GameStatus, Outcome};
use crate::{Board, Player, Position, rules};

/// What selecting the start entry of the history does.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StartEntryPolicy {
    /// Clear the whole history, as "Start Again?" suggests.
    #[default]
    #[display("reset")]
    Reset,
    /// Show the empty board and keep later entries navigable.
    #[display("view")]
    View,
}

/// State of the end-of-game dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// Nothing to show.
    Closed,
    /// A move just ended the game.
    Open(Outcome),
}

impl Dialog {
    /// True while the dialog is showing.
    pub fn is_open(&self) -> bool {
        matches!(self, Dialog::Open(_))
    }
}

/// Notifications delivered to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed.
    MoveMade {
        /// The move.
        mv: Move,
        /// History index of the new entry.
        move_number: usize,
        /// Entries dropped because the move was made from the past.
        discarded: usize,
    },
    /// The cursor moved without changing entries.
    Jumped {
        /// Cursor before.
        from: usize,
        /// Cursor after.
        to: usize,
    },
    /// The history was cleared back to the empty board.
    Reset,
    /// A move ended the game. Sent once per ending move.
    GameEnded(Outcome),
    /// The end-of-game dialog was closed without restarting.
    DialogDismissed,
    /// Sent last after every change; observers re-derive their view here.
    StateChanged {
        /// Cursor after the change.
        cursor: usize,
        /// History length after the change.
        len: usize,
    },
}

/// Receives [`GameEvent`]s from a [`GameController`].
pub trait GameObserver {
    /// Called synchronously for every event.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Handle returned by [`GameController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveApplied {
    /// The move that was made.
    pub mv: Move,
    /// History index of the new entry.
    pub move_number: usize,
    /// Entries dropped because the move was made from the past.
    pub discarded: usize,
    /// Status after the move.
    pub status: GameStatus,
}

/// Drives a single game of tic-tac-toe with time travel.
pub struct GameController {
    history: History,
    policy: StartEntryPolicy,
    dialog: Dialog,
    observers: Vec<(SubscriptionId, Box<dyn GameObserver>)>,
    next_subscription: u64,
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("history", &self.history)
            .field("policy", &self.policy)
            .field("dialog", &self.dialog)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GameController {
    /// Creates a controller with an empty board and the default policy.
    pub fn new() -> Self {
        Self::with_policy(StartEntryPolicy::default())
    }

    /// Creates a controller with an explicit start-entry policy.
    #[instrument]
    pub fn with_policy(policy: StartEntryPolicy) -> Self {
        Self {
            history: History::new(),
            policy,
            dialog: Dialog::Closed,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────

    /// The mark placed from history index `cursor`: X on even, O on odd.
    pub fn turn_mark(cursor: usize) -> Player {
        if cursor % 2 == 0 { Player::X } else { Player::O }
    }

    /// Derives the status of `board` reached after `cursor` moves.
    pub fn status_of(board: &Board, cursor: usize) -> GameStatus {
        match rules::detect(board) {
            Some(Outcome::Win { player, line }) => GameStatus::Won { player, line },
            Some(Outcome::Draw) => GameStatus::Drawn,
            None => GameStatus::Ongoing {
                next: Self::turn_mark(cursor),
            },
        }
    }

    /// Status of the board under the cursor.
    pub fn status(&self) -> GameStatus {
        Self::status_of(self.history.current_board(), self.history.cursor())
    }

    /// Phase of the board under the cursor.
    pub fn phase(&self) -> GamePhase {
        self.status().phase()
    }

    /// Player who places the next mark.
    pub fn to_move(&self) -> Player {
        Self::turn_mark(self.history.cursor())
    }

    /// The board under the cursor.
    pub fn board(&self) -> &Board {
        self.history.current_board()
    }

    /// The move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The end-of-game dialog state.
    pub fn dialog(&self) -> Dialog {
        self.dialog
    }

    /// The configured start-entry policy.
    pub fn policy(&self) -> StartEntryPolicy {
        self.policy
    }

    /// Empty squares of the board under the cursor, if the game is still on.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(self.board())
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Observers
    // ─────────────────────────────────────────────────────────

    /// Registers an observer; it receives every later event.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        debug!(?id, "Observer subscribed");
        id
    }

    /// Removes an observer. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        before != self.observers.len()
    }

    fn emit(&mut self, event: GameEvent) {
        for (_, observer) in &mut self.observers {
            observer.on_event(&event);
        }
    }

    fn emit_state_changed(&mut self) {
        let event = GameEvent::StateChanged {
            cursor: self.history.cursor(),
            len: self.history.len(),
        };
        self.emit(event);
    }

    // ─────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────

    /// Places the next mark at `position` on the board under the cursor.
    ///
    /// Moving from an earlier entry discards the entries after it. A move
    /// that ends the game opens the dialog and sends
    /// [`GameEvent::GameEnded`].
    ///
    /// # Errors
    ///
    /// [`MoveError::SquareOccupied`] or [`MoveError::GameOver`] when the
    /// move is rejected; the game is unchanged.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn apply_move(&mut self, position: Position) -> Result<MoveApplied, MoveError> {
        let player = self.to_move();
        let action = Move::new(player, position);
        if let Err(error) = MoveContract::pre(&self.history, &action) {
            debug!(%error, "Move rejected");
            return Err(error);
        }

        let next = self.history.current_board().apply_move(position, player)?;

        #[cfg(debug_assertions)]
        let before = self.history.clone();

        let discarded = self.history.record_move(next, action);

        #[cfg(debug_assertions)]
        if let Err(error) = MoveContract::post(&before, &self.history) {
            self.history = before;
            return Err(error);
        }

        let move_number = self.history.cursor();
        self.emit(GameEvent::MoveMade {
            mv: action,
            move_number,
            discarded,
        });

        let status = self.status();
        if let Some(outcome) = status.outcome() {
            info!(%outcome, move_number, "Game ended");
            self.dialog = Dialog::Open(outcome);
            self.emit(GameEvent::GameEnded(outcome));
        }
        self.emit_state_changed();

        Ok(MoveApplied {
            mv: action,
            move_number,
            discarded,
            status,
        })
    }

    /// Like [`GameController::apply_move`], from a raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for an index past 8, otherwise as
    /// [`GameController::apply_move`].
    pub fn apply_move_at(&mut self, index: usize) -> Result<MoveApplied, MoveError> {
        let position = Position::try_from_index(index)?;
        self.apply_move(position)
    }

    /// Selects history entry `index` according to the start-entry policy.
    ///
    /// With [`StartEntryPolicy::Reset`], entry 0 restarts the game. Any other
    /// jump only moves the cursor. The dialog closes either way.
    ///
    /// # Errors
    ///
    /// [`JumpError::OutOfRange`] if `index` is not an entry.
    #[instrument(skip(self), fields(policy = %self.policy))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), JumpError> {
        match self.policy {
            StartEntryPolicy::View => self.view(index),
            StartEntryPolicy::Reset => {
                match self.history.jump_to(index)? {
                    Jump::Reset => {
                        info!("Start entry selected, game reset");
                        self.dialog = Dialog::Closed;
                        self.emit(GameEvent::Reset);
                    }
                    Jump::Moved { from, to } => {
                        self.dialog = Dialog::Closed;
                        self.emit(GameEvent::Jumped { from, to });
                    }
                }
                self.emit_state_changed();
                Ok(())
            }
        }
    }

    /// Moves the cursor to entry `index` and keeps every entry.
    ///
    /// # Errors
    ///
    /// [`JumpError::OutOfRange`] if `index` is not an entry.
    #[instrument(skip(self))]
    pub fn view(&mut self, index: usize) -> Result<(), JumpError> {
        let from = self.history.cursor();
        self.history.view(index)?;
        self.dialog = Dialog::Closed;
        self.emit(GameEvent::Jumped { from, to: index });
        self.emit_state_changed();
        Ok(())
    }

    /// Closes the end-of-game dialog without touching the game.
    ///
    /// Returns false when no dialog was open.
    #[instrument(skip(self))]
    pub fn dismiss_dialog(&mut self) -> bool {
        if !self.dialog.is_open() {
            return false;
        }
        self.dialog = Dialog::Closed;
        self.emit(GameEvent::DialogDismissed);
        self.emit_state_changed();
        true
    }

    /// Clears the history and the dialog.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.history.reset();
        self.dialog = Dialog::Closed;
        self.emit(GameEvent::Reset);
        self.emit_state_changed();
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
