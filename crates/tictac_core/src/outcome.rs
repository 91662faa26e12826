//! Outcomes, statuses and phases derived from a board.

use serde::{Deserialize, Serialize};

use crate::Player;
use crate::rules::WinningLine;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Win {
        /// The winning player.
        player: Player,
        /// The line they completed.
        line: WinningLine,
    },
    /// All nine squares filled without a line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<WinningLine> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win { player, .. } => write!(f, "Player {player} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Status of the board under the cursor, as shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Play continues; `next` places the next mark.
    Ongoing {
        /// Player to move.
        next: Player,
    },
    /// A player completed a line.
    Won {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// The board filled without a line.
    Drawn,
}

impl GameStatus {
    /// The phase this status belongs to.
    pub fn phase(&self) -> GamePhase {
        match self {
            GameStatus::Ongoing { .. } => GamePhase::InProgress,
            GameStatus::Won { .. } => GamePhase::Won,
            GameStatus::Drawn => GamePhase::Drawn,
        }
    }

    /// The outcome, if the status is terminal.
    pub fn outcome(&self) -> Option<Outcome> {
        match *self {
            GameStatus::Ongoing { .. } => None,
            GameStatus::Won { player, line } => Some(Outcome::Win { player, line }),
            GameStatus::Drawn => Some(Outcome::Draw),
        }
    }

    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        self.phase() != GamePhase::InProgress
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Ongoing { next } => write!(f, "Next Player: {next}"),
            GameStatus::Won { player, .. } => write!(f, "Winner : {player}"),
            GameStatus::Drawn => write!(f, "Draw"),
        }
    }
}

/// Coarse state of a game, with no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GamePhase {
    /// Moves are accepted.
    InProgress,
    /// Ended with a winner.
    Won,
    /// Ended in a draw.
    Drawn,
}
