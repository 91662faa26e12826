//! Win detection logic for tic-tac-toe.

use tracing::instrument;

use crate::outcome::Outcome;
use crate::{Board, Player, Position, Square};

/// Three positions that win when they hold the same mark.
pub type WinningLine = [Position; 3];

/// The eight winning lines, rows then columns then diagonals.
///
/// Detection scans them in this order and reports the first match.
pub const LINES: [WinningLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the player and the first line they complete, or `None`.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Evaluates a board: a win, a draw, or `None` while play can continue.
#[instrument(skip(board))]
pub fn detect(board: &Board) -> Option<Outcome> {
    if let Some((player, line)) = check_winner(board) {
        return Some(Outcome::Win { player, line });
    }
    if super::is_full(board) {
        return Some(Outcome::Draw);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: Board, moves: &[(Position, Player)]) -> Board {
        moves
            .iter()
            .fold(board, |b, (pos, player)| b.apply_move(*pos, *player).unwrap())
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
        assert_eq!(detect(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = place(
            Board::new(),
            &[
                (Position::TopLeft, Player::X),
                (Position::TopCenter, Player::X),
                (Position::TopRight, Player::X),
            ],
        );
        assert_eq!(
            detect(&board),
            Some(Outcome::Win {
                player: Player::X,
                line: LINES[0],
            })
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = place(
            Board::new(),
            &[
                (Position::TopRight, Player::O),
                (Position::Center, Player::O),
                (Position::BottomLeft, Player::O),
            ],
        );
        assert_eq!(check_winner(&board), Some((Player::O, LINES[7])));
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // X completes both the top row and the left column.
        let mut squares = [Square::Empty; 9];
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            squares[pos.to_index()] = Square::Occupied(Player::X);
        }
        let board = Board::from_squares(squares);
        assert_eq!(check_winner(&board), Some((Player::X, LINES[0])));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = place(
            Board::new(),
            &[
                (Position::TopLeft, Player::X),
                (Position::TopCenter, Player::X),
            ],
        );
        assert_eq!(detect(&board), None);
    }
}
