//! End-to-end game scenarios driven through the controller.

use std::cell::RefCell;
use std::rc::Rc;

use tictac_core::rules::{self, LINES};
use tictac_core::{
    Dialog, GameController, GameEvent, GamePhase, GameStatus, MoveError, Outcome, Player,
    Position,
};

fn play(controller: &mut GameController, cells: &[usize]) {
    for &cell in cells {
        controller.apply_move_at(cell).expect("legal move");
    }
}

fn ended_events(controller: &mut GameController) -> Rc<RefCell<Vec<Outcome>>> {
    let ended = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&ended);
    controller.subscribe(move |event: &GameEvent| {
        if let GameEvent::GameEnded(outcome) = event {
            sink.borrow_mut().push(*outcome);
        }
    });
    ended
}

#[test]
fn test_x_wins_top_row() {
    let mut controller = GameController::new();
    play(&mut controller, &[0, 4, 1, 8, 2]);

    assert_eq!(
        rules::detect(controller.board()),
        Some(Outcome::Win {
            player: Player::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        })
    );
    assert_eq!(controller.phase(), GamePhase::Won);
    assert_eq!(controller.status().to_string(), "Winner : X");
}

#[test]
fn test_full_board_draw_never_false_win() {
    let mut controller = GameController::new();
    // Ends as X O O / O X X / X X O.
    let cells = [0, 1, 4, 2, 5, 3, 6, 8, 7];
    for (n, &cell) in cells.iter().enumerate() {
        controller.apply_move_at(cell).expect("legal move");
        if n < 8 {
            assert_eq!(rules::detect(controller.board()), None, "after move {}", n + 1);
        }
    }

    assert_eq!(rules::detect(controller.board()), Some(Outcome::Draw));
    assert_eq!(controller.status(), GameStatus::Drawn);
}

#[test]
fn test_jump_back_and_branch_truncates() {
    let mut controller = GameController::new();
    play(&mut controller, &[0, 4, 8]);
    assert_eq!(controller.history().len(), 4);

    controller.jump_to(1).unwrap();
    assert_eq!(controller.to_move(), Player::O);
    controller.apply_move(Position::TopRight).unwrap();

    let history = controller.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history.cursor(), 2);
    assert!(history.current_board().is_empty(Position::Center));
    assert!(history.current_board().is_empty(Position::BottomRight));
}

#[test]
fn test_moves_after_end_are_rejected() {
    let mut controller = GameController::new();
    play(&mut controller, &[0, 4, 1, 8, 2]);

    assert_eq!(controller.apply_move_at(5), Err(MoveError::GameOver));
    assert_eq!(controller.history().len(), 6);
}

#[test]
fn test_game_ended_fires_once() {
    let mut controller = GameController::new();
    let ended = ended_events(&mut controller);
    play(&mut controller, &[0, 4, 1, 8, 2]);

    // Further input while won, and re-reading state, never re-fire.
    let _ = controller.apply_move_at(5);
    let _ = controller.status();
    controller.dismiss_dialog();
    controller.jump_to(5).unwrap();

    assert_eq!(ended.borrow().len(), 1);
    assert_eq!(ended.borrow()[0].winner(), Some(Player::X));
}

#[test]
fn test_branching_to_a_new_finish_ends_again() {
    let mut controller = GameController::new();
    let ended = ended_events(&mut controller);
    play(&mut controller, &[0, 4, 1, 8, 2]);

    controller.jump_to(4).expect("entry exists");
    assert_eq!(controller.phase(), GamePhase::InProgress);
    assert_eq!(ended.borrow().len(), 1);

    play(&mut controller, &[6, 2, 3]);
    let ended = ended.borrow();
    assert_eq!(ended.len(), 2);
    assert_eq!(
        ended[1],
        Outcome::Win {
            player: Player::X,
            line: [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
        }
    );
}

#[test]
fn test_dismiss_keeps_outcome() {
    let mut controller = GameController::new();
    play(&mut controller, &[0, 4, 1, 8, 2]);
    assert!(controller.dialog().is_open());

    assert!(controller.dismiss_dialog());
    assert_eq!(controller.dialog(), Dialog::Closed);
    assert_eq!(controller.phase(), GamePhase::Won);
}

#[test]
fn test_restart_clears_dialog_and_history() {
    let mut controller = GameController::new();
    let ended = ended_events(&mut controller);
    play(&mut controller, &[0, 4, 1, 8, 2]);

    controller.restart();
    assert_eq!(controller.dialog(), Dialog::Closed);
    assert_eq!(controller.history().len(), 1);
    assert!(!controller.history().has_entries());
    assert_eq!(controller.phase(), GamePhase::InProgress);

    play(&mut controller, &[3, 0, 4, 1, 5]);
    assert_eq!(ended.borrow().len(), 2);
    assert_eq!(
        ended.borrow()[1],
        Outcome::Win {
            player: Player::X,
            line: LINES[1],
        }
    );
}

#[test]
fn test_jump_to_start_resets_under_default_policy() {
    let mut controller = GameController::new();
    play(&mut controller, &[0, 4, 1]);

    controller.jump_to(0).unwrap();
    assert_eq!(controller.history().len(), 1);
    assert!(!controller.history().has_entries());
}

#[test]
fn test_jump_closes_dialog() {
    let mut controller = GameController::new();
    play(&mut controller, &[0, 4, 1, 8, 2]);

    controller.jump_to(3).unwrap();
    assert_eq!(controller.dialog(), Dialog::Closed);
    assert_eq!(controller.phase(), GamePhase::InProgress);
}

#[test]
fn test_out_of_range_jump_is_an_error() {
    let mut controller = GameController::new();
    assert!(controller.jump_to(1).is_err());
    assert!(controller.view(1).is_err());
    assert_eq!(controller.apply_move_at(9), Err(MoveError::OutOfBounds(9)));
}
