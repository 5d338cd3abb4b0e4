//! Tests for the match state machine across rounds.

use std::num::NonZeroU32;
use tictactoe_core::{
    BoardError, Coord, Line, MatchConfig, MatchController, MoveResult, Rejection, RoundOutcome,
    Seat, StartPolicy,
};

fn play(game: &mut MatchController, moves: &[(usize, usize)]) -> Vec<MoveResult> {
    moves
        .iter()
        .map(|&(x, y)| game.apply_move(Coord::new(x, y)).expect("in range"))
        .collect()
}

#[test]
fn test_seat_one_wins_first_column() {
    let mut game = MatchController::new(MatchConfig::new()).expect("valid config");

    // P1 at (0,0),(0,1),(0,2) interleaved with P2 at (1,0),(1,1)
    let results = play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    assert!(results.iter().all(MoveResult::is_placed));
    assert_eq!(
        *game.outcome(),
        RoundOutcome::Won {
            winner: Seat::One,
            line: Line::Column(0)
        }
    );
    assert_eq!(game.player(Seat::One).score(), 1);
    assert_eq!(game.player(Seat::Two).score(), 0);

    // Further moves are no-ops.
    let before = game.snapshot();
    let result = game.apply_move(Coord::new(2, 2)).expect("in range");
    assert_eq!(result, MoveResult::Ignored(Rejection::RoundOver));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_out_of_range_move_is_an_error() {
    let mut game = MatchController::new(MatchConfig::new()).expect("valid config");

    let result = game.apply_move(Coord::new(5, 5));

    assert_eq!(
        result,
        Err(BoardError::OutOfRange {
            coord: Coord::new(5, 5),
            size: 3
        })
    );
    assert!(game.board().is_empty());
    assert_eq!(game.active(), Seat::One);
}

#[test]
fn test_full_board_without_winner_is_draw() {
    let mut game = MatchController::new(MatchConfig::new()).expect("valid config");

    // 1 2 1
    // 1 2 2
    // 2 1 1
    let results = play(
        &mut game,
        &[(0, 0), (1, 0), (2, 0), (1, 1), (0, 1), (2, 1), (1, 2), (0, 2), (2, 2)],
    );

    assert_eq!(results.last(), Some(&MoveResult::Placed(RoundOutcome::Draw)));
    assert!(game.board().is_full());
    assert_eq!(*game.outcome(), RoundOutcome::Draw);
    assert!(!game.is_accepting_moves());
    assert_eq!(game.player(Seat::One).score(), 0);
    assert_eq!(game.player(Seat::Two).score(), 0);
}

#[test]
fn test_retry_clears_board_and_keeps_scores() {
    let mut game = MatchController::new(MatchConfig::new()).expect("valid config");
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    assert!(game.retry());

    assert!(game.board().is_empty());
    assert_eq!(*game.outcome(), RoundOutcome::InProgress);
    assert!(game.is_accepting_moves());
    assert_eq!(game.player(Seat::One).score(), 1);
    assert_eq!(game.player(Seat::Two).score(), 0);
    assert_eq!(game.round(), 2);
    // Carry policy: the winner was active when the round ended.
    assert_eq!(game.active(), Seat::One);

    // A second retry before the round ends does nothing.
    assert!(!game.retry());
    assert_eq!(game.round(), 2);
}

const DRAW_MOVES: [(usize, usize); 9] = [
    (0, 0),
    (1, 0),
    (2, 0),
    (1, 1),
    (0, 1),
    (2, 1),
    (1, 2),
    (0, 2),
    (2, 2),
];

#[test]
fn test_retry_after_draw_keeps_scores_and_carries_last_mover() {
    let config = MatchConfig::new().with_first_seat(Seat::Two);
    let mut game = MatchController::new(config).expect("valid config");

    // Seat two takes column 0, then opens again under the carry policy.
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(game.player(Seat::Two).score(), 1);
    assert!(game.retry());
    assert_eq!(game.active(), Seat::Two);

    // Nine moves opened by seat two: seat two also makes the last one.
    let results = play(&mut game, &DRAW_MOVES);
    assert_eq!(results.last(), Some(&MoveResult::Placed(RoundOutcome::Draw)));
    assert_eq!(game.active(), Seat::Two);

    assert!(game.retry());

    assert!(game.board().is_empty());
    assert_eq!(*game.outcome(), RoundOutcome::InProgress);
    assert!(game.is_accepting_moves());
    assert_eq!(game.player(Seat::One).score(), 0);
    assert_eq!(game.player(Seat::Two).score(), 1);
    assert_eq!(game.round(), 3);
    assert_eq!(game.active(), Seat::Two);
}

#[test]
fn test_retry_after_draw_alternates_opener() {
    let config = MatchConfig::new().with_start_policy(StartPolicy::Alternate);
    let mut game = MatchController::new(config).expect("valid config");

    play(&mut game, &DRAW_MOVES);
    assert_eq!(*game.outcome(), RoundOutcome::Draw);
    assert!(game.retry());

    assert!(game.board().is_empty());
    assert_eq!(game.player(Seat::One).score(), 0);
    assert_eq!(game.player(Seat::Two).score(), 0);
    assert_eq!(game.active(), Seat::Two);
}

#[test]
fn test_scores_accumulate_and_wrap() {
    let config = MatchConfig::new()
        .with_board_size(1)
        .with_start_policy(tictactoe_core::StartPolicy::SeatOne);
    let mut game = MatchController::new(config).expect("valid config");

    for expected in 1..=98 {
        play(&mut game, &[(0, 0)]);
        assert_eq!(game.player(Seat::One).score(), expected);
        assert!(game.retry());
    }

    // 99th win wraps to zero.
    play(&mut game, &[(0, 0)]);
    assert_eq!(game.player(Seat::One).score(), 0);
    assert_eq!(game.round(), 99);
}

#[test]
fn test_custom_ceiling_and_names() {
    let config = MatchConfig::new()
        .with_board_size(1)
        .with_score_ceiling(NonZeroU32::new(2).expect("non-zero"))
        .with_name(Seat::One, "Ada")
        .with_name(Seat::Two, "Grace")
        .with_first_seat(Seat::Two);
    let mut game = MatchController::new(config).expect("valid config");

    assert_eq!(game.active_player().name(), "Grace");
    play(&mut game, &[(0, 0)]);
    assert_eq!(game.player(Seat::Two).score(), 1);
    game.retry();
    play(&mut game, &[(0, 0)]);
    assert_eq!(game.player(Seat::Two).score(), 0);
}

#[test]
fn test_zero_size_config_is_rejected() {
    let err = MatchController::new(MatchConfig::new().with_board_size(0)).unwrap_err();
    assert!(err.to_string().contains("Board size"));
}

#[test]
fn test_larger_board_needs_full_line() {
    let mut game =
        MatchController::new(MatchConfig::new().with_board_size(4)).expect("valid config");

    // Seat one takes three of four cells in row 0 -- not enough.
    play(&mut game, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
    assert_eq!(*game.outcome(), RoundOutcome::InProgress);

    play(&mut game, &[(3, 0)]);
    assert_eq!(
        *game.outcome(),
        RoundOutcome::Won {
            winner: Seat::One,
            line: Line::Row(0)
        }
    );
}

#[test]
fn test_snapshot_serializes() {
    let mut game = MatchController::new(MatchConfig::new()).expect("valid config");
    play(&mut game, &[(1, 1)]);

    let json = serde_json::to_value(game.snapshot()).expect("serializable");

    assert_eq!(json["size"], 3);
    assert_eq!(json["active"], "Two");
    assert_eq!(json["cells"][4]["mark"], "Cross");
    assert_eq!(json["players"][0]["name"], "P1");
    assert_eq!(json["outcome"], "InProgress");
}
