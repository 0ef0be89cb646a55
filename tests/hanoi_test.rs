//! Tests for Towers of Hanoi legal-move checking

use rstest::rstest;

use dsalab::errors::LabError;
use dsalab::hanoi::{Hanoi, MAX_DISKS, MIN_DISKS};

/// 7-move optimal solution for 3 disks.
const OPTIMAL_3: [(usize, usize); 7] = [
    (0, 2),
    (0, 1),
    (2, 1),
    (0, 2),
    (1, 0),
    (1, 2),
    (0, 2),
];

#[rstest]
#[case(MIN_DISKS - 1)]
#[case(MAX_DISKS + 1)]
fn given_disk_count_outside_range_when_creating_then_rejected(#[case] disks: u8) {
    assert!(matches!(
        Hanoi::new(disks).unwrap_err(),
        LabError::InvalidDiskCount { .. }
    ));
}

#[test]
fn given_new_game_when_inspecting_then_all_disks_sit_on_first_peg() {
    let game = Hanoi::new(3).unwrap();

    assert_eq!(game.peg(0), [3, 2, 1]);
    assert!(game.peg(1).is_empty());
    assert!(game.peg(2).is_empty());
    assert_eq!(game.moves(), 0);
    assert_eq!(game.min_moves(), 7);
    assert!(!game.is_solved());
}

#[test]
fn given_legal_move_when_moving_then_top_disk_changes_peg() {
    let mut game = Hanoi::new(3).unwrap();

    assert_eq!(game.move_disk(0, 2).unwrap(), 1);
    assert_eq!(game.peg(0), [3, 2]);
    assert_eq!(game.peg(2), [1]);
    assert_eq!(game.moves(), 1);
}

#[test]
fn given_larger_disk_when_dropping_on_smaller_then_rejected() {
    let mut game = Hanoi::new(3).unwrap();
    game.move_disk(0, 2).unwrap();

    let err = game.move_disk(0, 2).unwrap_err();
    assert!(matches!(err, LabError::LargerOnSmaller { disk: 2, onto: 1 }));
    // A rejected move is not counted
    assert_eq!(game.moves(), 1);
}

#[test]
fn given_empty_source_peg_when_moving_then_rejected() {
    let mut game = Hanoi::new(3).unwrap();
    assert!(matches!(
        game.move_disk(1, 2).unwrap_err(),
        LabError::EmptyPeg(1)
    ));
}

#[test]
fn given_same_source_and_destination_when_moving_then_rejected() {
    let mut game = Hanoi::new(3).unwrap();
    assert!(matches!(game.move_disk(0, 0).unwrap_err(), LabError::SamePeg));
}

#[test]
fn given_peg_index_past_board_when_moving_then_rejected() {
    let mut game = Hanoi::new(3).unwrap();
    assert!(matches!(
        game.move_disk(0, 3).unwrap_err(),
        LabError::InvalidPeg(3)
    ));
}

#[test]
fn given_optimal_solution_when_replaying_then_solved_in_minimum_moves() {
    let mut game = Hanoi::new(3).unwrap();
    for (from, to) in OPTIMAL_3 {
        game.move_disk(from, to).unwrap();
    }

    assert!(game.is_solved());
    assert_eq!(game.moves(), game.min_moves());
    assert!(!game.exceeded_min());
}

#[test]
fn given_wasted_moves_when_solving_then_minimum_is_exceeded() {
    let mut game = Hanoi::new(3).unwrap();
    game.move_disk(0, 1).unwrap();
    game.move_disk(1, 0).unwrap();
    for (from, to) in OPTIMAL_3 {
        game.move_disk(from, to).unwrap();
    }

    assert!(game.is_solved());
    assert!(game.exceeded_min());
    assert_eq!(game.moves(), 9);
}

#[test]
fn given_played_game_when_resetting_then_initial_position_returns() {
    let mut game = Hanoi::new(4).unwrap();
    game.move_disk(0, 1).unwrap();
    game.reset();

    assert_eq!(game.peg(0), [4, 3, 2, 1]);
    assert_eq!(game.moves(), 0);
    assert_eq!(game.min_moves(), 15);
}
