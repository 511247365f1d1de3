//! Tests for the direction validator.

use snake_pilot::{Direction, is_valid_move, legal_directions};

const ALL: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

#[test]
fn test_first_move_always_valid() {
    for direction in ALL {
        assert!(
            is_valid_move(direction, None),
            "{} should be valid as the first move",
            direction
        );
    }
}

#[test]
fn test_opposite_is_rejected() {
    for direction in ALL {
        assert!(
            !is_valid_move(direction.opposite(), Some(direction)),
            "{} should be rejected after {}",
            direction.opposite(),
            direction
        );
    }
}

#[test]
fn test_repeating_same_direction_is_valid() {
    for direction in ALL {
        assert!(
            is_valid_move(direction, Some(direction)),
            "repeating {} should be allowed",
            direction
        );
    }
}

#[test]
fn test_opposite_is_an_involution() {
    for direction in ALL {
        assert_eq!(direction.opposite().opposite(), direction);
    }
}

#[test]
fn test_opposites_form_two_disjoint_pairs() {
    assert_eq!(Direction::Up.opposite(), Direction::Down);
    assert_eq!(Direction::Down.opposite(), Direction::Up);
    assert_eq!(Direction::Left.opposite(), Direction::Right);
    assert_eq!(Direction::Right.opposite(), Direction::Left);
}

#[test]
fn test_legal_directions_with_no_history() {
    let legal = legal_directions(None);
    assert_eq!(legal.len(), 4, "all four directions legal at session start");
}

#[test]
fn test_legal_directions_excludes_only_the_opposite() {
    for direction in ALL {
        let legal = legal_directions(Some(direction));
        assert_eq!(legal.len(), 3, "exactly one direction forbidden");
        assert!(
            !legal.contains(&direction.opposite()),
            "{} should not be legal after {}",
            direction.opposite(),
            direction
        );
        assert!(
            legal.contains(&direction),
            "repeating {} should be legal",
            direction
        );
    }
}
