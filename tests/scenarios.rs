//! End-to-end round scenarios driven through the public API.

use breach::core::{Coordinate, DaemonState, State};
use breach::puzzle::{Puzzle, PuzzleBuilder};
use breach::round::{Command, Round};
use breach::rules::{BufferFullPolicy, RoundRules, RulesBuilder};
use breach::{GameError, PickRejection};

// A1 B2 C3 D4
// C3 D4 A1 B2
// B2 A1 D4 C3
// D4 C3 B2 A1
fn grid() -> Vec<Vec<&'static str>> {
    vec![
        vec!["A1", "B2", "C3", "D4"],
        vec!["C3", "D4", "A1", "B2"],
        vec!["B2", "A1", "D4", "C3"],
        vec!["D4", "C3", "B2", "A1"],
    ]
}

fn puzzle(capacity: usize, daemon: &[&str], time_limit: u32) -> Puzzle {
    PuzzleBuilder::new()
        .matrix(grid())
        .buffer_capacity(capacity)
        .daemon(daemon.iter().copied())
        .time_limit(time_limit)
        .build()
        .unwrap()
}

fn pick(row: usize, col: usize) -> Command {
    Command::pick(Coordinate::new(row, col))
}

#[test]
fn two_adjacent_picks_complete_daemon() {
    let rules = RoundRules::default();
    let mut round = Round::from_puzzle(&puzzle(3, &["A1", "B2"], 60), rules).unwrap();

    round.execute(pick(0, 0)).unwrap();
    round.execute(pick(0, 1)).unwrap();

    let status = round.status();
    assert_eq!(status.daemons()[0].state(), DaemonState::Succeeded);
    assert_eq!(status.score(), rules.scoring.daemon_reward);
    assert!(!status.is_game_over());
}

#[test]
fn non_adjacent_pick_is_rejected_without_side_effects() {
    let puzzle = puzzle(3, &["A1", "B2"], 60);
    let mut round = Round::from_puzzle(&puzzle, RoundRules::default()).unwrap();
    round.execute(pick(0, 0)).unwrap();
    let before = round.status().clone();

    let err = round.execute(pick(1, 3)).unwrap_err();

    assert_eq!(
        err,
        GameError::InvalidPick {
            coordinate: Coordinate::new(1, 3),
            reason: PickRejection::Unavailable,
        }
    );
    assert_eq!(round.status(), &before);
    assert_eq!(round.status().buffer().len(), 1);
    assert_eq!(round.history().len(), 2);
}

#[test]
fn full_buffer_fails_daemon_and_rejects_more_picks() {
    let mut round =
        Round::from_puzzle(&puzzle(2, &["A1", "B2", "C3"], 60), RoundRules::default()).unwrap();

    round.execute(pick(0, 0)).unwrap();
    round.execute(pick(0, 1)).unwrap();
    assert!(round.status().daemons()[0].is_failed());

    let err = round.execute(pick(0, 2)).unwrap_err();
    assert_eq!(err, GameError::BufferFull { capacity: 2 });
    assert_eq!(round.status().buffer().len(), 2);
    assert_eq!(round.history().len(), 3);
}

#[test]
fn full_buffer_can_end_round_immediately() {
    let rules = RulesBuilder::new()
        .on_buffer_full(BufferFullPolicy::EndRound)
        .build()
        .unwrap();
    let mut round = Round::from_puzzle(&puzzle(2, &["A1", "B2", "C3"], 60), rules).unwrap();

    round.execute(pick(0, 0)).unwrap();
    round.execute(pick(0, 1)).unwrap();

    assert!(round.is_over());
    assert_eq!(round.execute(pick(0, 2)).unwrap_err(), GameError::RoundOver);
}

#[test]
fn full_buffer_ends_round_once_every_daemon_has_failed() {
    let rules = RulesBuilder::new().end_when_resolved(true).build().unwrap();
    assert_eq!(rules.buffer_full, BufferFullPolicy::AwaitTimeout);
    let puzzle = PuzzleBuilder::new()
        .matrix(grid())
        .buffer_capacity(2)
        .daemon(["A1", "B2", "C3"])
        .daemon(["D4"])
        .time_limit(60)
        .build()
        .unwrap();
    let mut round = Round::from_puzzle(&puzzle, rules).unwrap();

    round.execute(pick(0, 0)).unwrap();
    assert!(!round.is_over());
    round.execute(pick(0, 1)).unwrap();

    let status = round.status();
    assert!(round.is_over());
    assert!(status.daemons().iter().all(|daemon| daemon.is_failed()));
    assert_eq!(status.succeeded_count(), 0);
    assert_eq!(status.score(), 0);
    assert_eq!(status.time_remaining(), 60);
    assert_eq!(round.execute(pick(0, 2)).unwrap_err(), GameError::RoundOver);
}

#[test]
fn undoing_every_pick_restores_opening_snapshot() {
    let puzzle = puzzle(4, &["D4", "C3"], 60);
    let mut round = Round::from_puzzle(&puzzle, RoundRules::default()).unwrap();
    let opening = round.status().clone();

    round.execute(pick(0, 0)).unwrap();
    round.execute(pick(2, 0)).unwrap();
    round.execute(pick(2, 3)).unwrap();
    assert_eq!(round.history().len(), 4);

    for _ in 0..3 {
        round.execute(Command::undo()).unwrap();
    }

    assert_eq!(round.status(), &opening);
    assert_eq!(round.history().len(), 1);
    assert_eq!(
        round.execute(Command::undo()).unwrap_err(),
        GameError::UndoUnavailable
    );
    assert_eq!(round.status(), &opening);
}

#[test]
fn ticking_out_the_clock_fails_pending_daemons() {
    let rules = RulesBuilder::new().start_clock_immediately().build().unwrap();
    let puzzle = PuzzleBuilder::new()
        .matrix(grid())
        .buffer_capacity(4)
        .daemon(["A1"])
        .daemon(["C3", "C3"])
        .time_limit(4)
        .build()
        .unwrap();
    let mut round = Round::from_puzzle(&puzzle, rules).unwrap();
    round.execute(pick(0, 0)).unwrap();

    for _ in 0..4 {
        round.execute(Command::tick()).unwrap();
    }

    let ended = round.status().clone();
    assert!(ended.is_game_over());
    assert!(ended.is_final());
    assert_eq!(ended.time_remaining(), 0);
    assert_eq!(ended.daemons()[0].state(), DaemonState::Succeeded);
    assert_eq!(ended.daemons()[1].state(), DaemonState::Failed);

    round.execute(Command::tick()).unwrap();
    assert_eq!(round.status(), &ended);
}

#[test]
fn json_puzzle_and_toml_rules_play_a_round() {
    let puzzle = Puzzle::from_json(
        r#"{
            "matrix": [["1C", "BD", "55"], ["E9", "1C", "BD"], ["55", "E9", "1C"]],
            "buffer_capacity": 4,
            "daemons": [["1C", "BD"], ["BD", "E9"]],
            "time_limit": 90
        }"#,
    )
    .unwrap();
    let rules = RoundRules::from_toml(
        r#"
        end_when_resolved = true

        [scoring]
        daemon_reward = 10
        "#,
    )
    .unwrap();
    let mut round = Round::from_puzzle(&puzzle, rules).unwrap();

    round.execute(pick(0, 0)).unwrap(); // 1C
    round.execute(pick(0, 1)).unwrap(); // BD
    round.execute(pick(2, 1)).unwrap(); // E9

    assert!(round.is_over());
    assert_eq!(round.status().succeeded_count(), 2);
    assert_eq!(round.status().score(), 20);
}
