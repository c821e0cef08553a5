//! Countdown Round
//!
//! This example plays one scripted round through the async shell.
//!
//! Key concepts:
//! - Player commands and countdown ticks share one ordered queue
//! - Subscribers redraw from read-only snapshots
//! - Undo restores an earlier snapshot without rewinding the clock
//!
//! Run with: cargo run --example countdown_round

use breach::core::{Coordinate, Status};
use breach::puzzle::Puzzle;
use breach::round::Round;
use breach::rules::RulesBuilder;
use breach::score::ScoreBoard;
use breach::shell::{channel, Countdown};
use std::time::Duration;

const PUZZLE: &str = r#"{
    "matrix": [
        ["1C", "BD", "55", "E9"],
        ["55", "1C", "E9", "BD"],
        ["BD", "E9", "1C", "55"],
        ["E9", "55", "BD", "1C"]
    ],
    "buffer_capacity": 4,
    "daemons": [["1C", "55"], ["BD", "E9", "1C"]],
    "time_limit": 5
}"#;

fn render(status: &Status) {
    let buffer = status.buffer().codes().join(" ");
    let daemons: Vec<&str> = status
        .daemons()
        .iter()
        .map(|daemon| match daemon.state() {
            breach::core::DaemonState::Pending => "pending",
            breach::core::DaemonState::Succeeded => "SUCCEEDED",
            breach::core::DaemonState::Failed => "FAILED",
        })
        .collect();
    println!(
        "  [{:>2}s] buffer: [{}]  daemons: {:?}  score: {}",
        status.time_remaining(),
        buffer,
        daemons,
        status.score()
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== Countdown Round ===\n");

    let puzzle = Puzzle::from_json(PUZZLE).expect("demo puzzle is valid JSON");
    let rules = RulesBuilder::new()
        .tick_period(Duration::from_millis(200))
        .build()
        .expect("demo rules are valid");

    let mut round = Round::from_puzzle(&puzzle, rules).expect("demo puzzle is playable");
    round.subscribe(render);
    render(round.status());

    let (sender, queue) = channel();
    let countdown = Countdown::spawn(sender.clone(), rules.countdown.period());

    // 1C -> 55 completes the first daemon; the stray BD gets undone.
    sender.pick(Coordinate::new(0, 0)).unwrap();
    sender.pick(Coordinate::new(1, 0)).unwrap();
    sender.pick(Coordinate::new(1, 3)).unwrap();
    sender.undo().unwrap();
    sender.pick(Coordinate::new(2, 0)).unwrap();

    let round = queue.run(round).await;
    countdown.stopped().await;

    let mut board = ScoreBoard::new();
    board.record(round.status());

    println!("\nRound over after {} snapshot(s)", round.history().len());
    println!("Best score: {:?}", board.best());
    println!("\n=== Example Complete ===");
}
