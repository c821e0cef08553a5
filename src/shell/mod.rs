//! Asynchronous shell around a round.
//!
//! Player input and the countdown are two independent producers; both go
//! through one [`CommandQueue`], which applies commands strictly in arrival
//! order. The round itself stays synchronous and pure.
//!
//! # Example
//!
//! ```rust
//! use breach::core::Coordinate;
//! use breach::puzzle::PuzzleBuilder;
//! use breach::round::Round;
//! use breach::rules::RoundRules;
//! use breach::shell::{channel, Countdown};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let puzzle = PuzzleBuilder::new()
//!     .matrix(vec![vec!["1C", "BD"], vec!["55", "E9"]])
//!     .buffer_capacity(2)
//!     .daemon(["1C", "BD"])
//!     .time_limit(30)
//!     .build()
//!     .unwrap();
//! let rules = RoundRules::default();
//! let round = Round::from_puzzle(&puzzle, rules).unwrap();
//!
//! let (sender, queue) = channel();
//! let countdown = Countdown::spawn(sender.clone(), rules.countdown.period());
//!
//! sender.pick(Coordinate::new(0, 0)).unwrap();
//! sender.pick(Coordinate::new(0, 1)).unwrap();
//! sender.force_end().unwrap();
//!
//! let round = queue.run(round).await;
//! assert_eq!(round.status().score(), 100);
//! countdown.cancel();
//! # }
//! ```

mod countdown;
mod queue;

pub use countdown::Countdown;
pub use queue::{channel, CommandQueue, CommandSender, QueueClosed};
