//! Casino game simulation over the replication framework
//!
//! The concrete pipeline the framework crates were built for: simulate a set
//! of casino games, persist each replication's per-channel win rates through
//! `rep-store`, and aggregate them back with `rep-stats`.
//!
//! - [`games`]: roulette, slots, and blackjack, each driven by a caller-owned
//!   RNG for reproducible runs.
//! - [`channels`]: the five-channel file layouts (binary frames or text
//!   lines) and the ready-made win-rate statistic.
//! - [`simulate`]: the run driver and its JSON-loadable [`RunConfig`].
//!
//! # Example
//!
//! ```no_run
//! use rep_casino::channels::{casino_statistics, CasinoFrameLayout};
//! use rep_casino::simulate::{run, RunConfig};
//! use rep_stats::Statistics;
//!
//! let config = RunConfig {
//!     replications: 10,
//!     seed: Some(42),
//!     ..RunConfig::default()
//! };
//! run(&config).unwrap();
//!
//! let mut stats = casino_statistics(CasinoFrameLayout);
//! stats.set_base_path(&config.base_path);
//! stats.input_manager_mut().load_replications().unwrap();
//! stats.process_all_replications().unwrap();
//! println!("slots win rate: {:.2}%", stats.mean(2) * 100.0);
//! ```

pub mod channels;
pub mod error;
pub mod games;
pub mod simulate;

pub use channels::{
    casino_statistics, CasinoFrameLayout, CasinoLineLayout, CHANNEL_COUNT, CHANNEL_LABELS,
};
pub use error::CasinoError;
pub use games::{Blackjack, BlackjackStrategy, Roulette, RouletteStrategy, SlotMachine};
pub use simulate::{run, simulate_casino, RunConfig};
