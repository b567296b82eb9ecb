//! Simulation driver: play the games and persist the per-channel win rates

use crate::channels::{CasinoFrameLayout, CHANNEL_COUNT};
use crate::error::CasinoError;
use crate::games::{Blackjack, BlackjackStrategy, Roulette, RouletteStrategy, SlotMachine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rep_store::OutputManager;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

/// Describes one simulation run; deserializable from JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Directory the replication folders are created under.
    pub base_path: PathBuf,
    /// Replication name prefix.
    pub prefix: String,
    /// Number of replications to run and persist.
    pub replications: usize,
    /// Players per game per replication; each contributes one round.
    pub rounds_per_game: u32,
    /// RNG seed; a fixed seed reproduces the run exactly.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("results"),
            prefix: "Replication".to_string(),
            replications: 1,
            rounds_per_game: 100,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CasinoError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Play `rounds` independent players of every game style and return the
/// per-channel win rates, in channel order.
pub fn simulate_casino(rounds: u32, rng: &mut impl Rng) -> Vec<f64> {
    let mut wins = vec![0u32; CHANNEL_COUNT];

    for _ in 0..rounds {
        let round: [bool; CHANNEL_COUNT] = [
            Roulette::new(RouletteStrategy::AlwaysRed).play(rng),
            Roulette::new(RouletteStrategy::Alternate).play(rng),
            SlotMachine::default().play(rng),
            Blackjack::new(BlackjackStrategy::Conservative).play(rng),
            Blackjack::new(BlackjackStrategy::Aggressive).play(rng),
        ];
        for (count, won) in wins.iter_mut().zip(round) {
            if won {
                *count += 1;
            }
        }
    }

    wins.iter()
        .map(|&count| f64::from(count) / f64::from(rounds.max(1)))
        .collect()
}

/// Run the configured number of replications, persisting one win-rate value
/// per channel per replication as length-prefixed binary frames.
pub fn run(config: &RunConfig) -> Result<(), CasinoError> {
    let mut rng = config.rng();
    let mut output = OutputManager::new(&config.base_path, CasinoFrameLayout);
    output.set_name(&config.prefix);

    for _ in 0..config.replications {
        output.new_replication()?;
        let rates = simulate_casino(config.rounds_per_game, &mut rng);
        for (i, rate) in rates.iter().enumerate() {
            output.writer_mut(i)?.write(rate)?;
        }
    }
    output.close_all_writers();

    info!(
        base_path = %config.base_path.display(),
        replications = config.replications,
        rounds_per_game = config.rounds_per_game,
        "simulation run complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_rates_are_proper_fractions() {
        let mut rng = StdRng::seed_from_u64(11);
        let rates = simulate_casino(200, &mut rng);
        assert_eq!(rates.len(), CHANNEL_COUNT);
        for rate in rates {
            assert!((0.0..=1.0).contains(&rate));
        }
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(simulate_casino(50, &mut a), simulate_casino(50, &mut b));
    }

    #[test]
    fn zero_rounds_yields_zero_rates() {
        let mut rng = StdRng::seed_from_u64(3);
        let rates = simulate_casino(0, &mut rng);
        assert!(rates.iter().all(|&rate| rate == 0.0));
    }
}
