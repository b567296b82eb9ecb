//! The casino games
//!
//! Three games, five playing styles, each reduced to a single `play` call
//! answering "did the player win this round". All randomness comes from the
//! caller's [`Rng`], so a seeded generator makes a whole simulation run
//! reproducible.

use rand::seq::SliceRandom;
use rand::Rng;

/// Betting strategy for [`Roulette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouletteStrategy {
    /// Always bets on red.
    AlwaysRed,
    /// Alternates between red and black each round.
    Alternate,
}

/// European-style red-or-black roulette, reduced to an even-money coin flip.
#[derive(Debug)]
pub struct Roulette {
    strategy: RouletteStrategy,
    last_bet_red: bool,
}

impl Roulette {
    pub fn new(strategy: RouletteStrategy) -> Self {
        Self {
            strategy,
            last_bet_red: true,
        }
    }

    /// One round: the wheel lands red or black with equal probability and
    /// the player wins when the bet matches.
    pub fn play(&mut self, rng: &mut impl Rng) -> bool {
        let winning_red = rng.gen_bool(0.5);
        let bet_red = match self.strategy {
            RouletteStrategy::AlwaysRed => true,
            RouletteStrategy::Alternate => self.last_bet_red,
        };
        self.last_bet_red = !self.last_bet_red;
        bet_red == winning_red
    }
}

/// A slot machine with a fixed win probability per spin.
#[derive(Debug)]
pub struct SlotMachine {
    win_probability: f64,
}

impl SlotMachine {
    pub fn new(win_probability: f64) -> Self {
        Self { win_probability }
    }

    pub fn play(&self, rng: &mut impl Rng) -> bool {
        rng.gen_bool(self.win_probability)
    }
}

impl Default for SlotMachine {
    fn default() -> Self {
        Self::new(0.2)
    }
}

/// Hitting strategy for [`Blackjack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlackjackStrategy {
    /// Stands once the hand reaches 12.
    Conservative,
    /// Keeps hitting until the hand reaches 17.
    Aggressive,
}

/// A simplified Blackjack game against a dealer who hits below 17.
///
/// Played from a four-suit shoe that reshuffles when exhausted; aces count
/// as 11 and demote to 1 while the hand would bust.
#[derive(Debug)]
pub struct Blackjack {
    strategy: BlackjackStrategy,
    deck: Vec<u8>,
}

impl Blackjack {
    pub fn new(strategy: BlackjackStrategy) -> Self {
        Self {
            strategy,
            deck: Vec::new(),
        }
    }

    /// One full hand. Returns true when the player wins outright; pushes
    /// count as losses.
    pub fn play(&mut self, rng: &mut impl Rng) -> bool {
        let mut player = vec![self.draw(rng), self.draw(rng)];
        let dealer = vec![self.draw(rng), self.draw(rng)];

        let mut player_score = best_score(&player);
        let mut dealer_score = best_score(&dealer);

        let stand_at = match self.strategy {
            BlackjackStrategy::Conservative => 12,
            BlackjackStrategy::Aggressive => 17,
        };
        while player_score < stand_at {
            player.push(self.draw(rng));
            player_score = best_score(&player);
            if player_score > 21 {
                return false;
            }
        }

        let mut dealer_hand = dealer;
        while dealer_score < 17 {
            dealer_hand.push(self.draw(rng));
            dealer_score = best_score(&dealer_hand);
        }

        if dealer_score > 21 {
            return true;
        }
        player_score > dealer_score
    }

    fn draw(&mut self, rng: &mut impl Rng) -> u8 {
        if self.deck.is_empty() {
            self.reset_deck(rng);
        }
        // Non-empty after reset; the shoe always has 52 cards.
        self.deck.pop().unwrap_or(2)
    }

    fn reset_deck(&mut self, rng: &mut impl Rng) {
        self.deck.clear();
        for _suit in 0..4 {
            self.deck.extend(2..=10); // pip cards
            self.deck.push(11); // ace
            self.deck.extend([10, 10, 10]); // J, Q, K
        }
        self.deck.shuffle(rng);
    }
}

/// Best hand value without busting, demoting aces from 11 to 1 as needed.
fn best_score(hand: &[u8]) -> u32 {
    let mut score: u32 = hand.iter().map(|&card| u32::from(card)).sum();
    let mut aces = hand.iter().filter(|&&card| card == 11).count();
    while score > 21 && aces > 0 {
        score -= 10;
        aces -= 1;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn best_score_demotes_aces() {
        assert_eq!(best_score(&[11, 10]), 21);
        assert_eq!(best_score(&[11, 10, 5]), 16);
        assert_eq!(best_score(&[11, 11, 10]), 12);
        assert_eq!(best_score(&[10, 10, 5]), 25);
    }

    #[test]
    fn alternate_strategy_flips_its_bet() {
        // With a deterministic wheel (always "red" via gen_bool on a fixed
        // seed stream) the alternating player and the constant player must
        // disagree every other round; we only check the flip wiring here.
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = Roulette::new(RouletteStrategy::Alternate);
        // First bet is red, second is black, regardless of outcomes.
        game.play(&mut rng);
        assert!(!game.last_bet_red);
        game.play(&mut rng);
        assert!(game.last_bet_red);
    }

    #[test]
    fn slot_machine_respects_probability_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let never = SlotMachine::new(0.0);
        let always = SlotMachine::new(1.0);
        for _ in 0..100 {
            assert!(!never.play(&mut rng));
            assert!(always.play(&mut rng));
        }
    }

    #[test]
    fn blackjack_hands_complete_from_a_reshuffling_shoe() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = Blackjack::new(BlackjackStrategy::Aggressive);
        // Many more hands than one shoe holds; must reshuffle seamlessly.
        for _ in 0..500 {
            game.play(&mut rng);
        }
    }
}
