use crate::board::{Game, Player};
use crate::error::{Error, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Picks a legal action uniformly at random.
///
/// Each player owns its generator, so a seeded player replays the same choices
/// independently of anything else in the process.
pub struct RandomPlayer<P> {
    id: P,
    rng: StdRng,
}

impl<P> RandomPlayer<P> {
    /// Creates a player seeded from the operating system.
    pub fn new(id: P) -> Self {
        Self {
            id,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible player.
    pub fn with_seed(id: P, seed: u64) -> Self {
        Self {
            id,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<G: Game> Player<G> for RandomPlayer<G::PlayerId> {
    fn id(&self) -> G::PlayerId {
        self.id
    }

    fn select_action(&mut self, _state: &G::State, legal_actions: &[G::Action]) -> Result<G::Action> {
        legal_actions
            .choose(&mut self.rng)
            .cloned()
            .ok_or(Error::NoLegalActions)
    }
}
