use crate::board::{Game, JointAction, Player, Rewards};
use crate::error::{Error, Result};
use std::collections::HashMap;
use tracing::{debug, info, trace};

/// A single game between registered players, played from the initial state to the end.
pub struct Match<'g, G: Game> {
    game: &'g G,
    players: HashMap<G::PlayerId, Box<dyn Player<G> + 'g>>,
}

impl<'g, G: Game> Match<'g, G> {
    /// Registers every player under the seat it reports through [`Player::id`].
    pub fn new(game: &'g G, players: impl IntoIterator<Item = Box<dyn Player<G> + 'g>>) -> Self {
        let players = players
            .into_iter()
            .map(|player| (player.id(), player))
            .collect();
        Self { game, players }
    }

    /// Plays until the game reports a terminal state.
    ///
    /// Returns the final rewards and every state visited, the initial one first.
    ///
    /// # Errors
    ///
    /// Fails when an active seat has no player, when a player cannot choose, or when the
    /// game rejects the chosen actions.
    pub fn run(&mut self) -> Result<(Rewards<G::PlayerId>, Vec<G::State>)> {
        let mut state = self.game.initial_state();
        let mut history = vec![state.clone()];

        while !self.game.is_terminal(&state) {
            let mut joint_action = JointAction::new();

            for player_id in self.game.active_players(&state) {
                let player = self.players.get_mut(&player_id).ok_or_else(|| Error::MissingPlayer {
                    player: format!("{player_id:?}"),
                })?;
                let legal = self.game.legal_actions(&state, player_id);
                let action = player.select_action(&state, &legal)?;
                trace!(player = ?player_id, action = ?action, "action selected");
                joint_action.insert(player_id, action);
            }

            state = self.game.next_state(&state, &joint_action)?;
            history.push(state.clone());
        }

        let result = self.game.result(&state);
        debug!(plies = history.len() - 1, result = ?result, "match finished");
        Ok((result, history))
    }
}

/// Win/draw tally over a series of two-player matches.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct SeriesSummary {
    pub games: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
}

impl SeriesSummary {
    /// Counts one finished match: the side with the strictly higher reward wins.
    pub fn record<P: Eq + std::hash::Hash>(&mut self, rewards: &Rewards<P>, first: &P, second: &P) {
        let first_reward = rewards.get(first).copied().unwrap_or(0.0);
        let second_reward = rewards.get(second).copied().unwrap_or(0.0);

        self.games += 1;
        if first_reward > second_reward {
            self.first_wins += 1;
        } else if second_reward > first_reward {
            self.second_wins += 1;
        } else {
            self.draws += 1;
        }
    }
}

/// Plays `games` matches, asking `make_players` for a fresh line-up before each one.
pub fn run_series<'g, G, F>(
    game: &'g G,
    games: usize,
    first: G::PlayerId,
    second: G::PlayerId,
    mut make_players: F,
) -> Result<SeriesSummary>
where
    G: Game,
    F: FnMut(usize) -> Vec<Box<dyn Player<G> + 'g>>,
{
    let mut summary = SeriesSummary::default();

    for index in 0..games {
        let mut game_match = Match::new(game, make_players(index));
        let (rewards, _) = game_match.run()?;
        summary.record(&rewards, &first, &second);
    }

    info!(
        games = summary.games,
        first_wins = summary.first_wins,
        second_wins = summary.second_wins,
        draws = summary.draws,
        "series finished"
    );
    Ok(summary)
}
