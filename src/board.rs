use crate::error::Result;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Maps each acting player to the action it chose for one turn.
pub type JointAction<P, A> = HashMap<P, A>;

/// Maps each player to its reward for a finished (or abandoned) game.
pub type Rewards<P> = HashMap<P, f64>;

/// A snapshot of a game in progress.
///
/// States are immutable values: a game produces a fresh state for every move instead of
/// mutating the previous one.
pub trait GameState: Clone {
    /// The type identifying a player.
    type PlayerId;

    /// Returns the players that have to act in this state.
    fn active_players(&self) -> Vec<Self::PlayerId>;
}

/// The rules of a turn-based game.
///
/// A game is stateless; every operation receives the state it works on. This is the
/// interface consumed by the match loop and by player implementations. The search engine
/// never sees it directly, it only gets plain callbacks.
pub trait Game {
    /// The type identifying a player, e.g. a mark or a seat number.
    type PlayerId: Copy + Eq + Hash + Debug;
    /// The type representing a move in the game.
    type Action: Clone + PartialEq + Debug;
    /// The state snapshot type.
    type State: GameState<PlayerId = Self::PlayerId>;

    /// Returns the state every match starts from.
    fn initial_state(&self) -> Self::State;

    /// Returns the players that have to act in `state`.
    fn active_players(&self, state: &Self::State) -> Vec<Self::PlayerId>;

    /// Returns all legal actions for `player` in `state`.
    fn legal_actions(&self, state: &Self::State, player: Self::PlayerId) -> Vec<Self::Action>;

    /// Applies one action per active player and returns the resulting state.
    fn next_state(
        &self,
        state: &Self::State,
        joint_action: &JointAction<Self::PlayerId, Self::Action>,
    ) -> Result<Self::State>;

    /// Returns `true` when the game is over.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Scores `state` for every player.
    fn result(&self, state: &Self::State) -> Rewards<Self::PlayerId>;
}

/// Something that picks actions for one seat of a game: a human, a bot, a search.
pub trait Player<G: Game> {
    /// Returns the seat this player controls.
    fn id(&self) -> G::PlayerId;

    /// Chooses one of `legal_actions` for `state`.
    fn select_action(&mut self, state: &G::State, legal_actions: &[G::Action]) -> Result<G::Action>;
}
