use crate::error::{Error, Result};
use std::cell::Cell;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use tracing::{debug, trace};

type IsTerminalFn<'a, S> = Box<dyn Fn(&S) -> bool + 'a>;
type EvaluateFn<'a, S, P> = Box<dyn Fn(&S, &P) -> f64 + 'a>;
type NextStatesFn<'a, S, A> = Box<dyn Fn(&S) -> Vec<(A, S)> + 'a>;
type CurrentPlayerFn<'a, S, P> = Box<dyn Fn(&S) -> P + 'a>;

/// How many plies the search may look ahead.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum Depth {
    /// Search down to terminal states only.
    #[default]
    Unlimited,
    /// Stop after the given number of plies and evaluate the cutoff state.
    Limited(u32),
}

impl Depth {
    /// Returns `true` when no ply is left and the state must be evaluated as is.
    pub fn is_exhausted(self) -> bool {
        matches!(self, Depth::Limited(0))
    }

    /// Returns the budget left for the children of a node searched with `self`.
    pub fn next(self) -> Depth {
        match self {
            Depth::Unlimited => Depth::Unlimited,
            Depth::Limited(plies) => Depth::Limited(plies.saturating_sub(1)),
        }
    }
}

impl From<Option<u32>> for Depth {
    fn from(plies: Option<u32>) -> Self {
        plies.map_or(Depth::Unlimited, Depth::Limited)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Depth::Unlimited => f.write_str("unlimited"),
            Depth::Limited(plies) => write!(f, "{plies}"),
        }
    }
}

impl FromStr for Depth {
    type Err = ParseIntError;

    /// Accepts a ply count, or `unlimited` / `perfect` for a full-depth search.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "unlimited" | "perfect" => Ok(Depth::Unlimited),
            plies => plies.parse().map(Depth::Limited),
        }
    }
}

/// The action chosen at the root together with its minimax value.
#[derive(Debug, PartialEq, Clone)]
pub struct Decision<A> {
    pub action: A,
    pub value: f64,
}

/// Minimax search with alpha-beta pruning over an arbitrary game.
///
/// The search knows nothing about the game it explores. All game knowledge comes from four
/// callbacks:
/// - `is_terminal(state)`: whether the game is over,
/// - `evaluate(state, root_player)`: the value of a leaf or cutoff state for `root_player`,
/// - `next_states(state)`: the legal `(action, successor)` pairs, in a stable order,
/// - `current_player(state)`: who moves in `state`.
///
/// Nodes where the root player moves are maximizing, all others are minimizing, so only
/// two alternating sides are supported. Successor states are consumed as fresh values and
/// dropped once their subtree is scored; nothing is cached between calls.
pub struct MinimaxSearch<'a, S, A, P> {
    is_terminal: IsTerminalFn<'a, S>,
    evaluate: EvaluateFn<'a, S, P>,
    next_states: NextStatesFn<'a, S, A>,
    current_player: CurrentPlayerFn<'a, S, P>,
    depth: Depth,
    nodes_visited: Cell<u64>,
}

/// A builder for creating instances of `MinimaxSearch`.
pub struct MinimaxSearchBuilder<'a, S, A, P> {
    is_terminal: IsTerminalFn<'a, S>,
    evaluate: EvaluateFn<'a, S, P>,
    next_states: NextStatesFn<'a, S, A>,
    current_player: CurrentPlayerFn<'a, S, P>,
    depth: Depth,
}

impl<'a, S, A, P> MinimaxSearchBuilder<'a, S, A, P> {
    /// Creates a new builder from the four game callbacks. The depth defaults to unlimited.
    pub fn new(
        is_terminal: impl Fn(&S) -> bool + 'a,
        evaluate: impl Fn(&S, &P) -> f64 + 'a,
        next_states: impl Fn(&S) -> Vec<(A, S)> + 'a,
        current_player: impl Fn(&S) -> P + 'a,
    ) -> Self {
        Self {
            is_terminal: Box::new(is_terminal),
            evaluate: Box::new(evaluate),
            next_states: Box::new(next_states),
            current_player: Box::new(current_player),
            depth: Depth::Unlimited,
        }
    }

    /// Sets the ply budget used by `decide`.
    pub fn with_depth(mut self, depth: Depth) -> Self {
        self.depth = depth;
        self
    }

    pub fn build(self) -> MinimaxSearch<'a, S, A, P> {
        MinimaxSearch {
            is_terminal: self.is_terminal,
            evaluate: self.evaluate,
            next_states: self.next_states,
            current_player: self.current_player,
            depth: self.depth,
            nodes_visited: Cell::new(0),
        }
    }
}

impl<'a, S, A, P: PartialEq> MinimaxSearch<'a, S, A, P> {
    /// Returns a new builder for `MinimaxSearch`.
    pub fn builder(
        is_terminal: impl Fn(&S) -> bool + 'a,
        evaluate: impl Fn(&S, &P) -> f64 + 'a,
        next_states: impl Fn(&S) -> Vec<(A, S)> + 'a,
        current_player: impl Fn(&S) -> P + 'a,
    ) -> MinimaxSearchBuilder<'a, S, A, P> {
        MinimaxSearchBuilder::new(is_terminal, evaluate, next_states, current_player)
    }

    /// Returns the ply budget used by `decide`.
    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// Returns how many nodes `value` was called on since creation or the last reset.
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited.get()
    }

    pub fn reset_stats(&self) {
        self.nodes_visited.set(0);
    }

    /// Computes the minimax value of `state` from `root_player`'s point of view.
    ///
    /// Terminal states and states reached with an exhausted `depth` are scored by `evaluate`
    /// without looking at their children. The first call of a search passes
    /// `f64::NEG_INFINITY` / `f64::INFINITY` as `alpha` / `beta`.
    ///
    /// A non-terminal state without successors scores `-inf` on a maximizing node and `+inf`
    /// on a minimizing one. Callers must read that as "no legal continuation".
    pub fn value(&self, state: &S, root_player: &P, depth: Depth, mut alpha: f64, mut beta: f64) -> f64 {
        self.nodes_visited.set(self.nodes_visited.get() + 1);

        if (self.is_terminal)(state) || depth.is_exhausted() {
            return (self.evaluate)(state, root_player);
        }

        let child_depth = depth.next();

        if (self.current_player)(state) == *root_player {
            let mut value = f64::NEG_INFINITY;
            for (_, child) in (self.next_states)(state) {
                value = value.max(self.value(&child, root_player, child_depth, alpha, beta));
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        } else {
            let mut value = f64::INFINITY;
            for (_, child) in (self.next_states)(state) {
                value = value.min(self.value(&child, root_player, child_depth, alpha, beta));
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        }
    }

    /// Chooses the best action in `state` for the player to move, framed for `root_player`.
    ///
    /// Every root child is searched with its own full `(-inf, +inf)` window. The root
    /// maximizes when `root_player` moves and minimizes otherwise; on equal values the
    /// first action in enumeration order is kept.
    ///
    /// With a depth of `Limited(0)` the root state itself is evaluated and no child is
    /// examined, so the first enumerated action is returned with the root's value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalActions`] when `next_states` yields nothing.
    pub fn decide(&self, state: &S, root_player: &P) -> Result<Decision<A>> {
        let root_is_maximizing = (self.current_player)(state) == *root_player;
        let children = (self.next_states)(state);

        if self.depth.is_exhausted() {
            self.nodes_visited.set(self.nodes_visited.get() + 1);
            let value = (self.evaluate)(state, root_player);
            let (action, _) = children.into_iter().next().ok_or(Error::NoLegalActions)?;
            debug!(value, "decision at exhausted depth");
            return Ok(Decision { action, value });
        }

        let child_depth = self.depth.next();
        let mut best: Option<Decision<A>> = None;

        for (index, (action, child)) in children.into_iter().enumerate() {
            let value = self.value(&child, root_player, child_depth, f64::NEG_INFINITY, f64::INFINITY);
            trace!(index, value, "root child scored");

            let improves = match &best {
                None => true,
                Some(current) if root_is_maximizing => value > current.value,
                Some(current) => value < current.value,
            };
            if improves {
                best = Some(Decision { action, value });
            }
        }

        let decision = best.ok_or(Error::NoLegalActions)?;
        debug!(
            value = decision.value,
            nodes = self.nodes_visited(),
            depth = %self.depth,
            "decision made"
        );
        Ok(decision)
    }
}
