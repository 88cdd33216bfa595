//! A small turn-based game framework with a generic minimax search.
//!
//! The [`search`] module implements minimax with alpha-beta pruning and an optional depth
//! cutoff. It is game-agnostic: it only sees four callbacks (terminal test, evaluation,
//! successor generation, player to move). [`boards`] provides Tic-Tac-Toe, including a
//! bitboard view used by the search callbacks, and [`players`] wraps the search as a player.
//!
//! # Example
//!
//! ```rust
//! use minimax_lib::boards::tic_tac_toe::{Mark, TicTacToeState};
//! use minimax_lib::players::MinimaxPlayer;
//! use minimax_lib::search::Depth;
//!
//! // X has the middle row half done, O threatens the left column
//! let state = TicTacToeState::from_values([[-1, 0, 0], [0, 1, 1], [-1, 0, 0]], Mark::X).unwrap();
//!
//! // Search to the end of the game
//! let player = MinimaxPlayer::new(Mark::X, Depth::Unlimited);
//! let decision = player.decide(&state).unwrap();
//!
//! assert_eq!(decision.action, (1, 0));
//! assert_eq!(decision.value, 1.0);
//! ```
//!
//! Any other game plugs in through closures:
//!
//! ```rust
//! use minimax_lib::search::MinimaxSearch;
//!
//! // a one-move game: pick the larger number
//! let search = MinimaxSearch::builder(
//!     |state: &u32| *state > 0,
//!     |state: &u32, _root: &char| *state as f64,
//!     |_: &u32| vec![("low", 1), ("high", 2)],
//!     |_: &u32| 'a',
//! )
//! .build();
//!
//! assert_eq!(search.decide(&0, &'a').unwrap().action, "high");
//! ```

/// Contains the game, state and player contracts.
pub mod board;
/// Contains pre-made game implementations.
pub mod boards;
/// Command-line front end used by the `tictactoe` binary.
pub mod cli;
pub mod error;
/// The match loop and series statistics.
pub mod game_match;
/// Contains player implementations.
pub mod players;
/// The core module of the library, containing the minimax search.
pub mod search;

pub use error::{Error, Result};
