//! Player implementations: who picks the next move for a seat.

/// A player reading moves from a terminal.
pub mod human;
/// The Tic-Tac-Toe minimax player and its search callbacks.
pub mod minimax;
/// A player choosing uniformly among the legal moves.
pub mod random;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;
pub use random::RandomPlayer;
