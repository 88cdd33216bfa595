//! Contains pre-made game implementations.

/// Packed bit-set view of a Tic-Tac-Toe board for fast terminal checks.
pub mod bitboard;
/// The rules of Tic-Tac-Toe.
pub mod tic_tac_toe;
