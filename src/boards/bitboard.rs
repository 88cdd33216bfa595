//! Bitboard representation of a Tic-Tac-Toe position.
//!
//! Each side's marks are packed into the low 9 bits of a `u16`, bottom row first:
//!
//! ```text
//! 6 7 8   <- top row (array row 0)
//! 3 4 5
//! 0 1 2   <- bottom row (array row 2)
//! ```
//!
//! Cell `(row, col)` maps to bit `(2 - row) * 3 + col`. A line test is then a single
//! `bits & mask == mask` per winning line.

use super::tic_tac_toe::{Cell, Mark, TicTacToeState};

/// One side's occupancy, 9 significant bits.
pub type Bits = u16;

/// Every cell occupied.
pub const FULL_MASK: Bits = 0b111_111_111;

/// The eight winning lines under the bottom-origin layout.
pub const WIN_MASKS: [Bits; 8] = [
    // rows: bottom, middle, top
    0b000_000_111,
    0b000_111_000,
    0b111_000_000,
    // columns: left, middle, right
    0b001_001_001,
    0b010_010_010,
    0b100_100_100,
    // diagonals
    0b100_010_001,
    0b001_010_100,
];

/// Hashable pair of bitboards identifying a board, for a future transposition table.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct BitboardKey {
    pub x_bits: Bits,
    pub o_bits: Bits,
}

/// Returns the bit index of array cell `(row, col)`.
#[inline]
pub const fn cell_bit(row: usize, col: usize) -> u32 {
    ((2 - row) * 3 + col) as u32
}

/// Splits `state` into `(x_bits, o_bits)`.
pub fn to_bitboards(state: &TicTacToeState) -> (Bits, Bits) {
    let mut x_bits = 0;
    let mut o_bits = 0;

    for (row, cells) in state.board().iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let bit = 1 << cell_bit(row, col);
            match cell {
                Cell::Occupied(Mark::X) => x_bits |= bit,
                Cell::Occupied(Mark::O) => o_bits |= bit,
                Cell::Empty => {}
            }
        }
    }

    (x_bits, o_bits)
}

pub fn bitboard_key(x_bits: Bits, o_bits: Bits) -> BitboardKey {
    BitboardKey { x_bits, o_bits }
}

/// Returns `true` if `bits` covers at least one winning line.
#[inline]
pub fn is_win(bits: Bits) -> bool {
    WIN_MASKS.iter().any(|&mask| bits & mask == mask)
}

/// Returns `player_x` if X has a line, else `player_o` if O has one.
///
/// Positions reached through legal play never have both.
pub fn winner<P>(x_bits: Bits, o_bits: Bits, player_x: P, player_o: P) -> Option<P> {
    if is_win(x_bits) {
        Some(player_x)
    } else if is_win(o_bits) {
        Some(player_o)
    } else {
        None
    }
}

pub fn is_draw(x_bits: Bits, o_bits: Bits) -> bool {
    (x_bits | o_bits) == FULL_MASK && !(is_win(x_bits) || is_win(o_bits))
}

pub fn is_terminal(x_bits: Bits, o_bits: Bits) -> bool {
    is_win(x_bits) || is_win(o_bits) || is_draw(x_bits, o_bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn layout_is_bottom_origin() {
        assert_eq!(cell_bit(2, 0), 0);
        assert_eq!(cell_bit(2, 2), 2);
        assert_eq!(cell_bit(1, 1), 4);
        assert_eq!(cell_bit(0, 0), 6);
        assert_eq!(cell_bit(0, 2), 8);
    }

    #[test]
    fn converts_each_side_separately() {
        let state = TicTacToeState::from_values([[1, 0, 0], [0, -1, 0], [0, 0, 1]], Mark::O).unwrap();

        let (x_bits, o_bits) = to_bitboards(&state);

        assert_eq!(x_bits, (1 << 6) | (1 << 2));
        assert_eq!(o_bits, 1 << 4);
        assert_eq!(x_bits & o_bits, 0);
    }

    #[test]
    fn top_row_is_a_win_for_x() {
        let state = TicTacToeState::from_values([[1, 1, 1], [0, 0, 0], [0, 0, 0]], Mark::O).unwrap();
        let (x_bits, o_bits) = to_bitboards(&state);

        assert_eq!(x_bits, 0b111_000_000);
        assert_eq!(winner(x_bits, o_bits, Mark::X, Mark::O), Some(Mark::X));
        assert!(!is_draw(x_bits, o_bits));
        assert!(is_terminal(x_bits, o_bits));
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let state = TicTacToeState::from_values([[1, -1, 1], [-1, 1, -1], [-1, 1, -1]], Mark::X).unwrap();
        let (x_bits, o_bits) = to_bitboards(&state);

        assert_eq!(winner(x_bits, o_bits, Mark::X, Mark::O), None);
        assert!(is_draw(x_bits, o_bits));
        assert!(is_terminal(x_bits, o_bits));
    }

    #[test]
    fn o_wins_when_x_does_not() {
        let x_bits = 1 << cell_bit(0, 0) | 1 << cell_bit(0, 1);
        let o_bits = 1 << cell_bit(0, 2) | 1 << cell_bit(1, 1) | 1 << cell_bit(2, 0);

        assert_eq!(winner(x_bits, o_bits, "x", "o"), Some("o"));
    }

    #[test]
    fn empty_board_is_not_terminal() {
        let (x_bits, o_bits) = to_bitboards(&TicTacToeState::new());

        assert_eq!((x_bits, o_bits), (0, 0));
        assert!(!is_terminal(x_bits, o_bits));
    }

    #[test]
    fn keys_are_hashable() {
        let mut seen = HashSet::new();
        assert!(seen.insert(bitboard_key(0b1, 0b10)));
        assert!(!seen.insert(bitboard_key(0b1, 0b10)));
        assert!(seen.insert(bitboard_key(0b10, 0b1)));
    }
}
