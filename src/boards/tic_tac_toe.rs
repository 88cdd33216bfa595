use crate::board::{Game, GameState, JointAction, Rewards};
use crate::error::{Error, Result};
use std::fmt;

/// A move is a `(row, col)` pair with 0-based indices, row 0 on top.
pub type Move = (usize, usize);

/// The two sides of Tic-Tac-Toe. X moves first.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single square of the board.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Mark),
}

impl Cell {
    /// Decodes the numeric notation: `1` is X, `-1` is O, `0` is empty.
    pub fn from_value(value: i8) -> Option<Cell> {
        match value {
            1 => Some(Cell::Occupied(Mark::X)),
            -1 => Some(Cell::Occupied(Mark::O)),
            0 => Some(Cell::Empty),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(mark) => mark.symbol(),
        }
    }
}

/// A Tic-Tac-Toe position: a 3x3 grid plus the side to move.
///
/// States are small `Copy` values; playing a move yields a new state.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct TicTacToeState {
    board: [[Cell; 3]; 3],
    current_player: Mark,
}

impl TicTacToeState {
    /// Creates an empty board with X to move.
    pub fn new() -> Self {
        Self::with_board([[Cell::Empty; 3]; 3], Mark::X)
    }

    pub fn with_board(board: [[Cell; 3]; 3], current_player: Mark) -> Self {
        Self {
            board,
            current_player,
        }
    }

    /// Builds a state from rows in numeric notation (`1` = X, `-1` = O, `0` = empty).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCellValue`] for any other number.
    pub fn from_values(values: [[i8; 3]; 3], current_player: Mark) -> Result<Self> {
        let mut board = [[Cell::Empty; 3]; 3];
        for (row, cells) in values.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                board[row][col] =
                    Cell::from_value(value).ok_or(Error::InvalidCellValue { value, row, col })?;
            }
        }
        Ok(Self::with_board(board, current_player))
    }

    pub fn board(&self) -> &[[Cell; 3]; 3] {
        &self.board
    }

    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.board[row][col]
    }

    /// Returns the empty squares in row-major order.
    pub fn empty_cells(&self) -> Vec<Move> {
        (0..3)
            .flat_map(|row| (0..3).map(move |col| (row, col)))
            .filter(|&(row, col)| self.board[row][col] == Cell::Empty)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.board.iter().flatten().all(|&cell| cell != Cell::Empty)
    }
}

impl Default for TicTacToeState {
    /// Creates a new Tic-Tac-Toe board with player 'X' starting.
    fn default() -> Self {
        TicTacToeState::new()
    }
}

impl GameState for TicTacToeState {
    type PlayerId = Mark;

    fn active_players(&self) -> Vec<Mark> {
        vec![self.current_player]
    }
}

impl fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.board {
            let symbols: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            writeln!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}

const LINES: [[Move; 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// The rules of Tic-Tac-Toe.
///
/// Winner detection here scans the eight lines directly; the search uses the bitboard
/// representation in [`crate::boards::bitboard`] instead.
#[derive(Debug, Default, Copy, Clone)]
pub struct TicTacToeGame;

impl TicTacToeGame {
    pub const PLAYER_X: Mark = Mark::X;
    pub const PLAYER_O: Mark = Mark::O;
    pub const PLAYERS: [Mark; 2] = [Mark::X, Mark::O];

    pub fn new() -> Self {
        TicTacToeGame
    }

    /// Returns the mark owning a complete line, if any.
    pub fn winner(&self, state: &TicTacToeState) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| match state.cell(a.0, a.1) {
            Cell::Occupied(mark)
                if state.cell(b.0, b.1) == Cell::Occupied(mark)
                    && state.cell(c.0, c.1) == Cell::Occupied(mark) =>
            {
                Some(mark)
            }
            _ => None,
        })
    }

    pub fn is_draw(&self, state: &TicTacToeState) -> bool {
        state.is_full() && self.winner(state).is_none()
    }
}

impl Game for TicTacToeGame {
    type PlayerId = Mark;
    type Action = Move;
    type State = TicTacToeState;

    fn initial_state(&self) -> TicTacToeState {
        TicTacToeState::new()
    }

    fn active_players(&self, state: &TicTacToeState) -> Vec<Mark> {
        state.active_players()
    }

    fn legal_actions(&self, state: &TicTacToeState, _player: Mark) -> Vec<Move> {
        state.empty_cells()
    }

    fn next_state(
        &self,
        state: &TicTacToeState,
        joint_action: &JointAction<Mark, Move>,
    ) -> Result<TicTacToeState> {
        let got = joint_action.len();
        let (&player, &(row, col)) = match joint_action.iter().next() {
            Some(entry) if got == 1 => entry,
            _ => return Err(Error::InvalidJointAction { got }),
        };

        if row > 2 || col > 2 {
            return Err(Error::PositionOutOfBounds { row, col });
        }
        if state.cell(row, col) != Cell::Empty {
            return Err(Error::CellOccupied { row, col });
        }

        let mut board = state.board;
        board[row][col] = Cell::Occupied(player);
        Ok(TicTacToeState::with_board(board, player.opponent()))
    }

    fn is_terminal(&self, state: &TicTacToeState) -> bool {
        self.winner(state).is_some() || self.is_draw(state)
    }

    fn result(&self, state: &TicTacToeState) -> Rewards<Mark> {
        match self.winner(state) {
            Some(winner) => Rewards::from([(winner, 1.0), (winner.opponent(), -1.0)]),
            None => Rewards::from([(Mark::X, 0.0), (Mark::O, 0.0)]),
        }
    }
}
