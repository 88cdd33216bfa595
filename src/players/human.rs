use crate::board::Player;
use crate::boards::tic_tac_toe::{Mark, Move, TicTacToeGame, TicTacToeState};
use crate::error::{Error, Result};
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// A person entering moves as `row col` on a line-oriented terminal.
pub struct HumanPlayer<R, W> {
    id: Mark,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(id: Mark, input: R, output: W) -> Self {
        Self { id, input, output }
    }

    /// Gives back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Asks for a move until one of `legal_moves` is entered.
    fn prompt_move(&mut self, legal_moves: &[Move]) -> Result<Move> {
        loop {
            write!(self.output, "Enter move as 'row col': ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }

            match parse_move(&line) {
                Some(mv) if legal_moves.contains(&mv) => return Ok(mv),
                Some(_) => writeln!(self.output, "Invalid move. Try again.")?,
                None => writeln!(self.output, "Invalid format. Please enter two numbers like: 1 2")?,
            }
        }
    }
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    /// A player on the process terminal.
    pub fn stdio(id: Mark) -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(id, stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Player<TicTacToeGame> for HumanPlayer<R, W> {
    fn id(&self) -> Mark {
        self.id
    }

    fn select_action(&mut self, state: &TicTacToeState, legal_actions: &[Move]) -> Result<Move> {
        writeln!(self.output, "\nPlayer {}'s turn", self.id)?;
        write!(self.output, "\nBoard:\n{state}\n")?;
        self.prompt_move(legal_actions)
    }
}

fn parse_move(line: &str) -> Option<Move> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}
