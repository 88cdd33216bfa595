//! Command-line front end: interactive play and bot-vs-bot series.

use crate::board::{Game, Player};
use crate::boards::tic_tac_toe::{Mark, TicTacToeGame};
use crate::error::Result;
use crate::game_match::{Match, SeriesSummary, run_series};
use crate::players::{HumanPlayer, MinimaxPlayer, RandomPlayer};
use crate::search::Depth;
use clap::{Args, ValueEnum};
use std::fmt::Write as _;

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    /// Moves typed on the terminal
    Human,
    /// Uniformly random legal moves
    Random,
    /// Minimax search
    Minimax,
}

/// Settings for one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatConfig {
    pub kind: PlayerKind,
    pub depth: Depth,
    pub seed: Option<u64>,
}

impl SeatConfig {
    pub fn build(&self, mark: Mark) -> Box<dyn Player<TicTacToeGame>> {
        match self.kind {
            PlayerKind::Human => Box::new(HumanPlayer::stdio(mark)),
            PlayerKind::Random => match self.seed {
                Some(seed) => Box::new(RandomPlayer::with_seed(mark, seed)),
                None => Box::new(RandomPlayer::new(mark)),
            },
            PlayerKind::Minimax => Box::new(MinimaxPlayer::new(mark, self.depth)),
        }
    }
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Player for X (moves first)
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    pub x: PlayerKind,

    /// Player for O
    #[arg(long, value_enum, default_value_t = PlayerKind::Minimax)]
    pub o: PlayerKind,

    /// Search depth for a minimax X, a ply count or "perfect"
    #[arg(long, default_value_t = Depth::Unlimited)]
    pub x_depth: Depth,

    /// Search depth for a minimax O, a ply count or "perfect"
    #[arg(long, default_value_t = Depth::Unlimited)]
    pub o_depth: Depth,

    /// Seed for random players
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct BotsArgs {
    /// Number of games to play
    #[arg(long, default_value_t = 50)]
    pub games: usize,

    /// Player for X (moves first)
    #[arg(long, value_enum, default_value_t = PlayerKind::Minimax)]
    pub x: PlayerKind,

    /// Player for O
    #[arg(long, value_enum, default_value_t = PlayerKind::Minimax)]
    pub o: PlayerKind,

    /// Search depth for a minimax X, a ply count or "perfect"
    #[arg(long, default_value_t = Depth::Limited(1))]
    pub x_depth: Depth,

    /// Search depth for a minimax O, a ply count or "perfect"
    #[arg(long, default_value_t = Depth::Unlimited)]
    pub o_depth: Depth,

    /// Base seed for random players; game `i` uses `seed + i`
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Plays one match and prints the final board and rewards.
pub fn execute_play(args: PlayArgs) -> Result<()> {
    let game = TicTacToeGame::new();
    let x = SeatConfig {
        kind: args.x,
        depth: args.x_depth,
        seed: args.seed,
    };
    let o = SeatConfig {
        kind: args.o,
        depth: args.o_depth,
        seed: args.seed.map(|seed| seed.wrapping_add(1)),
    };

    let mut game_match = Match::new(&game, [x.build(Mark::X), o.build(Mark::O)]);
    let (result, history) = game_match.run()?;
    let final_state = history.last().copied().unwrap_or_else(|| game.initial_state());

    println!("\n=== Final Board ===");
    println!("{final_state}");
    println!("=== Result ===");
    for mark in TicTacToeGame::PLAYERS {
        println!("Player {mark}: {}", result.get(&mark).copied().unwrap_or(0.0));
    }
    Ok(())
}

/// Plays a series between two bots and prints the tally.
pub fn execute_bots(args: BotsArgs) -> Result<()> {
    if args.x == PlayerKind::Human || args.o == PlayerKind::Human {
        tracing::warn!("a human seat in a bot series will prompt on every game");
    }

    let game = TicTacToeGame::new();
    let summary = run_series(&game, args.games, Mark::X, Mark::O, |index| {
        let seed = args.seed.map(|seed| seed.wrapping_add(2 * index as u64));
        let x = SeatConfig {
            kind: args.x,
            depth: args.x_depth,
            seed,
        };
        let o = SeatConfig {
            kind: args.o,
            depth: args.o_depth,
            seed: seed.map(|seed| seed.wrapping_add(1)),
        };
        vec![x.build(Mark::X), o.build(Mark::O)]
    })?;

    print!("{}", format_summary(&summary));
    Ok(())
}

/// Renders a series tally with X as the first seat.
pub fn format_summary(summary: &SeriesSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== Bot Match Results ===");
    let _ = writeln!(out, "Total games: {}", summary.games);
    let _ = writeln!(out, "X wins: {}", summary.first_wins);
    let _ = writeln!(out, "O wins: {}", summary.second_wins);
    let _ = writeln!(out, "Draws : {}", summary.draws);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_layout() {
        let summary = SeriesSummary {
            games: 3,
            first_wins: 1,
            second_wins: 0,
            draws: 2,
        };

        assert_eq!(
            format_summary(&summary),
            "\n=== Bot Match Results ===\nTotal games: 3\nX wins: 1\nO wins: 0\nDraws : 2\n"
        );
    }

    #[test]
    fn seats_build_the_requested_player() {
        let seat = SeatConfig {
            kind: PlayerKind::Minimax,
            depth: Depth::Limited(2),
            seed: None,
        };
        assert_eq!(seat.build(Mark::O).id(), Mark::O);

        let seat = SeatConfig {
            kind: PlayerKind::Random,
            depth: Depth::Unlimited,
            seed: Some(3),
        };
        assert_eq!(seat.build(Mark::X).id(), Mark::X);
    }

    #[test]
    fn perfect_o_never_loses_to_random_x() {
        let game = TicTacToeGame::new();
        let random_x = SeatConfig {
            kind: PlayerKind::Random,
            depth: Depth::Unlimited,
            seed: None,
        };
        let perfect_o = SeatConfig {
            kind: PlayerKind::Minimax,
            depth: Depth::Unlimited,
            seed: None,
        };

        let summary = run_series(&game, 10, Mark::X, Mark::O, |index| {
            let x = SeatConfig {
                seed: Some(index as u64),
                ..random_x
            };
            vec![x.build(Mark::X), perfect_o.build(Mark::O)]
        })
        .unwrap();

        assert_eq!(summary.games, 10);
        assert_eq!(summary.first_wins, 0);
    }
}
