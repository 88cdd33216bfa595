extern crate minimax_lib;

use minimax_lib::board::{Game, Player};
use minimax_lib::boards::tic_tac_toe::{Mark, TicTacToeGame};
use minimax_lib::game_match::Match;
use minimax_lib::players::MinimaxPlayer;
use minimax_lib::players::minimax::{next_states, tic_tac_toe_search};
use minimax_lib::search::Depth;

fn main() {
    let game = TicTacToeGame::new();
    let state = game.initial_state();

    // Print the value of every opening move for X
    let search = tic_tac_toe_search(&game, Depth::Unlimited);
    for (mv, child) in next_states(&game, &state) {
        let value = search.value(&child, &Mark::X, Depth::Unlimited, f64::NEG_INFINITY, f64::INFINITY);
        println!("Move: {mv:?} = {value:+.0}");
    }
    println!("Nodes visited: {}", search.nodes_visited());

    // Two perfect players always draw
    let players: Vec<Box<dyn Player<TicTacToeGame>>> = vec![
        Box::new(MinimaxPlayer::perfect(Mark::X)),
        Box::new(MinimaxPlayer::perfect(Mark::O)),
    ];
    let (result, history) = match Match::new(&game, players).run() {
        Ok(outcome) => outcome,
        Err(err) => panic!("match failed: {err}"),
    };

    if let Some(final_state) = history.last() {
        println!("\n{final_state}");
    }
    println!("X: {}, O: {}", result[&Mark::X], result[&Mark::O]);
    assert_eq!(result[&Mark::X], 0.0);
}
