use crate::board::{Game, JointAction, Player};
use crate::boards::bitboard;
use crate::boards::tic_tac_toe::{Mark, Move, TicTacToeGame, TicTacToeState};
use crate::error::Result;
use crate::search::{Decision, Depth, MinimaxSearch};
use tracing::debug;

/// Terminal test through the bitboard representation.
pub fn is_terminal(state: &TicTacToeState) -> bool {
    let (x_bits, o_bits) = bitboard::to_bitboards(state);
    bitboard::is_terminal(x_bits, o_bits)
}

/// Scores `state` for `root_player`: `1.0` for a win, `-1.0` for a loss, `0.0` otherwise.
///
/// Non-terminal states also score `0.0`, so a depth-limited search has no guidance beyond
/// forced results inside its horizon and falls back to the first enumerated move.
pub fn evaluate(state: &TicTacToeState, root_player: Mark) -> f64 {
    let (x_bits, o_bits) = bitboard::to_bitboards(state);
    match bitboard::winner(x_bits, o_bits, Mark::X, Mark::O) {
        Some(winner) if winner == root_player => 1.0,
        Some(_) => -1.0,
        None => 0.0,
    }
}

/// Legal `(move, successor)` pairs for the side to move, in row-major order.
pub fn next_states(game: &TicTacToeGame, state: &TicTacToeState) -> Vec<(Move, TicTacToeState)> {
    let player = state.current_player();
    game.legal_actions(state, player)
        .into_iter()
        .filter_map(|mv| {
            let joint = JointAction::from([(player, mv)]);
            // legal moves always apply
            game.next_state(state, &joint).ok().map(|next| (mv, next))
        })
        .collect()
}

/// Builds a search whose callbacks borrow `game` as their context.
pub fn tic_tac_toe_search(
    game: &TicTacToeGame,
    depth: Depth,
) -> MinimaxSearch<'_, TicTacToeState, Move, Mark> {
    MinimaxSearch::builder(
        is_terminal,
        |state: &TicTacToeState, root: &Mark| evaluate(state, *root),
        move |state: &TicTacToeState| next_states(game, state),
        |state: &TicTacToeState| state.current_player(),
    )
    .with_depth(depth)
    .build()
}

/// Perfect (unlimited depth) or depth-limited Tic-Tac-Toe player.
#[derive(Debug, Clone)]
pub struct MinimaxPlayer {
    id: Mark,
    depth: Depth,
    game: TicTacToeGame,
}

impl MinimaxPlayer {
    pub fn new(id: Mark, depth: Depth) -> Self {
        Self {
            id,
            depth,
            game: TicTacToeGame::new(),
        }
    }

    /// A player searching to the end of the game.
    pub fn perfect(id: Mark) -> Self {
        Self::new(id, Depth::Unlimited)
    }

    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// Runs the search for `state` and returns the chosen move with its value.
    pub fn decide(&self, state: &TicTacToeState) -> Result<Decision<Move>> {
        let search = tic_tac_toe_search(&self.game, self.depth);
        let decision = search.decide(state, &self.id)?;
        debug!(
            player = %self.id,
            row = decision.action.0,
            col = decision.action.1,
            value = decision.value,
            nodes = search.nodes_visited(),
            "minimax move"
        );
        Ok(decision)
    }
}

impl Player<TicTacToeGame> for MinimaxPlayer {
    fn id(&self) -> Mark {
        self.id
    }

    fn select_action(&mut self, state: &TicTacToeState, _legal_actions: &[Move]) -> Result<Move> {
        self.decide(state).map(|decision| decision.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_board_is_a_draw_under_perfect_play() {
        // arrange
        let player = MinimaxPlayer::perfect(Mark::X);

        // act
        let decision = player.decide(&TicTacToeState::new()).unwrap();

        // assert
        assert_eq!(decision.value, 0.0);
        assert_eq!(decision.action, (0, 0));
    }

    #[test]
    fn takes_the_only_winning_move() {
        // O threatens the left column, X completes the middle row first
        let state = TicTacToeState::from_values([[-1, 0, 0], [0, 1, 1], [-1, 0, 0]], Mark::X).unwrap();
        let player = MinimaxPlayer::perfect(Mark::X);

        let decision = player.decide(&state).unwrap();

        assert_eq!(decision.action, (1, 0));
        assert_eq!(decision.value, 1.0);
    }

    #[test]
    fn one_ply_still_sees_the_immediate_win() {
        let state = TicTacToeState::from_values([[-1, 0, 0], [0, 1, 1], [-1, 0, 0]], Mark::X).unwrap();
        let player = MinimaxPlayer::new(Mark::X, Depth::Limited(1));

        let decision = player.decide(&state).unwrap();

        assert_eq!(decision, Decision { action: (1, 0), value: 1.0 });
    }

    #[test]
    fn blocks_the_opponent_line() {
        // X to move must block O's bottom row at (2, 2), the last empty cell in order
        let state = TicTacToeState::from_values([[0, 1, 0], [1, 0, 0], [-1, -1, 0]], Mark::X).unwrap();
        let player = MinimaxPlayer::perfect(Mark::X);

        let decision = player.decide(&state).unwrap();

        assert_eq!(decision.action, (2, 2));
        assert!(decision.value >= 0.0);
    }

    #[test]
    fn depth_zero_plays_first_empty_cell() {
        let state = TicTacToeState::from_values([[1, -1, 0], [0, 0, 0], [0, 0, 0]], Mark::X).unwrap();
        let player = MinimaxPlayer::new(Mark::X, Depth::Limited(0));

        let decision = player.decide(&state).unwrap();

        assert_eq!(decision, Decision { action: (0, 2), value: 0.0 });
    }

    #[test]
    fn full_board_has_no_decision() {
        let state = TicTacToeState::from_values([[1, -1, 1], [-1, 1, -1], [-1, 1, -1]], Mark::X).unwrap();
        let player = MinimaxPlayer::perfect(Mark::X);

        assert!(is_terminal(&state));
        assert!(matches!(player.decide(&state), Err(Error::NoLegalActions)));
    }

    #[test]
    fn evaluation_is_framed_for_the_root() {
        let state = TicTacToeState::from_values([[1, 1, 1], [-1, -1, 0], [0, 0, 0]], Mark::O).unwrap();

        assert_eq!(evaluate(&state, Mark::X), 1.0);
        assert_eq!(evaluate(&state, Mark::O), -1.0);
        assert_eq!(evaluate(&TicTacToeState::new(), Mark::X), 0.0);
    }

    #[test]
    fn successors_follow_legal_order() {
        let game = TicTacToeGame::new();
        let state = TicTacToeState::from_values([[1, 0, 0], [0, -1, 0], [0, 0, 0]], Mark::X).unwrap();

        let children = next_states(&game, &state);

        assert_eq!(children.len(), 7);
        assert_eq!(children[0].0, (0, 1));
        assert_eq!(children[0].1.current_player(), Mark::O);
        assert!(children.iter().all(|(mv, child)| child.cell(mv.0, mv.1) != state.cell(mv.0, mv.1)));
    }
}
