use crate::game::{Board, Dice, GameState, Move, Player, NUM_POINTS};

use super::agent::Agent;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> f64;
}

/// Default heuristic: signed pip-count differential. Each point contributes
/// its checker count times the owner's remaining pip distance, added for
/// `player` and subtracted for the opponent.
pub struct PipCountHeuristic;

impl Heuristic for PipCountHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        let mut score = 0.0;
        for index in 0..NUM_POINTS {
            let point = board.point(index);
            match point.owner() {
                Some(owner) if owner == player => {
                    score += point.count() as f64 * player.distance_to_off(index) as f64;
                }
                Some(owner) => {
                    score -= point.count() as f64 * owner.distance_to_off(index) as f64;
                }
                None => {}
            }
        }
        score
    }
}

/// Weight of one ordered die pair in a chance node.
const PAIR_WEIGHT: f64 = 1.0 / 36.0;

/// Depth-bounded expectiminimax agent. Between plies the search averages
/// over all 36 ordered die pairs; within a fixed pair it is a plain
/// alpha-beta decision layer. All values share one sign convention:
/// evaluated for White, so White maximizes and Black minimizes.
pub struct ExpectimaxAgent {
    depth: u32,
    heuristic: Box<dyn Heuristic>,
}

impl ExpectimaxAgent {
    pub fn new(depth: u32) -> Self {
        ExpectimaxAgent {
            depth,
            heuristic: Box::new(PipCountHeuristic),
        }
    }

    pub fn with_heuristic(depth: u32, heuristic: Box<dyn Heuristic>) -> Self {
        ExpectimaxAgent { depth, heuristic }
    }

    fn best_move(&self, state: &mut GameState, dice: Dice) -> Option<Move> {
        let player = state.current_player();
        let moves = state.legal_moves(dice);
        let mut best: Option<(Move, f64)> = None;

        for mv in moves {
            let board = state.board_mut();
            board
                .make_move(player, mv)
                .unwrap_or_else(|e| panic!("generated move {} rejected: {:?}", mv, e));
            let value = self.expected_value(
                board,
                player.other(),
                self.depth.saturating_sub(1),
                f64::NEG_INFINITY,
                f64::INFINITY,
            );
            board.undo_move();

            // Strict comparisons keep the first move found on ties
            let improves = match best {
                None => true,
                Some((_, best_value)) => {
                    if player == Player::White {
                        value > best_value
                    } else {
                        value < best_value
                    }
                }
            };
            if improves {
                best = Some((mv, value));
            }
        }

        best.map(|(mv, _)| mv)
    }

    /// Chance node: probability-weighted value over all 36 ordered die
    /// pairs for the player about to roll.
    fn expected_value(
        &self,
        board: &mut Board,
        to_move: Player,
        depth: u32,
        alpha: f64,
        beta: f64,
    ) -> f64 {
        if depth == 0 || board.is_game_over() {
            return self.heuristic.evaluate(board, Player::White);
        }
        let mut total = 0.0;
        for dice in Dice::all_pairs() {
            total += PAIR_WEIGHT * self.move_value(board, to_move, dice, depth, alpha, beta);
        }
        total
    }

    /// Decision node: best achievable value for `to_move` once `dice` are
    /// known. The alpha-beta window is copied per pair, so a cutoff never
    /// carries over to a sibling outcome.
    fn move_value(
        &self,
        board: &mut Board,
        to_move: Player,
        dice: Dice,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        let moves = board.legal_moves(to_move, dice);
        if moves.is_empty() {
            // No playable die: the turn passes without touching the board
            return self.expected_value(board, to_move.other(), depth - 1, alpha, beta);
        }

        let maximizing = to_move == Player::White;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for mv in moves {
            board
                .make_move(to_move, mv)
                .unwrap_or_else(|e| panic!("generated move {} rejected: {:?}", mv, e));
            let value = self.expected_value(board, to_move.other(), depth - 1, alpha, beta);
            board.undo_move();
            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

impl Agent for ExpectimaxAgent {
    fn select_move(&mut self, state: &mut GameState, dice: Dice) -> Option<Move> {
        self.best_move(state, dice)
    }

    fn name(&self) -> &str {
        "Expectimax"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(ExpectimaxAgent::new(self.depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Heuristic tests ---

    #[test]
    fn heuristic_empty_board_is_zero() {
        let board = Board::empty();
        let h = PipCountHeuristic;
        assert_eq!(h.evaluate(&board, Player::White), 0.0);
        assert_eq!(h.evaluate(&board, Player::Black), 0.0);
    }

    #[test]
    fn heuristic_start_position_pip_difference() {
        // White pips: 2*24 + 5*13 + 3*8 + 5*6 = 167
        // Black pips: 2*23 + 5*12 + 3*7 + 5*5 = 152
        let board = Board::new();
        let h = PipCountHeuristic;
        assert_eq!(h.evaluate(&board, Player::White), 15.0);
        assert_eq!(h.evaluate(&board, Player::Black), -15.0);
    }

    #[test]
    fn heuristic_scales_with_checker_count() {
        let mut board = Board::empty();
        board.place(10, Player::White, 3);
        let h = PipCountHeuristic;
        assert_eq!(h.evaluate(&board, Player::White), 3.0 * 14.0);
    }

    #[test]
    fn heuristic_is_antisymmetric() {
        let mut board = Board::new();
        board
            .make_move(Player::White, Move::Step { from: 0, to: 3 })
            .unwrap();
        let h = PipCountHeuristic;
        assert_eq!(
            h.evaluate(&board, Player::White),
            -h.evaluate(&board, Player::Black)
        );
    }

    // --- Algorithm tests ---

    #[test]
    fn depth_zero_returns_static_evaluation() {
        let agent = ExpectimaxAgent::new(3);
        let mut board = Board::new();
        let value = agent.expected_value(
            &mut board,
            Player::White,
            0,
            f64::NEG_INFINITY,
            f64::INFINITY,
        );
        assert_eq!(value, PipCountHeuristic.evaluate(&board, Player::White));
    }

    #[test]
    fn finished_game_evaluates_without_recursion() {
        use crate::game::CHECKERS_PER_SIDE;

        let agent = ExpectimaxAgent::new(3);
        let mut board = Board::empty();
        board.place(10, Player::Black, 2);
        board.set_borne_off(Player::White, CHECKERS_PER_SIDE);
        let expected = PipCountHeuristic.evaluate(&board, Player::White);
        let value = agent.expected_value(
            &mut board,
            Player::Black,
            3,
            f64::NEG_INFINITY,
            f64::INFINITY,
        );
        assert_eq!(value, expected);
    }

    #[test]
    fn chance_node_averages_over_all_pairs() {
        // Lone White checker at 0: for dice (a, b) White keeps its pip
        // count highest by stepping with the smaller die, so the depth-1
        // value is 24 - min(a, b) and the chance node averages it.
        let agent = ExpectimaxAgent::new(1);
        let mut board = Board::empty();
        board.place(0, Player::White, 1);
        let value = agent.expected_value(
            &mut board,
            Player::White,
            1,
            f64::NEG_INFINITY,
            f64::INFINITY,
        );
        let expected: f64 = Dice::all_pairs()
            .map(|d| (24 - d.first.min(d.second)) as f64 / 36.0)
            .sum();
        assert!((value - expected).abs() < 1e-9, "got {}", value);
    }

    #[test]
    fn blocked_player_passes_and_value_is_static() {
        // White's lone checker at 0 cannot move with any die
        let agent = ExpectimaxAgent::new(1);
        let mut board = Board::empty();
        board.place(0, Player::White, 1);
        for point in 1..=6 {
            board.place(point, Player::Black, 2);
        }
        let expected = PipCountHeuristic.evaluate(&board, Player::White);
        let value = agent.expected_value(
            &mut board,
            Player::White,
            1,
            f64::NEG_INFINITY,
            f64::INFINITY,
        );
        assert!((value - expected).abs() < 1e-9);
    }

    #[test]
    fn selects_legal_move() {
        let mut agent = ExpectimaxAgent::new(1);
        let mut state = GameState::initial();
        let dice = Dice::new(3, 5);
        let legal = state.legal_moves(dice);
        let mv = agent.select_move(&mut state, dice).unwrap();
        assert!(legal.contains(&mv), "move {} is not legal", mv);
    }

    #[test]
    fn returns_none_without_moves() {
        let mut board = Board::empty();
        board.place(0, Player::White, 1);
        board.place(1, Player::Black, 2);
        board.place(2, Player::Black, 2);
        let mut state = GameState::with_board(board, Player::White);
        let mut agent = ExpectimaxAgent::new(2);
        assert_eq!(agent.select_move(&mut state, Dice::new(1, 2)), None);
    }

    #[test]
    fn white_maximizes_the_shared_value() {
        let mut board = Board::empty();
        board.place(10, Player::White, 1);
        let mut state = GameState::with_board(board, Player::White);
        let mut agent = ExpectimaxAgent::new(1);
        let mv = agent.select_move(&mut state, Dice::new(1, 2)).unwrap();
        assert_eq!(mv, Move::Step { from: 10, to: 11 });
    }

    #[test]
    fn black_minimizes_the_shared_value() {
        let mut board = Board::empty();
        board.place(10, Player::Black, 1);
        let mut state = GameState::with_board(board, Player::Black);
        let mut agent = ExpectimaxAgent::new(1);
        let mv = agent.select_move(&mut state, Dice::new(1, 2)).unwrap();
        assert_eq!(mv, Move::Step { from: 10, to: 9 });
    }

    #[test]
    fn prefers_hitting_a_blot() {
        // Hitting removes the Black checker from the points entirely, which
        // swings the differential further than any quiet step
        let mut board = Board::empty();
        board.place(4, Player::White, 1);
        board.place(5, Player::Black, 1);
        let mut state = GameState::with_board(board, Player::White);
        let mut agent = ExpectimaxAgent::new(1);
        let mv = agent.select_move(&mut state, Dice::new(1, 6)).unwrap();
        assert_eq!(mv, Move::Step { from: 4, to: 5 });
    }

    #[test]
    fn search_is_deterministic() {
        let mut agent = ExpectimaxAgent::new(2);
        let dice = Dice::new(6, 1);
        let mut state = GameState::initial();
        let first = agent.select_move(&mut state, dice);
        let second = agent.select_move(&mut state, dice);
        assert_eq!(first, second);
    }

    #[test]
    fn search_restores_the_board() {
        let mut agent = ExpectimaxAgent::new(2);
        let mut state = GameState::initial();
        let before = state.clone();
        agent.select_move(&mut state, Dice::new(4, 2));
        assert_eq!(state, before);
        assert_eq!(state.board().history_len(), 0);
    }

    #[test]
    fn agent_name_and_clone() {
        let agent = ExpectimaxAgent::new(2);
        assert_eq!(agent.name(), "Expectimax");
        assert_eq!(agent.clone_agent().name(), "Expectimax");
    }
}
