use super::board::{self, Board};
use super::dice::Dice;
use super::moves::Move;
use super::player::Player;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    NotYourPoint,
    PointBlocked,
    BearOffNotAllowed,
    GameOver,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::White, // White starts
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for search (make/undo must be balanced before
    /// control returns to the caller).
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.board.is_game_over()
    }

    /// The player who has borne off all 15 checkers, if any.
    pub fn winner(&self) -> Option<Player> {
        self.board.winner()
    }

    /// Legal moves for the current player given a rolled pair. Empty means
    /// the turn passes.
    pub fn legal_moves(&self, dice: Dice) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_moves(self.current_player, dice)
    }

    /// Apply a move for the current player and hand the turn over.
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        self.board
            .make_move(self.current_player, mv)
            .map_err(|e| match e {
                board::MoveError::NotYourPoint => MoveError::NotYourPoint,
                board::MoveError::PointBlocked => MoveError::PointBlocked,
                board::MoveError::BearOffNotAllowed => MoveError::BearOffNotAllowed,
            })?;
        self.current_player = self.current_player.other();
        Ok(())
    }

    /// Hand the turn over without a move (no playable die).
    pub fn pass_turn(&mut self) {
        self.current_player = self.current_player.other();
    }

    #[cfg(test)]
    pub(crate) fn with_board(board: Board, current_player: Player) -> Self {
        GameState {
            board,
            current_player,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::CHECKERS_PER_SIDE;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::White);
        assert!(!state.is_terminal());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_apply_switches_player() {
        let mut state = GameState::initial();
        state.apply(Move::Step { from: 0, to: 3 }).unwrap();
        assert_eq!(state.current_player(), Player::Black);
        assert_eq!(state.board().point(3).owner(), Some(Player::White));
    }

    #[test]
    fn test_apply_rejects_illegal_move() {
        let mut state = GameState::initial();
        assert_eq!(
            state.apply(Move::Step { from: 5, to: 9 }),
            Err(MoveError::NotYourPoint)
        );
        assert_eq!(
            state.apply(Move::Step { from: 0, to: 5 }),
            Err(MoveError::PointBlocked)
        );
        // Failed applies must not hand the turn over
        assert_eq!(state.current_player(), Player::White);
    }

    #[test]
    fn test_apply_rejects_after_game_over() {
        let mut board = Board::empty();
        board.place(0, Player::White, 1);
        board.set_borne_off(Player::Black, CHECKERS_PER_SIDE);
        let mut state = GameState::with_board(board, Player::White);
        assert!(state.is_terminal());
        assert_eq!(state.winner(), Some(Player::Black));
        assert_eq!(
            state.apply(Move::Step { from: 0, to: 1 }),
            Err(MoveError::GameOver)
        );
        assert!(state.legal_moves(Dice::new(1, 2)).is_empty());
    }

    #[test]
    fn test_pass_turn() {
        let mut state = GameState::initial();
        state.pass_turn();
        assert_eq!(state.current_player(), Player::Black);
        state.pass_turn();
        assert_eq!(state.current_player(), Player::White);
    }

    #[test]
    fn test_legal_moves_are_for_current_player() {
        let state = GameState::initial();
        let dice = Dice::new(2, 4);
        for mv in state.legal_moves(dice) {
            assert_eq!(state.board().point(mv.from()).owner(), Some(Player::White));
        }
    }
}
