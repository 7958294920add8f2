//! Turn controller: rolls dice, asks the side to move for a move, applies it
//! (or passes), and alternates until a player bears off all 15 checkers or a
//! turn cap intervenes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ai::Agent;
use crate::error::MatchError;
use crate::game::{Dice, GameState, Player};

/// Result of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    /// `None` when the turn cap ended the game first.
    pub winner: Option<Player>,
    pub turns: usize,
}

/// Aggregate outcome of a batch of games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchStats {
    pub white_wins: usize,
    pub black_wins: usize,
    pub unfinished: usize,
    pub total_turns: usize,
}

impl MatchStats {
    pub fn games(&self) -> usize {
        self.white_wins + self.black_wins + self.unfinished
    }

    pub fn mean_game_length(&self) -> f64 {
        if self.games() == 0 {
            return 0.0;
        }
        self.total_turns as f64 / self.games() as f64
    }
}

/// Play one game between two agents. Dice come from the injected `rng`; the
/// engine itself never rolls during deliberation. `max_turns` bounds games
/// that can no longer finish (both sides holding bar checkers).
pub fn play_game<R: Rng + ?Sized>(
    white: &mut dyn Agent,
    black: &mut dyn Agent,
    rng: &mut R,
    max_turns: usize,
) -> Result<GameRecord, MatchError> {
    let mut state = GameState::initial();
    let mut turns = 0;

    while !state.is_terminal() && turns < max_turns {
        let dice = Dice::roll(rng);
        let agent: &mut dyn Agent = match state.current_player() {
            Player::White => &mut *white,
            Player::Black => &mut *black,
        };
        match agent.select_move(&mut state, dice) {
            Some(mv) => {
                state.apply(mv).map_err(|_| MatchError::IllegalMove {
                    mv,
                    legal: state.legal_moves(dice),
                })?;
            }
            None => state.pass_turn(),
        }
        turns += 1;
    }

    Ok(GameRecord {
        winner: state.winner(),
        turns,
    })
}

/// Play `num_games` games with per-game deterministic dice seeds derived
/// from `base_seed`.
pub fn run_match(
    white: &mut dyn Agent,
    black: &mut dyn Agent,
    num_games: usize,
    base_seed: u64,
    max_turns: usize,
) -> Result<MatchStats, MatchError> {
    let mut stats = MatchStats::default();
    for game_index in 0..num_games {
        let mut rng = StdRng::seed_from_u64(game_seed(base_seed, game_index));
        let record = play_game(white, black, &mut rng, max_turns)?;
        match record.winner {
            Some(Player::White) => stats.white_wins += 1,
            Some(Player::Black) => stats.black_wins += 1,
            None => stats.unfinished += 1,
        }
        stats.total_turns += record.turns;
    }
    Ok(stats)
}

/// Derive a deterministic seed for a given game index.
pub fn game_seed(base_seed: u64, game_index: usize) -> u64 {
    // FNV-1a-inspired mixing for deterministic, well-distributed seeds
    let mut hash = base_seed ^ 0x517cc1b727220a95;
    let index = game_index as u64;
    hash = hash.wrapping_mul(0x100000001b3);
    hash ^= index;
    hash = hash.wrapping_mul(0x100000001b3);
    hash ^= index >> 32;
    hash
}
