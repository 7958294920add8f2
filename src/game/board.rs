use super::dice::Dice;
use super::moves::{Move, MoveRecord};
use super::player::Player;

pub const NUM_POINTS: usize = 24;
pub const CHECKERS_PER_SIDE: u8 = 15;

/// One of the 24 board positions: a checker count and, when occupied, the
/// owning player. `count == 0` always means "no owner".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    count: u8,
    owner: Option<Player>,
}

impl Point {
    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn owner(&self) -> Option<Player> {
        self.owner
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Add one checker for `player`, taking ownership of the point.
    fn put(&mut self, player: Player) {
        self.count += 1;
        self.owner = Some(player);
    }

    /// Remove one checker, clearing ownership when the point empties.
    fn take(&mut self) {
        assert!(self.count > 0, "removing a checker from an empty point");
        self.count -= 1;
        if self.count == 0 {
            self.owner = None;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The source point holds no checker of the moving player.
    NotYourPoint,
    /// The destination is held by two or more opposing checkers.
    PointBlocked,
    /// Bearing off while checkers remain outside the home range.
    BearOffNotAllowed,
}

/// Canonical game state: 24 points plus per-player bar and borne-off
/// counters. Mutated in place for the whole game; search never clones it
/// and instead relies on `make_move`/`undo_move` through the history stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    points: [Point; NUM_POINTS],
    bar: [u8; 2],
    borne_off: [u8; 2],
    history: Vec<MoveRecord>,
}

impl Board {
    /// Create a board with the standard starting layout.
    pub fn new() -> Self {
        let mut board = Board {
            points: [Point::default(); NUM_POINTS],
            bar: [0; 2],
            borne_off: [0; 2],
            history: Vec::new(),
        };
        for (point, count) in [(0, 2), (11, 5), (16, 3), (18, 5)] {
            board.points[point] = Point {
                count,
                owner: Some(Player::White),
            };
        }
        for (point, count) in [(23, 2), (12, 5), (7, 3), (5, 5)] {
            board.points[point] = Point {
                count,
                owner: Some(Player::Black),
            };
        }
        board
    }

    pub fn point(&self, index: usize) -> Point {
        self.points[index]
    }

    /// Checkers of `player` waiting on the bar after being hit.
    pub fn bar(&self, player: Player) -> u8 {
        self.bar[player.index()]
    }

    /// Checkers of `player` permanently removed from play.
    pub fn borne_off(&self, player: Player) -> u8 {
        self.borne_off[player.index()]
    }

    /// Checkers of `player` currently on board points.
    pub fn checkers_on_points(&self, player: Player) -> u8 {
        self.points
            .iter()
            .filter(|p| p.owner() == Some(player))
            .map(|p| p.count())
            .sum()
    }

    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// The player who has borne off all 15 checkers, if any.
    pub fn winner(&self) -> Option<Player> {
        [Player::White, Player::Black]
            .into_iter()
            .find(|&p| self.borne_off(p) == CHECKERS_PER_SIDE)
    }

    /// A player may bear off only once every checker still in play sits in
    /// the six points nearest their bear-off edge. A checker on the bar is
    /// outside that range.
    pub fn is_bear_off_possible(&self, player: Player) -> bool {
        if self.bar(player) > 0 {
            return false;
        }
        let home = player.home_range();
        self.points
            .iter()
            .enumerate()
            .all(|(index, p)| p.owner() != Some(player) || home.contains(&index))
    }

    /// Legal single-pip moves for one die value: every point owned by
    /// `player` yields at most one candidate, kept when the destination is
    /// open (empty, own, or a lone opposing checker), or turned into a
    /// bear-off when the destination lies past the edge and all checkers
    /// are home.
    pub fn moves_for_die(&self, player: Player, die: u8) -> Vec<Move> {
        let bear_off_allowed = self.is_bear_off_possible(player);
        let mut moves = Vec::new();
        for from in 0..NUM_POINTS {
            if self.points[from].owner() != Some(player) {
                continue;
            }
            match player.destination(from, die) {
                Some(to) => {
                    let dest = self.points[to];
                    if dest.owner() == Some(player.other()) && dest.count() >= 2 {
                        continue;
                    }
                    moves.push(Move::Step { from, to });
                }
                None => {
                    if bear_off_allowed {
                        moves.push(Move::BearOff { from });
                    }
                }
            }
        }
        moves
    }

    /// Union of the legal moves for both dice of a roll. An empty result is
    /// a normal game condition (the turn passes), not an error.
    pub fn legal_moves(&self, player: Player, dice: Dice) -> Vec<Move> {
        let mut moves = self.moves_for_die(player, dice.first);
        if !dice.is_double() {
            moves.extend(self.moves_for_die(player, dice.second));
        }
        moves
    }

    /// Apply a move for `player`, pushing a history record that `undo_move`
    /// can reverse exactly. Landing on a lone opposing checker hits it to
    /// the opponent's bar.
    pub fn make_move(&mut self, player: Player, mv: Move) -> Result<(), MoveError> {
        let from_before = self.points[mv.from()];
        if from_before.owner() != Some(player) {
            return Err(MoveError::NotYourPoint);
        }
        match mv {
            Move::Step { from, to } => {
                let to_before = self.points[to];
                if to_before.owner() == Some(player.other()) && to_before.count() >= 2 {
                    return Err(MoveError::PointBlocked);
                }
                self.points[from].take();
                if to_before.owner() == Some(player.other()) {
                    // A lone opposing checker: hit it to the bar and take the point
                    self.bar[player.other().index()] += 1;
                    self.points[to] = Point {
                        count: 1,
                        owner: Some(player),
                    };
                } else {
                    self.points[to].put(player);
                }
                self.history.push(MoveRecord {
                    mover: player,
                    mv,
                    from_before,
                    to_before,
                });
            }
            Move::BearOff { from } => {
                if !self.is_bear_off_possible(player) {
                    return Err(MoveError::BearOffNotAllowed);
                }
                self.points[from].take();
                self.borne_off[player.index()] += 1;
                self.history.push(MoveRecord {
                    mover: player,
                    mv,
                    from_before,
                    to_before: Point::default(),
                });
            }
        }
        Ok(())
    }

    /// Reverse the most recently applied move. Only the latest entry can be
    /// undone; calling this with an empty history is a mismatched
    /// make/undo pairing and panics.
    pub fn undo_move(&mut self) {
        let record = self
            .history
            .pop()
            .expect("undo_move without a matching make_move");
        match record.mv {
            Move::Step { from, to } => {
                // A hit had sent the displaced checker to the opponent's bar
                if record.to_before.owner() == Some(record.mover.other()) {
                    self.bar[record.mover.other().index()] -= 1;
                }
                self.points[to] = record.to_before;
                self.points[from] = record.from_before;
            }
            Move::BearOff { from } => {
                self.borne_off[record.mover.index()] -= 1;
                self.points[from] = record.from_before;
            }
        }
    }

    /// Depth of the undo stack. Search must leave this unchanged.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Board {
            points: [Point::default(); NUM_POINTS],
            bar: [0; 2],
            borne_off: [0; 2],
            history: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, index: usize, player: Player, count: u8) {
        self.points[index] = Point {
            count,
            owner: Some(player),
        };
    }

    #[cfg(test)]
    pub(crate) fn set_borne_off(&mut self, player: Player, count: u8) {
        self.borne_off[player.index()] = count;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
