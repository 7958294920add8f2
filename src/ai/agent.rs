use crate::game::{Dice, GameState, Move};

/// Universal interface for all move-selecting agents.
pub trait Agent {
    /// Choose a move for the current player given the rolled dice, or
    /// `None` when the roll yields no legal move (the turn passes).
    /// Implementations may deliberate by mutating `state` through make/undo
    /// but must restore it before returning.
    fn select_move(&mut self, state: &mut GameState, dice: Dice) -> Option<Move>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Clone the agent into a boxed trait object.
    fn clone_agent(&self) -> Box<dyn Agent> {
        unimplemented!("clone_agent not implemented for this agent")
    }
}
