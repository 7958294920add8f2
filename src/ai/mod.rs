mod agent;
mod random;
mod search;

pub use agent::Agent;
pub use random::RandomAgent;
pub use search::{ExpectimaxAgent, Heuristic, PipCountHeuristic};
