//! Game representation and value types.
//!
//! Contains the stones, the two players, the per-turn pick log, and the
//! `Game` accumulator that exists for the duration of one resolution.

pub mod player;
pub mod state;
pub mod stone;

pub use player::{Outcome, Player};
pub use state::{Game, GameResult, PickRecord};
pub use stone::Stone;
