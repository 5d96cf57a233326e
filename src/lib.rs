//! Stone game library.
//!
//! Two players alternately take stones, each stone being worth a different
//! amount to each player. The `resolve` module computes the outcome under
//! optimal play; `protocol` holds the text boundary (value-list parsing,
//! validation, reporting) used by the line-protocol binary and the batch
//! runner.

pub mod batch;
pub mod engine;
pub mod game;
pub mod presets;
pub mod protocol;
pub mod resolve;

pub use game::{GameResult, Outcome, PickRecord, Player, Stone};
pub use resolve::{resolve, ResolutionError, Resolver};
