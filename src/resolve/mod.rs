//! Game resolution.
//!
//! Resolves a pair of value sequences into final scores and an outcome by
//! sorting stones on combined value and letting the players pick in turn.

pub mod greedy;

pub use greedy::{build_stones, resolve, simulate, ResolutionError, Resolver, TieBreak};
