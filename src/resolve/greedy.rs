//! Greedy resolver.
//!
//! Taking a stone gains its value for the mover and denies the opponent
//! their value for the same stone, so the swing in score difference from
//! taking stone `s` is `alice_value(s) + bob_value(s)` whichever player
//! moves. Both players therefore take the remaining stone with the largest
//! combined value, and one descending sort fixes the whole game. Stones
//! with equal combined values are interchangeable: any order among them
//! yields the same score difference and so the same outcome. The individual
//! scores may shift, since swapping two tied stones moves equal amounts
//! onto both sides.

use crate::game::{Game, GameResult, Player, Stone};

/// Failures inside the resolver itself.
///
/// None of these are reachable for inputs that passed validation; they guard
/// direct callers passing unchecked sequences.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("value sequences differ in length: alice has {alice}, bob has {bob}")]
    LengthMismatch { alice: usize, bob: usize },

    #[error("combined value of stone {index} overflows")]
    CombinedOverflow { index: usize },

    #[error("{} score overflows", .player.name())]
    ScoreOverflow { player: Player },
}

/// Ordering applied among stones with equal combined value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Lower original index first.
    #[default]
    Stable,
    /// Higher original index first.
    Reversed,
}

/// Resolves games under a fixed tie-break policy.
#[derive(Debug, Clone, Copy)]
pub struct Resolver {
    tie_break: TieBreak,
    first: Player,
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver {
            tie_break: TieBreak::Stable,
            first: Player::Alice,
        }
    }
}

impl Resolver {
    /// Creates a resolver with the stable tie-break and Alice moving first.
    pub fn new() -> Self {
        Resolver::default()
    }

    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Resolver {
            tie_break,
            ..Resolver::default()
        }
    }

    /// Lets `first` open the game. Turns still strictly alternate.
    pub fn first_player(mut self, first: Player) -> Self {
        self.first = first;
        self
    }

    /// Sorts stones into picking order: combined value descending, ties
    /// broken by original index according to the policy.
    pub fn order(&self, stones: &mut [Stone]) {
        match self.tie_break {
            TieBreak::Stable => stones.sort_unstable_by(|a, b| {
                b.combined_value()
                    .cmp(&a.combined_value())
                    .then_with(|| a.index().cmp(&b.index()))
            }),
            TieBreak::Reversed => stones.sort_unstable_by(|a, b| {
                b.combined_value()
                    .cmp(&a.combined_value())
                    .then_with(|| b.index().cmp(&a.index()))
            }),
        }
    }

    /// Resolves one game: build stones, sort, simulate, report.
    pub fn resolve(&self, alice: &[i64], bob: &[i64]) -> Result<GameResult, ResolutionError> {
        let mut stones = build_stones(alice, bob)?;
        self.order(&mut stones);
        log::debug!(
            "resolving {} stones (tie-break {:?}, {} first)",
            stones.len(),
            self.tie_break,
            self.first.name()
        );
        play(Game::with_first(stones, self.first))
    }
}

/// Pairs the two value sequences into stones indexed by position.
pub fn build_stones(alice: &[i64], bob: &[i64]) -> Result<Vec<Stone>, ResolutionError> {
    if alice.len() != bob.len() {
        return Err(ResolutionError::LengthMismatch {
            alice: alice.len(),
            bob: bob.len(),
        });
    }
    alice
        .iter()
        .zip(bob)
        .enumerate()
        .map(|(i, (&a, &b))| {
            Stone::new(i, a, b).ok_or(ResolutionError::CombinedOverflow { index: i })
        })
        .collect()
}

/// Plays stones in exactly the given order, Alice first, and returns the
/// result. The caller is responsible for the order being optimal.
pub fn simulate(stones: Vec<Stone>) -> Result<GameResult, ResolutionError> {
    play(Game::new(stones))
}

fn play(mut game: Game) -> Result<GameResult, ResolutionError> {
    while let Some(pick) = game.play_turn()?.copied() {
        log::trace!(
            "turn {}: {} takes stone {} (+{}, total {})",
            pick.turn,
            pick.player.name(),
            pick.stone.index(),
            pick.score_gained,
            game.score(pick.player)
        );
    }
    game.finish()
}

/// Resolves one game with the default resolver.
pub fn resolve(alice: &[i64], bob: &[i64]) -> Result<GameResult, ResolutionError> {
    Resolver::new().resolve(alice, bob)
}
