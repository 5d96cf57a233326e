//! Per-resolution game state.
//!
//! A `Game` owns the stones in the order they will be picked, the two score
//! accumulators, and the append-only pick log. It is created fresh for each
//! resolution and consumed into a `GameResult` once every stone is taken.

use serde::Serialize;

use super::player::{Outcome, Player};
use super::stone::Stone;
use crate::resolve::ResolutionError;

/// One turn of play: who moved, what they took, and what it was worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PickRecord {
    /// 1-based turn number.
    pub turn: usize,
    pub player: Player,
    pub stone: Stone,
    pub score_gained: i64,
}

/// The complete, immutable result of one resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub outcome: Outcome,
    pub alice_score: i64,
    pub bob_score: i64,
    /// Stones in picking order.
    pub stones: Vec<Stone>,
    /// One record per stone, in turn order.
    pub picks: Vec<PickRecord>,
}

impl GameResult {
    /// Alice's score minus Bob's score, or `None` if the difference does
    /// not fit in an `i64`.
    pub fn margin(&self) -> Option<i64> {
        self.alice_score.checked_sub(self.bob_score)
    }
}

/// Mutable state of a game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    stones: Vec<Stone>,
    first: Player,
    alice_score: i64,
    bob_score: i64,
    turn: usize,
    picks: Vec<PickRecord>,
}

impl Game {
    /// Starts a game in which stones will be taken in the given order,
    /// Alice moving first.
    pub fn new(stones: Vec<Stone>) -> Self {
        Game::with_first(stones, Player::Alice)
    }

    /// Starts a game in which `first` takes the first stone.
    pub fn with_first(stones: Vec<Stone>, first: Player) -> Self {
        let picks = Vec::with_capacity(stones.len());
        Game {
            stones,
            first,
            alice_score: 0,
            bob_score: 0,
            turn: 0,
            picks,
        }
    }

    pub fn is_over(&self) -> bool {
        self.turn >= self.stones.len()
    }

    /// The player due to move, or `None` once every stone is taken.
    pub fn to_move(&self) -> Option<Player> {
        if self.is_over() {
            None
        } else {
            Some(Player::for_turn_from(self.first, self.turn))
        }
    }

    /// Current score for the given player.
    pub fn score(&self, player: Player) -> i64 {
        match player {
            Player::Alice => self.alice_score,
            Player::Bob => self.bob_score,
        }
    }

    /// Outcome implied by the current scores.
    pub fn outcome(&self) -> Outcome {
        Outcome::from_scores(self.alice_score, self.bob_score)
    }

    /// Plays the next turn: the player to move takes the next stone.
    ///
    /// Returns `Ok(None)` when the game is already over.
    pub fn play_turn(&mut self) -> Result<Option<&PickRecord>, ResolutionError> {
        let player = match self.to_move() {
            Some(p) => p,
            None => return Ok(None),
        };
        let stone = self.stones[self.turn];
        let gained = stone.value_for(player);

        let score = match player {
            Player::Alice => &mut self.alice_score,
            Player::Bob => &mut self.bob_score,
        };
        *score = score
            .checked_add(gained)
            .ok_or(ResolutionError::ScoreOverflow { player })?;

        self.turn += 1;
        self.picks.push(PickRecord {
            turn: self.turn,
            player,
            stone,
            score_gained: gained,
        });
        Ok(self.picks.last())
    }

    /// Plays every remaining turn.
    pub fn play_out(&mut self) -> Result<(), ResolutionError> {
        while self.play_turn()?.is_some() {}
        Ok(())
    }

    /// Consumes the game into its result. Remaining stones, if any, are
    /// played out first.
    pub fn finish(mut self) -> Result<GameResult, ResolutionError> {
        self.play_out()?;
        Ok(GameResult {
            outcome: self.outcome(),
            alice_score: self.alice_score,
            bob_score: self.bob_score,
            stones: self.stones,
            picks: self.picks,
        })
    }
}
