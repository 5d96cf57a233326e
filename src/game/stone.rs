//! Stones and their per-player values.

use serde::Serialize;

use super::player::Player;

/// A single stone, identified by its position in the input sequences.
///
/// Fields are private so the combined value can never drift from the sum
/// of the two player values after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Stone {
    index: usize,
    alice_value: i64,
    bob_value: i64,
    combined_value: i64,
}

impl Stone {
    /// Builds a stone. Returns `None` if the combined value overflows `i64`.
    pub fn new(index: usize, alice_value: i64, bob_value: i64) -> Option<Stone> {
        let combined_value = alice_value.checked_add(bob_value)?;
        Some(Stone {
            index,
            alice_value,
            bob_value,
            combined_value,
        })
    }

    /// 0-based position of the stone in the original input.
    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn alice_value(&self) -> i64 {
        self.alice_value
    }

    pub const fn bob_value(&self) -> i64 {
        self.bob_value
    }

    /// Sum of both player values; the greedy sort key.
    pub const fn combined_value(&self) -> i64 {
        self.combined_value
    }

    /// The reward this stone yields to the given player.
    pub const fn value_for(&self, player: Player) -> i64 {
        match player {
            Player::Alice => self.alice_value,
            Player::Bob => self.bob_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_value_is_sum() {
        let s = Stone::new(2, 4, 6).unwrap();
        assert_eq!(s.index(), 2);
        assert_eq!(s.combined_value(), 10);
        assert_eq!(s.value_for(Player::Alice), 4);
        assert_eq!(s.value_for(Player::Bob), 6);
    }

    #[test]
    fn overflow_is_rejected() {
        assert!(Stone::new(0, i64::MAX, 1).is_none());
        assert!(Stone::new(0, i64::MIN, -1).is_none());
        assert!(Stone::new(0, i64::MAX, -1).is_some());
    }
}
