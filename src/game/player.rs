//! Players and game outcomes.

use serde::{Deserialize, Serialize};

/// One of the two players. Alice always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Alice,
    Bob,
}

impl Player {
    /// Returns the player who acts on the given 0-based turn index when
    /// `first` opened the game.
    pub const fn for_turn_from(first: Player, turn: usize) -> Player {
        if turn % 2 == 0 {
            first
        } else {
            first.opponent()
        }
    }

    /// Returns the other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::Alice => Player::Bob,
            Player::Bob => Player::Alice,
        }
    }

    /// Display name used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Player::Alice => "Alice",
            Player::Bob => "Bob",
        }
    }

    /// Lowercase token used on the line protocol.
    pub const fn token(self) -> &'static str {
        match self {
            Player::Alice => "alice",
            Player::Bob => "bob",
        }
    }

    /// Parses a player from its protocol token, case-insensitively. The
    /// initials `a` and `b` are accepted as abbreviations.
    pub fn from_token(s: &str) -> Option<Player> {
        match s.to_ascii_lowercase().as_str() {
            "alice" | "a" => Some(Player::Alice),
            "bob" | "b" => Some(Player::Bob),
            _ => None,
        }
    }
}

/// Result of a fully resolved game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    FirstPlayerWins,
    SecondPlayerWins,
    Draw,
}

impl Outcome {
    /// Derives the outcome from the two final scores.
    pub fn from_scores(alice: i64, bob: i64) -> Outcome {
        match alice.cmp(&bob) {
            std::cmp::Ordering::Greater => Outcome::FirstPlayerWins,
            std::cmp::Ordering::Less => Outcome::SecondPlayerWins,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Integer encoding: 1 when Alice wins, -1 when Bob wins, 0 on a draw.
    pub const fn sign(self) -> i8 {
        match self {
            Outcome::FirstPlayerWins => 1,
            Outcome::SecondPlayerWins => -1,
            Outcome::Draw => 0,
        }
    }

    /// The outcome seen with the roles of the two players exchanged.
    pub const fn mirrored(self) -> Outcome {
        match self {
            Outcome::FirstPlayerWins => Outcome::SecondPlayerWins,
            Outcome::SecondPlayerWins => Outcome::FirstPlayerWins,
            Outcome::Draw => Outcome::Draw,
        }
    }

    /// Short token used on the line protocol and in batch summaries.
    pub const fn token(self) -> &'static str {
        match self {
            Outcome::FirstPlayerWins => "alice-wins",
            Outcome::SecondPlayerWins => "bob-wins",
            Outcome::Draw => "draw",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn players_alternate_from_alice() {
        assert_eq!(Player::for_turn_from(Player::Alice, 0), Player::Alice);
        assert_eq!(Player::for_turn_from(Player::Alice, 1), Player::Bob);
        assert_eq!(Player::for_turn_from(Player::Alice, 2), Player::Alice);
        assert_eq!(Player::for_turn_from(Player::Alice, 7), Player::Bob);
        assert_eq!(Player::for_turn_from(Player::Bob, 0), Player::Bob);
        assert_eq!(Player::for_turn_from(Player::Bob, 1), Player::Alice);
    }

    #[test]
    fn player_token_parsing() {
        assert_eq!(Player::from_token("alice"), Some(Player::Alice));
        assert_eq!(Player::from_token("BOB"), Some(Player::Bob));
        assert_eq!(Player::from_token("a"), Some(Player::Alice));
        assert_eq!(Player::from_token("B"), Some(Player::Bob));
        assert_eq!(Player::from_token("carol"), None);
        for p in [Player::Alice, Player::Bob] {
            assert_eq!(Player::from_token(p.token()), Some(p));
            assert_eq!(p.opponent().opponent(), p);
        }
    }

    #[test]
    fn outcome_from_scores() {
        assert_eq!(Outcome::from_scores(3, 2), Outcome::FirstPlayerWins);
        assert_eq!(Outcome::from_scores(6, 7), Outcome::SecondPlayerWins);
        assert_eq!(Outcome::from_scores(0, 0), Outcome::Draw);
    }

    #[test]
    fn outcome_sign_and_mirror() {
        assert_eq!(Outcome::FirstPlayerWins.sign(), 1);
        assert_eq!(Outcome::SecondPlayerWins.sign(), -1);
        assert_eq!(Outcome::Draw.sign(), 0);
        assert_eq!(Outcome::FirstPlayerWins.mirrored(), Outcome::SecondPlayerWins);
        assert_eq!(Outcome::Draw.mirrored(), Outcome::Draw);
    }
}
