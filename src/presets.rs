//! Canned example games.
//!
//! Each preset is the raw text a user would type, so loading one goes
//! through the same parse and validation path as typed input.

/// A canned pair of value-list texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub alice: &'static str,
    pub bob: &'static str,
}

/// Built-in examples, numbered from 1 on the protocol.
pub const PRESETS: [Preset; 3] = [
    Preset {
        alice: "[1,3]",
        bob: "[2,1]",
    },
    Preset {
        alice: "[1,2]",
        bob: "[3,1]",
    },
    Preset {
        alice: "[2,4,3]",
        bob: "[1,6,7]",
    },
];

/// Returns the preset with the given 1-based number.
pub fn preset(number: usize) -> Option<Preset> {
    number.checked_sub(1).and_then(|i| PRESETS.get(i)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Outcome;
    use crate::protocol::{parse_values, validate};
    use crate::resolve::resolve;

    #[test]
    fn preset_lookup_is_one_based() {
        assert_eq!(preset(0), None);
        assert_eq!(preset(1).unwrap().alice, "[1,3]");
        assert_eq!(preset(3).unwrap().bob, "[1,6,7]");
        assert_eq!(preset(4), None);
    }

    #[test]
    fn presets_cover_every_outcome() {
        let outcomes: Vec<Outcome> = PRESETS
            .iter()
            .map(|p| {
                let alice = parse_values(p.alice).unwrap();
                let bob = parse_values(p.bob).unwrap();
                validate(&alice, &bob).unwrap();
                resolve(&alice, &bob).unwrap().outcome
            })
            .collect();
        assert_eq!(
            outcomes,
            vec![
                Outcome::FirstPlayerWins,
                Outcome::Draw,
                Outcome::SecondPlayerWins
            ]
        );
    }
}
