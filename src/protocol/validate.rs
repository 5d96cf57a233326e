//! Input validation.
//!
//! Domain limits live in a `ValidationPolicy` so they can be tuned without
//! touching the resolver, which is correct for any integers.

use serde::{Deserialize, Serialize};

use crate::game::Player;

/// Default smallest accepted stone value.
pub const DEFAULT_MIN_VALUE: i64 = 1;
/// Default largest accepted stone value.
pub const DEFAULT_MAX_VALUE: i64 = 100;
/// Default largest accepted number of stones.
pub const DEFAULT_MAX_STONES: usize = 100_000;

/// Bounds applied to parsed input before resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    pub min_value: i64,
    pub max_value: i64,
    pub max_stones: usize,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        ValidationPolicy {
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            max_stones: DEFAULT_MAX_STONES,
        }
    }
}

/// A domain constraint violated by otherwise well-formed input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Arrays cannot be empty")]
    EmptyArray,

    #[error("Alice and Bob arrays must have the same length")]
    LengthMismatch { alice: usize, bob: usize },

    #[error("Array length cannot exceed {}", group_thousands(.max))]
    TooManyStones { len: usize, max: usize },

    #[error("All values must be between {min} and {max}")]
    ValueOutOfRange {
        player: Player,
        index: usize,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl ValidationPolicy {
    /// Returns true if `value` lies within the inclusive bounds.
    pub fn accepts(&self, value: i64) -> bool {
        (self.min_value..=self.max_value).contains(&value)
    }

    /// Checks both sequences against the policy. Checks run in a fixed
    /// order (empty, length mismatch, length limit, value range) and the
    /// first violation is reported.
    pub fn validate(&self, alice: &[i64], bob: &[i64]) -> Result<(), ValidationError> {
        if alice.is_empty() || bob.is_empty() {
            return Err(ValidationError::EmptyArray);
        }
        if alice.len() != bob.len() {
            return Err(ValidationError::LengthMismatch {
                alice: alice.len(),
                bob: bob.len(),
            });
        }
        if alice.len() > self.max_stones {
            return Err(ValidationError::TooManyStones {
                len: alice.len(),
                max: self.max_stones,
            });
        }
        for (player, values) in [(Player::Alice, alice), (Player::Bob, bob)] {
            if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !self.accepts(**v)) {
                return Err(ValidationError::ValueOutOfRange {
                    player,
                    index,
                    value,
                    min: self.min_value,
                    max: self.max_value,
                });
            }
        }
        Ok(())
    }
}

/// Validates with the default policy.
pub fn validate(alice: &[i64], bob: &[i64]) -> Result<(), ValidationError> {
    ValidationPolicy::default().validate(alice, bob)
}

/// Formats an integer with comma thousands separators: `100000` -> `100,000`.
fn group_thousands(n: &usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_input() {
        assert!(validate(&[1, 3], &[2, 1]).is_ok());
        assert!(validate(&[100, 1], &[1, 100]).is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(validate(&[], &[]), Err(ValidationError::EmptyArray));
        assert_eq!(validate(&[1], &[]), Err(ValidationError::EmptyArray));
        assert_eq!(
            ValidationError::EmptyArray.to_string(),
            "Arrays cannot be empty"
        );
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = validate(&[1, 2], &[1]).unwrap_err();
        assert_eq!(err, ValidationError::LengthMismatch { alice: 2, bob: 1 });
        assert_eq!(
            err.to_string(),
            "Alice and Bob arrays must have the same length"
        );
    }

    #[test]
    fn rejects_too_many_stones() {
        let values = vec![1i64; 100_001];
        let err = validate(&values, &values).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooManyStones {
                len: 100_001,
                max: 100_000
            }
        );
        assert_eq!(err.to_string(), "Array length cannot exceed 100,000");

        let values = vec![1i64; 100_000];
        assert!(validate(&values, &values).is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = validate(&[1, 0], &[1, 1]).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ValueOutOfRange {
                player: Player::Alice,
                index: 1,
                value: 0,
                ..
            }
        ));
        assert_eq!(err.to_string(), "All values must be between 1 and 100");

        let err = validate(&[1, 1], &[101, 1]).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ValueOutOfRange {
                player: Player::Bob,
                index: 0,
                value: 101,
                ..
            }
        ));
    }

    #[test]
    fn custom_policy_bounds() {
        let policy = ValidationPolicy {
            min_value: 0,
            max_value: 1000,
            max_stones: 2,
        };
        assert!(policy.validate(&[0, 1000], &[500, 0]).is_ok());
        assert_eq!(
            policy.validate(&[1, 1, 1], &[1, 1, 1]).unwrap_err().to_string(),
            "Array length cannot exceed 2"
        );
        assert_eq!(
            policy.validate(&[1001], &[1]).unwrap_err().to_string(),
            "All values must be between 0 and 1000"
        );
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(&0), "0");
        assert_eq!(group_thousands(&999), "999");
        assert_eq!(group_thousands(&1000), "1,000");
        assert_eq!(group_thousands(&100_000), "100,000");
        assert_eq!(group_thousands(&1_234_567), "1,234,567");
    }
}
