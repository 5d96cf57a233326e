//! Line command parser.
//!
//! Parses incoming protocol lines into structured `Command` variants that
//! the main loop can dispatch on.

use crate::game::Player;

/// A parsed client command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set one player's raw value-list text: `alice <values>` / `bob <values>`
    /// (also `a` / `b`, any case).
    Values { player: Player, raw: String },

    /// Load a canned example into both inputs: `example <n>` (1-based).
    Example { number: usize },

    /// Parse, validate, and resolve the current inputs.
    Calculate,

    /// Print the explanation of the optimal strategy.
    Explain,

    /// Clear inputs, result, and error.
    Reset,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "isready" => Some(Command::IsReady),
        "calculate" => Some(Command::Calculate),
        "explain" => Some(Command::Explain),
        "reset" => Some(Command::Reset),
        "quit" => Some(Command::Quit),

        "example" => parse_example(&tokens),
        "setoption" => parse_setoption(&tokens),

        other => match Player::from_token(other) {
            Some(player) => parse_values(player, other, trimmed),
            None => {
                log::warn!("unknown command: {}", other);
                None
            }
        },
    }
}

/// Parses `<player> <values>`, keeping everything after the keyword
/// verbatim so the value-list parser sees the original spacing.
fn parse_values(player: Player, keyword: &str, full_line: &str) -> Option<Command> {
    let raw = full_line
        .strip_prefix(keyword)
        .unwrap_or("")
        .trim()
        .to_string();
    if raw.is_empty() {
        log::warn!("malformed {}: expected '{} <values>'", keyword, player.token());
        return None;
    }
    Some(Command::Values { player, raw })
}

/// Parses `example <n>`.
fn parse_example(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        log::warn!("malformed example: expected 'example <n>'");
        return None;
    }
    match tokens[1].parse::<usize>() {
        Ok(number) => Some(Command::Example { number }),
        Err(_) => {
            log::warn!("invalid example number: '{}'", tokens[1]);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        log::warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                log::warn!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("isready"), Some(Command::IsReady));
        assert_eq!(parse_command("calculate"), Some(Command::Calculate));
        assert_eq!(parse_command("explain"), Some(Command::Explain));
        assert_eq!(parse_command("reset"), Some(Command::Reset));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn parse_empty_line_returns_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
        assert_eq!(parse_command("\t"), None);
    }

    #[test]
    fn parse_unknown_command_returns_none() {
        assert_eq!(parse_command("foobar"), None);
    }

    #[test]
    fn parse_values_keeps_raw_text() {
        assert_eq!(
            parse_command("alice [1, 3 ,5]"),
            Some(Command::Values {
                player: Player::Alice,
                raw: "[1, 3 ,5]".to_string(),
            })
        );
        assert_eq!(
            parse_command("  bob 2,1  "),
            Some(Command::Values {
                player: Player::Bob,
                raw: "2,1".to_string(),
            })
        );
    }

    #[test]
    fn parse_values_accepts_abbreviated_player() {
        assert_eq!(
            parse_command("a 1,3"),
            Some(Command::Values {
                player: Player::Alice,
                raw: "1,3".to_string(),
            })
        );
        assert_eq!(
            parse_command("BOB [2, 1]"),
            Some(Command::Values {
                player: Player::Bob,
                raw: "[2, 1]".to_string(),
            })
        );
        assert_eq!(parse_command("b"), None);
    }

    #[test]
    fn parse_values_without_text_returns_none() {
        assert_eq!(parse_command("alice"), None);
        assert_eq!(parse_command("bob   "), None);
    }

    #[test]
    fn parse_example_number() {
        assert_eq!(parse_command("example 2"), Some(Command::Example { number: 2 }));
        assert_eq!(parse_command("example"), None);
        assert_eq!(parse_command("example two"), None);
    }

    #[test]
    fn parse_setoption_with_value() {
        assert_eq!(
            parse_command("setoption name MaxValue value 1000"),
            Some(Command::SetOption {
                name: "MaxValue".to_string(),
                value: Some("1000".to_string()),
            })
        );
    }

    #[test]
    fn parse_setoption_no_value() {
        assert_eq!(
            parse_command("setoption name Format"),
            Some(Command::SetOption {
                name: "Format".to_string(),
                value: None,
            })
        );
    }

    #[test]
    fn parse_setoption_malformed_returns_none() {
        assert_eq!(parse_command("setoption"), None);
        assert_eq!(parse_command("setoption foo"), None);
        assert_eq!(parse_command("setoption name value 3"), None);
    }

    #[test]
    fn parse_with_leading_trailing_whitespace() {
        assert_eq!(parse_command("  isready  "), Some(Command::IsReady));
    }
}
