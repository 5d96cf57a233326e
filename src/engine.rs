//! Engine state management.
//!
//! Holds the raw text of both inputs, engine options, and the last result
//! between commands. `calculate` runs the full pipeline: parse both value
//! lists, validate them against the configured policy, resolve, and report.

use std::collections::HashMap;
use std::io::{self, Write};

use crate::game::{GameResult, Player};
use crate::presets::preset;
use crate::protocol::report::{render_text, to_json, HOW_IT_WORKS};
use crate::protocol::validate::{ValidationError, ValidationPolicy};
use crate::protocol::values::{parse_values, ParseError};
use crate::resolve::{ResolutionError, Resolver};

/// Anything that stops a calculation from producing a result.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Internal failure; the detail is logged, the caller sees a generic message.
    #[error("An error occurred during calculation")]
    Resolution(#[from] ResolutionError),

    #[error("Unknown example {0}")]
    UnknownExample(usize),
}

/// How `calculate` writes its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub alice_input: String,
    pub bob_input: String,
    pub options: HashMap<String, String>,
    pub result: Option<GameResult>,
    pub error: Option<String>,
    resolver: Resolver,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

impl Engine {
    /// Creates an engine with empty inputs and default options.
    pub fn new() -> Self {
        Engine {
            alice_input: String::new(),
            bob_input: String::new(),
            options: HashMap::new(),
            result: None,
            error: None,
            resolver: Resolver::new(),
        }
    }

    /// Clears inputs, the last result, and the last error. Options are kept.
    pub fn reset(&mut self) {
        self.alice_input.clear();
        self.bob_input.clear();
        self.result = None;
        self.error = None;
    }

    /// Replaces one player's raw input text.
    pub fn set_values(&mut self, player: Player, raw: String) {
        match player {
            Player::Alice => self.alice_input = raw,
            Player::Bob => self.bob_input = raw,
        }
    }

    /// Loads a canned example into both inputs and clears the last error.
    pub fn load_example(&mut self, number: usize) -> Result<(), EngineError> {
        let p = preset(number).ok_or(EngineError::UnknownExample(number))?;
        self.alice_input = p.alice.to_string();
        self.bob_input = p.bob.to_string();
        self.error = None;
        Ok(())
    }

    /// Sets an engine option.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        self.options.insert(name, value.unwrap_or_default());
    }

    /// Reads a numeric option, falling back to `default` when absent or
    /// unparsable.
    fn numeric_option<T: std::str::FromStr + Copy>(&self, name: &str, default: T) -> T {
        match self.options.get(name) {
            Some(v) => v.parse::<T>().unwrap_or_else(|_| {
                log::warn!("ignoring invalid {} value '{}'", name, v);
                default
            }),
            None => default,
        }
    }

    /// Returns the validation policy configured through options.
    pub fn policy(&self) -> ValidationPolicy {
        let defaults = ValidationPolicy::default();
        ValidationPolicy {
            min_value: self.numeric_option("MinValue", defaults.min_value),
            max_value: self.numeric_option("MaxValue", defaults.max_value),
            max_stones: self.numeric_option("MaxStones", defaults.max_stones),
        }
    }

    /// Returns the configured output format (default text).
    pub fn output_format(&self) -> OutputFormat {
        match self.options.get("Format").map(|v| v.to_ascii_lowercase()) {
            Some(v) if v == "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }

    /// Parses, validates, and resolves the current inputs.
    ///
    /// On failure the previous result is cleared and the user-facing message
    /// is kept in `self.error`.
    pub fn calculate(&mut self) -> Result<&GameResult, EngineError> {
        self.result = None;
        self.error = None;
        match self.run_pipeline() {
            Ok(result) => Ok(self.result.insert(result)),
            Err(e) => {
                if let EngineError::Resolution(inner) = &e {
                    log::error!("resolution failed on validated input: {}", inner);
                }
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn run_pipeline(&self) -> Result<GameResult, EngineError> {
        let alice = parse_values(&self.alice_input)?;
        let bob = parse_values(&self.bob_input)?;
        self.policy().validate(&alice, &bob)?;
        Ok(self.resolver.resolve(&alice, &bob)?)
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles the `calculate` command.
    ///
    /// Text format writes `result <outcome> <alice> <bob>`, the report, and a
    /// closing `done`. JSON format writes `result <json>` on one line. Any
    /// failure is written as `error <message>`.
    pub fn handle_calculate<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let format = self.output_format();
        match self.calculate() {
            Ok(result) => match format {
                OutputFormat::Text => {
                    writeln!(
                        out,
                        "result {} {} {}",
                        result.outcome.token(),
                        result.alice_score,
                        result.bob_score
                    )?;
                    out.write_all(render_text(result).as_bytes())?;
                    writeln!(out, "done")?;
                }
                OutputFormat::Json => {
                    let json = to_json(result).map_err(io::Error::other)?;
                    writeln!(out, "result {}", json)?;
                }
            },
            Err(e) => {
                writeln!(out, "error {}", e)?;
            }
        }
        out.flush()
    }

    /// Handles the `example` command.
    pub fn handle_example<W: Write>(&mut self, number: usize, out: &mut W) -> io::Result<()> {
        match self.load_example(number) {
            Ok(()) => {
                writeln!(out, "alice {}", self.alice_input)?;
                writeln!(out, "bob {}", self.bob_input)?;
            }
            Err(e) => writeln!(out, "error {}", e)?,
        }
        out.flush()
    }

    /// Handles the `explain` command.
    pub fn handle_explain<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "How it works")?;
        for line in HOW_IT_WORKS {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }
}
