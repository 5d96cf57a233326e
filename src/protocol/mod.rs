//! Boundary protocol handling.
//!
//! Parsing of value lists and command lines, validation of parsed input
//! against the domain policy, and rendering of results.

pub mod parser;
pub mod report;
pub mod validate;
pub mod values;

pub use parser::{parse_command, Command};
pub use report::{headline, render_text, to_json, HOW_IT_WORKS};
pub use validate::{validate, ValidationError, ValidationPolicy};
pub use values::{parse_values, ParseError};
