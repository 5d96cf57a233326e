//! Stone game engine -- line protocol front end.
//!
//! Reads commands from stdin and writes responses to stdout. Diagnostics go
//! to stderr through `env_logger` (set `RUST_LOG` to change verbosity).

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use stonegame::engine::Engine;
use stonegame::protocol::parser::{parse_command, Command};

/// Runs the main protocol loop, reading commands from stdin and writing
/// responses to stdout.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                log::error!("failed to read stdin: {}", e);
                break;
            }
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        let response = match cmd {
            Command::IsReady => engine.handle_isready(&mut out),
            Command::Values { player, raw } => {
                engine.set_values(player, raw);
                Ok(())
            }
            Command::Example { number } => engine.handle_example(number, &mut out),
            Command::Calculate => engine.handle_calculate(&mut out),
            Command::Explain => engine.handle_explain(&mut out),
            Command::Reset => {
                engine.reset();
                Ok(())
            }
            Command::SetOption { name, value } => {
                engine.set_option(name, value);
                Ok(())
            }
            Command::Quit => break,
        };
        response.context("failed to write response")?;
    }

    out.flush().context("failed to flush stdout")?;
    Ok(())
}
