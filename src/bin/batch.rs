//! Batch resolution CLI.
//!
//! Resolves games from a JSONL file (or stdin) or generates random ones, and
//! writes one JSONL result record per game.
//!
//! Usage:
//!   cargo run --release --bin batch -- [OPTIONS]

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use stonegame::batch::{self, BatchConfig, RandomGames};
use stonegame::protocol::validate::{
    ValidationPolicy, DEFAULT_MAX_STONES, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE,
};

#[derive(Parser, Debug)]
#[command(name = "batch", about = "Resolve many stone games in parallel")]
struct Args {
    /// JSONL file of {"id", "alice", "bob"} objects; `-` reads stdin
    #[arg(long, conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Generate this many random games instead of reading input
    #[arg(long)]
    random: Option<usize>,

    /// Stones per random game
    #[arg(long, default_value_t = 100)]
    stones: usize,

    /// Random seed, 0 for entropy
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of parallel threads
    #[arg(long, default_value_t = 4)]
    threads: usize,

    /// Smallest accepted stone value
    #[arg(long, default_value_t = DEFAULT_MIN_VALUE, allow_hyphen_values = true)]
    min_value: i64,

    /// Largest accepted stone value
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE)]
    max_value: i64,

    /// Largest accepted number of stones per game
    #[arg(long, default_value_t = DEFAULT_MAX_STONES)]
    max_stones: usize,

    /// Include the full pick log in each record
    #[arg(long)]
    full: bool,

    /// Output file path (default: stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Suppress summary output
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.min_value > args.max_value {
        bail!(
            "--min-value {} exceeds --max-value {}",
            args.min_value,
            args.max_value
        );
    }

    let config = BatchConfig {
        threads: args.threads.max(1),
        policy: ValidationPolicy {
            min_value: args.min_value,
            max_value: args.max_value,
            max_stones: args.max_stones,
        },
        full: args.full,
        quiet: args.quiet,
    };

    let games = match (&args.input, args.random) {
        (_, Some(count)) => batch::random_games(
            &RandomGames {
                count,
                stones: args.stones,
                seed: args.seed,
            },
            &config.policy,
        ),
        (Some(path), None) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            batch::read_games(BufReader::new(file))?
        }
        _ => batch::read_games(io::stdin().lock())?,
    };

    if !config.quiet {
        log::info!(
            "Batch: {} games, {} threads, values {}..={}, up to {} stones",
            games.len(),
            config.threads,
            config.policy.min_value,
            config.policy.max_value,
            config.policy.max_stones
        );
    }

    let records = batch::run_batch(&games, &config);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            batch::write_jsonl(&records, &mut BufWriter::new(file))
                .context("failed to write output")?;
            if !config.quiet {
                log::info!("Wrote {} records to {}", records.len(), path.display());
            }
        }
        None => {
            let stdout = io::stdout();
            batch::write_jsonl(&records, &mut BufWriter::new(stdout.lock()))
                .context("failed to write output")?;
        }
    }

    if !config.quiet {
        batch::log_summary(&batch::summarize(&records));
    }
    Ok(())
}
