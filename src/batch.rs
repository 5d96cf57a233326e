//! Batch resolution.
//!
//! Resolves many games at once, either read from JSONL input or generated
//! from a seeded random source, and writes one JSONL record per game.
//! Every game is independent, so with more than one thread the games are
//! spread over a rayon pool; output order always matches input order.

use std::io::{BufRead, Write};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::game::{Outcome, PickRecord};
use crate::protocol::validate::ValidationPolicy;
use crate::resolve::Resolver;

/// Configuration for a batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Number of parallel threads; 1 resolves sequentially.
    pub threads: usize,
    /// Bounds applied to every game before resolution.
    pub policy: ValidationPolicy,
    /// Include the full pick log in each record.
    pub full: bool,
    /// Suppress progress logging.
    pub quiet: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            threads: 4,
            policy: ValidationPolicy::default(),
            full: false,
            quiet: false,
        }
    }
}

/// Parameters for generating random games.
#[derive(Debug, Clone, Copy)]
pub struct RandomGames {
    pub count: usize,
    pub stones: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
}

/// One input game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchGame {
    #[serde(default)]
    pub id: Option<String>,
    pub alice: Vec<i64>,
    pub bob: Vec<i64>,
}

/// One output record. Exactly one of `outcome` and `error` is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRecord {
    pub id: String,
    pub stones: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alice_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bob_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picks: Option<Vec<PickRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Errors reading batch input.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid game on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Counts of outcomes across a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub games: usize,
    pub alice_wins: usize,
    pub bob_wins: usize,
    pub draws: usize,
    pub errors: usize,
}

/// Reads games from JSONL, one object per line. Blank lines are skipped.
pub fn read_games<R: BufRead>(reader: R) -> Result<Vec<BatchGame>, BatchError> {
    let mut games = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let game = serde_json::from_str(&line).map_err(|source| BatchError::Json {
            line: i + 1,
            source,
        })?;
        games.push(game);
    }
    Ok(games)
}

/// Generates random games with values drawn uniformly from the policy range.
pub fn random_games(params: &RandomGames, policy: &ValidationPolicy) -> Vec<BatchGame> {
    let mut rng = if params.seed != 0 {
        SmallRng::seed_from_u64(params.seed)
    } else {
        SmallRng::from_entropy()
    };
    let (lo, hi) = (policy.min_value, policy.max_value.max(policy.min_value));

    (0..params.count)
        .map(|i| {
            let alice = (0..params.stones).map(|_| rng.gen_range(lo..=hi)).collect();
            let bob = (0..params.stones).map(|_| rng.gen_range(lo..=hi)).collect();
            BatchGame {
                id: Some(format!("random-{}", i)),
                alice,
                bob,
            }
        })
        .collect()
}

/// Validates and resolves a single game into its output record.
pub fn resolve_game(
    game: &BatchGame,
    index: usize,
    config: &BatchConfig,
    resolver: &Resolver,
) -> BatchRecord {
    let mut record = BatchRecord {
        id: game.id.clone().unwrap_or_else(|| index.to_string()),
        stones: game.alice.len(),
        outcome: None,
        alice_score: None,
        bob_score: None,
        picks: None,
        error: None,
    };

    if let Err(e) = config.policy.validate(&game.alice, &game.bob) {
        record.error = Some(e.to_string());
        return record;
    }

    match resolver.resolve(&game.alice, &game.bob) {
        Ok(result) => {
            record.outcome = Some(result.outcome);
            record.alice_score = Some(result.alice_score);
            record.bob_score = Some(result.bob_score);
            if config.full {
                record.picks = Some(result.picks);
            }
        }
        Err(e) => {
            log::error!("game {}: {}", record.id, e);
            record.error = Some("An error occurred during calculation".to_string());
        }
    }
    record
}

/// Resolves every game, in parallel when `config.threads > 1`.
pub fn run_batch(games: &[BatchGame], config: &BatchConfig) -> Vec<BatchRecord> {
    let start = Instant::now();
    let records = if config.threads > 1 {
        run_batch_parallel(games, config)
    } else {
        run_batch_sequential(games, config)
    };
    if !config.quiet {
        log::info!(
            "resolved {} games in {:.3}s on {} thread(s)",
            records.len(),
            start.elapsed().as_secs_f64(),
            config.threads.max(1)
        );
    }
    records
}

fn run_batch_sequential(games: &[BatchGame], config: &BatchConfig) -> Vec<BatchRecord> {
    let resolver = Resolver::new();
    games
        .iter()
        .enumerate()
        .map(|(i, game)| resolve_game(game, i, config, &resolver))
        .collect()
}

fn run_batch_parallel(games: &[BatchGame], config: &BatchConfig) -> Vec<BatchRecord> {
    use rayon::prelude::*;

    let resolver = Resolver::new();
    let work = || {
        games
            .par_iter()
            .enumerate()
            .map(|(i, game)| resolve_game(game, i, config, &resolver))
            .collect::<Vec<BatchRecord>>()
    };

    match rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
    {
        Ok(pool) => pool.install(work),
        Err(e) => {
            log::warn!("failed to build thread pool ({}); using global pool", e);
            work()
        }
    }
}

/// Writes records as JSONL (one JSON object per line).
pub fn write_jsonl<W: Write>(records: &[BatchRecord], out: &mut W) -> std::io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Tallies outcomes across records.
pub fn summarize(records: &[BatchRecord]) -> BatchSummary {
    let mut summary = BatchSummary {
        games: records.len(),
        ..Default::default()
    };
    for record in records {
        match record.outcome {
            Some(Outcome::FirstPlayerWins) => summary.alice_wins += 1,
            Some(Outcome::SecondPlayerWins) => summary.bob_wins += 1,
            Some(Outcome::Draw) => summary.draws += 1,
            None => summary.errors += 1,
        }
    }
    summary
}

/// Logs a summary of a batch run.
pub fn log_summary(summary: &BatchSummary) {
    let pct = |n: usize| 100.0 * n as f64 / summary.games.max(1) as f64;
    log::info!("=== Batch Summary ===");
    log::info!("Games: {}", summary.games);
    log::info!("Alice wins: {} ({:.1}%)", summary.alice_wins, pct(summary.alice_wins));
    log::info!("Bob wins: {} ({:.1}%)", summary.bob_wins, pct(summary.bob_wins));
    log::info!("Draws: {} ({:.1}%)", summary.draws, pct(summary.draws));
    log::info!("Rejected: {}", summary.errors);
}
