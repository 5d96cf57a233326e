//! Result presentation.
//!
//! Renders a `GameResult` for people (headline, scores, stone cards in
//! picking order, and the turn-by-turn narrative) or as a single JSON
//! object. Rendering only reads the result.

use std::fmt::Write;

use serde::Serialize;

use crate::game::{GameResult, Outcome, PickRecord};

/// Explanation of why the greedy order is optimal, one step per line.
pub const HOW_IT_WORKS: [&str; 5] = [
    "1. When you pick a stone, you gain points AND prevent your opponent from gaining their points from that stone.",
    "2. Calculate the \"combined value\" for each stone: Alice's value + Bob's value.",
    "3. Sort all stones by combined value in descending order.",
    "4. Simulate optimal play: Alice picks 1st, 3rd, 5th... Bob picks 2nd, 4th, 6th...",
    "5. Time Complexity: O(n log n) for sorting, Space Complexity: O(n)",
];

/// Headline message for an outcome.
pub fn headline(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::FirstPlayerWins => "Alice Wins!",
        Outcome::SecondPlayerWins => "Bob Wins!",
        Outcome::Draw => "It's a Draw!",
    }
}

/// `Final Score - Alice: <a>, Bob: <b>`
pub fn score_line(result: &GameResult) -> String {
    format!(
        "Final Score - Alice: {}, Bob: {}",
        result.alice_score, result.bob_score
    )
}

/// One stone card, annotated with who took it and when.
pub fn stone_card(pick: &PickRecord) -> String {
    let stone = &pick.stone;
    format!(
        "Stone {} | A: {} | B: {} | Combined: {} | {} picks (turn {})",
        stone.index(),
        stone.alice_value(),
        stone.bob_value(),
        stone.combined_value(),
        pick.player.name(),
        pick.turn
    )
}

/// One line of the picking-order narrative.
pub fn narrative_line(pick: &PickRecord) -> String {
    format!(
        "{}. {} takes Stone {} (+{})",
        pick.turn,
        pick.player.name(),
        pick.stone.index(),
        pick.score_gained
    )
}

/// Renders the full human-readable report.
pub fn render_text(result: &GameResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", headline(result.outcome));
    let _ = writeln!(out, "{}", score_line(result));
    let _ = writeln!(out);
    let _ = writeln!(out, "Stones (sorted by optimal picking order):");
    for pick in &result.picks {
        let _ = writeln!(out, "  {}", stone_card(pick));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Optimal Strategy Analysis");
    let _ = writeln!(
        out,
        "Key Insight: Sort stones by their combined value (Alice's value + Bob's value) in descending order."
    );
    let _ = writeln!(
        out,
        "Why? Taking a stone gives you points AND denies your opponent points!"
    );
    let _ = writeln!(out, "Picking Order:");
    for pick in &result.picks {
        let _ = writeln!(out, "  {}", narrative_line(pick));
    }
    out
}

/// JSON view of a result: the outcome encoded as 1 / -1 / 0 plus the
/// headline alongside the full result.
#[derive(Serialize)]
struct JsonReport<'a> {
    result: i8,
    headline: &'static str,
    #[serde(flatten)]
    game: &'a GameResult,
}

/// Encodes a result as a single-line JSON object.
pub fn to_json(result: &GameResult) -> serde_json::Result<String> {
    serde_json::to_string(&JsonReport {
        result: result.outcome.sign(),
        headline: headline(result.outcome),
        game: result,
    })
}
