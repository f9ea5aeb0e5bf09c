//! Headless replay: apply a script of intents and report the result.

use anyhow::{Context, Result};
use rewind_engine::{GameState, GameView, Intent, SortOrder};
use std::fmt::Write;
use tracing::{info, instrument, warn};

/// Applies every token in `script` to a fresh game and renders the outcome.
///
/// Rejected intents are reported but do not stop the replay; a token that
/// does not parse is an error.
#[instrument(skip(script), fields(tokens = script.len()))]
pub fn run(script: &[String], sort_order: SortOrder, json: bool) -> Result<String> {
    let mut game = GameState::with_sort_order(sort_order);
    let mut ignored = Vec::new();

    for token in script {
        let intent: Intent = token
            .parse()
            .with_context(|| format!("Invalid replay script at '{}'", token))?;
        if let Err(e) = game.apply(intent) {
            warn!(%intent, error = %e, "Intent ignored");
            ignored.push(format!("{}: {}", intent, e));
        }
    }

    info!(
        history_len = game.history().len(),
        current_move = game.current_move(),
        ignored = ignored.len(),
        "Replay finished"
    );

    let view = game.view();
    if json {
        serde_json::to_string_pretty(&view).context("Failed to serialize game view")
    } else {
        Ok(render_text(&view, &ignored))
    }
}

fn render_text(view: &GameView, ignored: &[String]) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", view.board());
    let _ = writeln!(out);
    let _ = write!(out, "{}", view.status());
    if *view.is_draw() {
        let _ = write!(out, " (board full, draw)");
    }
    let _ = writeln!(out);
    if let Some(line) = view.winning_line() {
        let cells: Vec<String> = line.cells.iter().map(|p| p.to_index().to_string()).collect();
        let _ = writeln!(out, "Winning line: {}", cells.join(", "));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "History ({}):", view.sort_order());
    for item in view.history() {
        let marker = if *item.is_current() { ">" } else { " " };
        let _ = writeln!(out, "{} {}", marker, item);
    }

    for note in ignored {
        let _ = writeln!(out, "Ignored {}", note);
    }
    out
}
