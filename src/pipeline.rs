//! Pipeline functions for programmatic use by the CLI.
//!
//! Fan-out over season game logs, leaderboard selection, and text/CSV
//! rendering, returning structured data instead of printing directly where
//! practical.

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use crate::leaderboard::select_leaderboard;
use crate::streaks::{process_gamelog, StreakRecord};

// ============================================================================
// Parallel fan-out
// ============================================================================

/// Process every game log on the current rayon pool, one task per file,
/// and merge the per-file batches into one list.
///
/// Completion order across files is unspecified; callers re-sort. Any file
/// failing to parse aborts the whole run with the offending path attached,
/// producing no partial results.
pub fn collect_streaks(
    game_logs: &[PathBuf],
    include_teams: Option<&HashSet<String>>,
) -> Result<Vec<StreakRecord>> {
    let batches: Vec<Vec<StreakRecord>> = game_logs
        .par_iter()
        .map(|path| {
            process_gamelog(path, include_teams)
                .with_context(|| format!("failed to process game log {}", path.display()))
        })
        .collect::<Result<_>>()?;

    let records: Vec<StreakRecord> = batches.into_iter().flatten().collect();
    log::info!(
        "{} streak records from {} game logs",
        records.len(),
        game_logs.len()
    );
    Ok(records)
}

/// Run the full pipeline: fan out over the game logs, then sort and prune
/// to the tie-inclusive leaderboard.
pub fn build_leaderboard(
    game_logs: &[PathBuf],
    include_teams: Option<&HashSet<String>>,
    limit: usize,
) -> Result<Vec<StreakRecord>> {
    let mut records = collect_streaks(game_logs, include_teams)?;
    select_leaderboard(&mut records, limit);
    Ok(records)
}

// ============================================================================
// Rendering
// ============================================================================

/// One CSV output row, in the column order the reports have always used.
#[derive(Serialize)]
struct CsvRow<'a> {
    year: u16,
    team: &'a str,
    length: usize,
    palindrome: String,
    game_start: u16,
    game_end: u16,
    wins: usize,
    losses: usize,
    ties: usize,
}

impl<'a> From<&'a StreakRecord> for CsvRow<'a> {
    fn from(record: &'a StreakRecord) -> Self {
        Self {
            year: record.year,
            team: &record.team,
            length: record.len(),
            palindrome: record.pattern(),
            game_start: record.game_start,
            game_end: record.game_end,
            wins: record.wins(),
            losses: record.losses(),
            ties: record.ties(),
        }
    }
}

/// Write the leaderboard as line-oriented text, one record per line.
pub fn write_text<W: io::Write>(records: &[StreakRecord], out: &mut W) -> Result<()> {
    for record in records {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

/// Write the leaderboard as CSV with a header row.
pub fn write_csv(records: &[StreakRecord], csv_file: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(csv_file)
        .with_context(|| format!("failed to create {}", csv_file.display()))?;
    for record in records {
        writer.serialize(CsvRow::from(record))?;
    }
    writer.flush()?;
    Ok(())
}
