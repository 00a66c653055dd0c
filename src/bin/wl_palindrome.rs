//! Win/loss palindrome streak finder for Retrosheet season game logs.
//!
//! Processes each game log in parallel, finds every team's longest
//! palindromic run of outcomes, and prints a ranked leaderboard as text or
//! writes it as CSV.

use anyhow::Result;
use clap::Parser;
use gamelog_streaks::pipeline::{build_leaderboard, write_csv, write_text};
use std::collections::HashSet;
use std::path::PathBuf;

/// Default number of streaks shown.
const STREAK_LIMIT: usize = 100;

#[derive(Parser)]
#[command(name = "wl-palindrome")]
#[command(about = "Find the longest win/loss palindrome streak in each team's season")]
struct Args {
    /// Number of streaks to display (may go over because of ties; 0 shows all)
    #[arg(short = 'n', long, default_value_t = STREAK_LIMIT)]
    limit: usize,

    /// Team(s) to include; repeat for multiple teams (default: all teams)
    #[arg(short, long)]
    team: Vec<String>,

    /// Write CSV-formatted output to FILE instead of text to stdout
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Number of worker threads (default: number of CPU cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Season game log file(s)
    #[arg(value_name = "FILE", required = true)]
    game_logs: Vec<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let include_teams: Option<HashSet<String>> = if args.team.is_empty() {
        None
    } else {
        Some(args.team.iter().cloned().collect())
    };

    let leaderboard = build_leaderboard(&args.game_logs, include_teams.as_ref(), args.limit)?;

    if let Some(csv_file) = args.csv {
        write_csv(&leaderboard, &csv_file)?;
    } else {
        write_text(&leaderboard, &mut std::io::stdout().lock())?;
    }
    Ok(())
}
