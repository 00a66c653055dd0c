//! Per-season streak extraction.
//!
//! For each team in a season game log, the team's games are put in schedule
//! order and the longest palindromic run of outcomes becomes one
//! [`StreakRecord`]. A team appearing in the log always has at least one
//! game, so every included team emits exactly one record; single-game
//! seasons emit a length-1 record rather than being suppressed here.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::gamelog::{parse_gamelog, Outcome, ParseError};
use crate::palindrome::longest_palindrome;

/// The longest palindrome streak of one team's season.
///
/// `game_start` and `game_end` are 1-indexed inclusive positions in the
/// team's chronologically ordered outcome sequence, as a schedule would
/// show them, so `outcomes.len() == game_end - game_start + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakRecord {
    pub year: u16,
    pub team: String,
    pub outcomes: Vec<Outcome>,
    pub game_start: u16,
    pub game_end: u16,
}

impl StreakRecord {
    /// Build a record from one team's ordered outcome sequence.
    pub fn from_team_season(year: u16, team: String, sequence: &[Outcome]) -> Self {
        let span = longest_palindrome(sequence);
        Self {
            year,
            team,
            outcomes: sequence[span.start..span.end].to_vec(),
            // Sequences are zero-indexed but games are one-indexed; the
            // exclusive span end is already the inclusive 1-indexed end.
            game_start: span.start as u16 + 1,
            game_end: span.end as u16,
        }
    }

    /// Streak length in games.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// The streak as a W/L/T letter string.
    pub fn pattern(&self) -> String {
        self.outcomes.iter().map(|o| o.letter()).collect()
    }

    pub fn wins(&self) -> usize {
        self.count(Outcome::Win)
    }

    pub fn losses(&self) -> usize {
        self.count(Outcome::Loss)
    }

    pub fn ties(&self) -> usize {
        self.count(Outcome::Tie)
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.outcomes.iter().filter(|&&o| o == outcome).count()
    }
}

impl fmt::Display for StreakRecord {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game_range = format!("{}-{}", self.game_start, self.game_end);
        write!(
            formatter,
            "{}: {}: {} ({: >7}): {} ({}-{}-{})",
            self.year,
            self.team,
            self.len(),
            game_range,
            self.pattern(),
            self.wins(),
            self.losses(),
            self.ties()
        )
    }
}

/// Process one season game log, producing one streak record per team.
///
/// Teams outside `include_teams` (when given) are skipped before any streak
/// work happens. Each team's games are stable-sorted by ascending game
/// number before the outcome sequence is projected.
pub fn process_gamelog(
    path: &Path,
    include_teams: Option<&HashSet<String>>,
) -> Result<Vec<StreakRecord>, ParseError> {
    let season = parse_gamelog(path)?;
    log::debug!(
        "{}: season {}, {} teams",
        path.display(),
        season.year,
        season.teams.len()
    );

    let mut records = Vec::with_capacity(season.teams.len());
    for (team, mut games) in season.teams {
        if let Some(filter) = include_teams {
            if !filter.contains(&team) {
                continue;
            }
        }
        games.sort_by_key(|game| game.game_number);
        let sequence: Vec<Outcome> = games.iter().map(|game| game.outcome).collect();
        records.push(StreakRecord::from_team_season(season.year, team, &sequence));
    }
    Ok(records)
}
