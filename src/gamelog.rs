//! Retrosheet game-log parsing.
//!
//! Season game logs are headerless CSV with one row per game. Each row
//! carries both participants, so it contributes one result to the visiting
//! team's season and one to the home team's. Only a handful of the many
//! columns matter here; they are addressed by their fixed Retrosheet
//! positions.

use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

// Retrosheet game-log column positions.
const DATE: usize = 0;
const VISITOR_TEAM: usize = 3;
const VISITOR_GAME_NUMBER: usize = 5;
const HOME_TEAM: usize = 6;
const HOME_GAME_NUMBER: usize = 8;
const VISITOR_SCORE: usize = 9;
const HOME_SCORE: usize = 10;

/// A malformed game log. Any row-level problem is fatal to the whole run;
/// there is no skip-and-continue path.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("row {row}: missing field {index} ({name})")]
    MissingField {
        row: usize,
        index: usize,
        name: &'static str,
    },

    #[error("row {row}: field {name} is not numeric: {value:?}")]
    InvalidNumber {
        row: usize,
        name: &'static str,
        value: String,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// One team's result in one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    /// Derive the outcome from this team's runs vs. the opponent's.
    pub fn from_scores(score: u8, other_score: u8) -> Self {
        match score.cmp(&other_score) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    /// Single-letter form used in reports.
    pub fn letter(self) -> char {
        match self {
            Outcome::Win => 'W',
            Outcome::Loss => 'L',
            Outcome::Tie => 'T',
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.letter())
    }
}

/// One game from one team's point of view. Game numbers are unique per
/// team within a season but need not be contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub game_number: u16,
    pub outcome: Outcome,
}

/// All game results for one season, keyed by team, in file order (not yet
/// sorted by game number).
#[derive(Debug, Default)]
pub struct SeasonGames {
    /// Season year, taken from the first four characters of the first
    /// row's date field. 0 only for an empty file, which has no teams.
    pub year: u16,
    pub teams: HashMap<String, Vec<GameResult>>,
}

/// Parse a season game log from a file.
pub fn parse_gamelog(path: &Path) -> Result<SeasonGames, ParseError> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    parse_gamelog_reader(reader)
}

/// Parse a season game log from any reader. Split out from
/// [`parse_gamelog`] so tests can feed CSV text directly.
pub fn parse_gamelog_reader<R: io::Read>(
    mut reader: csv::Reader<R>,
) -> Result<SeasonGames, ParseError> {
    let mut season = SeasonGames::default();
    let mut record = StringRecord::new();
    let mut row = 0usize;

    while reader.read_record(&mut record)? {
        row += 1;

        if season.year == 0 {
            let date = field(&record, row, DATE, "date")?;
            season.year = date
                .get(..4)
                .and_then(|y| y.parse::<u16>().ok())
                .ok_or_else(|| ParseError::InvalidNumber {
                    row,
                    name: "date",
                    value: date.to_string(),
                })?;
        }

        let visitor_score: u8 = numeric_field(&record, row, VISITOR_SCORE, "visitor score")?;
        let home_score: u8 = numeric_field(&record, row, HOME_SCORE, "home score")?;

        add_team_game(
            &mut season,
            &record,
            row,
            VISITOR_TEAM,
            VISITOR_GAME_NUMBER,
            Outcome::from_scores(visitor_score, home_score),
        )?;
        add_team_game(
            &mut season,
            &record,
            row,
            HOME_TEAM,
            HOME_GAME_NUMBER,
            Outcome::from_scores(home_score, visitor_score),
        )?;
    }

    Ok(season)
}

/// Append one game to one participant's season.
fn add_team_game(
    season: &mut SeasonGames,
    record: &StringRecord,
    row: usize,
    team_index: usize,
    game_number_index: usize,
    outcome: Outcome,
) -> Result<(), ParseError> {
    let team = field(record, row, team_index, "team")?;
    let game_number: u16 = numeric_field(record, row, game_number_index, "team game number")?;

    season
        .teams
        .entry(team.to_string())
        .or_insert_with(|| Vec::with_capacity(162))
        .push(GameResult {
            game_number,
            outcome,
        });
    Ok(())
}

fn field<'r>(
    record: &'r StringRecord,
    row: usize,
    index: usize,
    name: &'static str,
) -> Result<&'r str, ParseError> {
    record
        .get(index)
        .ok_or(ParseError::MissingField { row, index, name })
}

fn numeric_field<N: FromStr>(
    record: &StringRecord,
    row: usize,
    index: usize,
    name: &'static str,
) -> Result<N, ParseError> {
    let value = field(record, row, index, name)?;
    value
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidNumber {
            row,
            name,
            value: value.to_string(),
        })
}
