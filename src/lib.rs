//! Win/loss palindrome streak toolkit
//!
//! Finds the longest contiguous run of game outcomes that reads the same
//! forward and backward for each team season in Retrosheet game logs, and
//! ranks the streaks across seasons.
//!
//! This library provides:
//! - `palindrome`: linear-time longest-palindrome search (Manacher)
//! - `gamelog`: Retrosheet game-log parsing into per-team outcome sequences
//! - `streaks`: per-season streak extraction
//! - `leaderboard`: composite ordering and tie-inclusive truncation
//! - `pipeline`: parallel fan-out over files plus report rendering
//!
//! Binaries:
//! - `wl-palindrome`: batch CLI over one or more season game logs

pub mod gamelog;
pub mod leaderboard;
pub mod palindrome;
pub mod pipeline;
pub mod streaks;

// Re-export the types most callers need.
pub use gamelog::{GameResult, Outcome, ParseError};
pub use palindrome::{longest_palindrome, PalindromeSpan};
pub use streaks::StreakRecord;
