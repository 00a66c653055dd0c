//! Leaderboard ordering and tie-inclusive truncation.

use std::cmp::Ordering;

use crate::streaks::StreakRecord;

/// Composite leaderboard order: longest streaks first, then earliest
/// season, then team alphabetically.
fn compare(a: &StreakRecord, b: &StreakRecord) -> Ordering {
    b.len()
        .cmp(&a.len())
        .then_with(|| a.year.cmp(&b.year))
        .then_with(|| a.team.cmp(&b.team))
}

/// Sort `records` into leaderboard order and prune to `limit`, keeping any
/// records tied with the one at the limit boundary, so the result may
/// exceed `limit`. A `limit` of 0 disables pruning.
pub fn select_leaderboard(records: &mut Vec<StreakRecord>, limit: usize) {
    records.sort_by(compare);
    if limit == 0 || records.is_empty() {
        return;
    }

    // Cutoff is the length at the limit boundary, or of the last record
    // when there are fewer records than the limit.
    let cutoff_index = limit.min(records.len()) - 1;
    let cutoff = records[cutoff_index].len();
    records.retain(|record| record.len() >= cutoff);
}
