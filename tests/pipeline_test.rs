//! End-to-end tests over real temp game-log files.
//!
//! These exercise the same path the CLI uses: parallel fan-out over files,
//! per-team streak extraction, leaderboard selection, and rendering.

use gamelog_streaks::gamelog::ParseError;
use gamelog_streaks::pipeline::{build_leaderboard, collect_streaks, write_csv};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// 1950: four BOS/NYA games, rows deliberately out of schedule order.
/// BOS reads W L L W, NYA reads L W W L: both whole-season palindromes.
const GAMELOG_1950: &str = "\
19500609,0,Friday,NYA,AL,3,BOS,AL,3,1,0
19500416,0,Sunday,BOS,AL,1,NYA,AL,1,5,3
19500610,0,Saturday,NYA,AL,4,BOS,AL,4,2,7
19500417,0,Monday,BOS,AL,2,NYA,AL,2,2,6
";

/// 1951: three CHN/SLN games. CHN reads T W L, SLN reads T L W: the
/// longest palindrome for both is a single game.
const GAMELOG_1951: &str = "\
19510417,0,Tuesday,CHN,NL,1,SLN,NL,1,3,3
19510418,0,Wednesday,CHN,NL,2,SLN,NL,2,4,2
19510419,0,Thursday,SLN,NL,3,CHN,NL,3,5,1
";

fn write_gamelogs(dir: &TempDir) -> Vec<PathBuf> {
    let a = dir.path().join("gl1950.txt");
    let b = dir.path().join("gl1951.txt");
    fs::write(&a, GAMELOG_1950).unwrap();
    fs::write(&b, GAMELOG_1951).unwrap();
    vec![a, b]
}

#[test]
fn test_leaderboard_order_and_contents() {
    let dir = TempDir::new().unwrap();
    let game_logs = write_gamelogs(&dir);

    let leaderboard = build_leaderboard(&game_logs, None, 0).unwrap();

    let summary: Vec<_> = leaderboard
        .iter()
        .map(|r| (r.len(), r.year, r.team.as_str(), r.game_start, r.game_end))
        .collect();
    assert_eq!(
        summary,
        vec![
            (4, 1950, "BOS", 1, 4),
            (4, 1950, "NYA", 1, 4),
            (1, 1951, "CHN", 1, 1),
            (1, 1951, "SLN", 1, 1),
        ]
    );
    for record in &leaderboard {
        assert_eq!(
            record.len(),
            record.game_end as usize - record.game_start as usize + 1
        );
    }
    assert_eq!(leaderboard[0].pattern(), "WLLW");
    assert_eq!(leaderboard[1].pattern(), "LWWL");
}

#[test]
fn test_tie_inclusive_limit() {
    let dir = TempDir::new().unwrap();
    let game_logs = write_gamelogs(&dir);

    // Limit 1, but BOS and NYA tie at length 4: both stay.
    let leaderboard = build_leaderboard(&game_logs, None, 1).unwrap();
    assert_eq!(leaderboard.len(), 2);
    assert!(leaderboard.iter().all(|r| r.len() == 4));
}

#[test]
fn test_team_filter() {
    let dir = TempDir::new().unwrap();
    let game_logs = write_gamelogs(&dir);

    let filter: HashSet<String> = ["NYA".to_string()].into_iter().collect();
    let records = collect_streaks(&game_logs, Some(&filter)).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].team, "NYA");
}

#[test]
fn test_same_leaderboard_for_any_pool_size() {
    let dir = TempDir::new().unwrap();
    let game_logs = write_gamelogs(&dir);

    let serial_pool = rayon::ThreadPoolBuilder::new().num_threads(1).build().unwrap();
    let wide_pool = rayon::ThreadPoolBuilder::new().num_threads(4).build().unwrap();

    let serial = serial_pool
        .install(|| build_leaderboard(&game_logs, None, 100))
        .unwrap();
    let wide = wide_pool
        .install(|| build_leaderboard(&game_logs, None, 100))
        .unwrap();

    assert_eq!(serial, wide);
}

#[test]
fn test_malformed_file_aborts_run() {
    let dir = TempDir::new().unwrap();
    let mut game_logs = write_gamelogs(&dir);

    let bad = dir.path().join("gl1952.txt");
    fs::write(&bad, "19520415,0,Tuesday,PHA,AL,1,WS1,AL,1,six,2\n").unwrap();
    game_logs.push(bad.clone());

    let err = build_leaderboard(&game_logs, None, 100).unwrap_err();
    assert!(err.to_string().contains("gl1952.txt"), "{err:#}");
    assert!(
        err.chain().any(|cause| cause.downcast_ref::<ParseError>().is_some()),
        "{err:#}"
    );
}

#[test]
fn test_csv_rendering() {
    let dir = TempDir::new().unwrap();
    let game_logs = write_gamelogs(&dir);

    let leaderboard = build_leaderboard(&game_logs, None, 100).unwrap();
    let csv_file = dir.path().join("out.csv");
    write_csv(&leaderboard, &csv_file).unwrap();

    let text = fs::read_to_string(&csv_file).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("year,team,length,palindrome,game_start,game_end,wins,losses,ties")
    );
    assert_eq!(lines.next(), Some("1950,BOS,4,WLLW,1,4,2,2,0"));
    assert_eq!(lines.next(), Some("1950,NYA,4,LWWL,1,4,2,2,0"));
    assert_eq!(text.lines().count(), 1 + leaderboard.len());
}
