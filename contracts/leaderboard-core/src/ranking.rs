//! Ranking over score entries.
//!
//! Rankings are score descending with ties kept in submission order, so the
//! same ledger always produces the same leaderboard, whether it is ranked in
//! one pass or one submission at a time.

use soroban_sdk::Vec;

use crate::types::ScoreEntry;

/// Maximum number of entries returned by any leaderboard.
pub const LEADERBOARD_SIZE: u32 = 10;

/// Folds one submission into a ranked list of at most `LEADERBOARD_SIZE`.
///
/// The entry goes in front of the first ranked entry with a strictly lower
/// score, so a later equal score never displaces an earlier one.
pub fn insert_ranked(ranked: &mut Vec<ScoreEntry>, entry: ScoreEntry) {
    let mut position = ranked.len();
    for (i, current) in ranked.iter().enumerate() {
        if current.score < entry.score {
            position = i as u32;
            break;
        }
    }
    if position >= LEADERBOARD_SIZE {
        return;
    }
    ranked.insert(position, entry);
    if ranked.len() > LEADERBOARD_SIZE {
        ranked.pop_back();
    }
}

/// Top entries with `window_start <= timestamp < window_end`.
/// A `None` end leaves the window open above.
pub fn rank_window(
    entries: &Vec<ScoreEntry>,
    window_start: u64,
    window_end: Option<u64>,
) -> Vec<ScoreEntry> {
    top_entries(entries, |entry| {
        in_window(entry.timestamp, window_start, window_end)
    })
}

/// Highest score in `[window_start, window_end)`. The earliest submission wins a tie.
pub fn window_winner(
    entries: &Vec<ScoreEntry>,
    window_start: u64,
    window_end: u64,
) -> Option<ScoreEntry> {
    let mut winner: Option<ScoreEntry> = None;
    for entry in entries.iter() {
        if !in_window(entry.timestamp, window_start, Some(window_end)) {
            continue;
        }
        let better = match &winner {
            None => true,
            Some(best) => entry.score > best.score,
        };
        if better {
            winner = Some(entry);
        }
    }
    winner
}

pub fn in_window(timestamp: u64, window_start: u64, window_end: Option<u64>) -> bool {
    timestamp >= window_start && window_end.map_or(true, |end| timestamp < end)
}

fn top_entries(
    entries: &Vec<ScoreEntry>,
    keep: impl Fn(&ScoreEntry) -> bool,
) -> Vec<ScoreEntry> {
    let mut ranked: Vec<ScoreEntry> = Vec::new(entries.env());
    for entry in entries.iter() {
        if keep(&entry) {
            insert_ranked(&mut ranked, entry);
        }
    }
    ranked
}
