//! Period arithmetic for the reward scheduler. Time is passed in; nothing here
//! reads the ledger.

use crate::errors::GameError;
use crate::ranking;
use crate::types::{GameState, ScoreEntry};
use soroban_sdk::Vec;

/// One day, in seconds.
pub const DEFAULT_AWARD_PERIOD: u64 = 86_400;

/// What `award_period_winner` will do for a given `now`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AwardPlan {
    /// Start of the window containing `now`; becomes the new reward boundary.
    pub window_start: u64,
    /// Start of the closed window being rewarded.
    pub rewarded_window_start: u64,
    pub winner: Option<ScoreEntry>,
}

/// Floors `now` to a period boundary. `period` must be non-zero.
pub fn compute_window_start(now: u64, period: u64) -> u64 {
    now - (now % period)
}

/// Rejects a zero period.
pub fn validate_period(period: u64) -> Result<u64, GameError> {
    if period == 0 {
        return Err(GameError::InvalidPeriod { period });
    }
    Ok(period)
}

/// Resolves an optional period argument, defaulting to one day.
pub fn resolve_period(period: Option<u64>) -> Result<u64, GameError> {
    validate_period(period.unwrap_or(DEFAULT_AWARD_PERIOD))
}

/// Selects the winner of the window that closed before `now`.
///
/// `scores_since` yields the ledger entries stamped at or after a timestamp
/// (it may include older ones) and is only called once the window is known to
/// be unpaid.
///
/// Fails with `AlreadyRewarded` when the window containing `now` does not lie
/// past the last paid boundary. That also covers the very first window, whose
/// start is 0 and which has no closed predecessor.
pub fn plan_award(
    game: &GameState,
    now: u64,
    scores_since: impl FnOnce(u64) -> Vec<ScoreEntry>,
) -> Result<AwardPlan, GameError> {
    let period = validate_period(game.award_period)?;
    let window_start = compute_window_start(now, period);
    if game.last_reward_boundary >= window_start {
        return Err(GameError::AlreadyRewarded {
            window_start,
            last_reward_boundary: game.last_reward_boundary,
        });
    }

    // window_start > last_reward_boundary >= 0 and is a multiple of period
    let rewarded_window_start = window_start - period;
    let scores = scores_since(rewarded_window_start);
    let winner = ranking::window_winner(&scores, rewarded_window_start, window_start);

    Ok(AwardPlan {
        window_start,
        rewarded_window_start,
        winner,
    })
}
