use soroban_sdk::{contracttype, Address, Env, Vec};

/// One score submission. Immutable once appended to the ledger.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub player: Address,
    pub score: u64,
    /// Ledger timestamp (seconds) at submission.
    pub timestamp: u64,
}

/// Aggregate statistics for a player, created on first submission.
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerStats {
    pub best_score: u64,
    pub total_games: u64,
}

impl PlayerStats {
    /// Folds one submission into the aggregate.
    pub fn record(&mut self, score: u64) {
        if score > self.best_score {
            self.best_score = score;
        }
        self.total_games += 1;
    }
}

/// Header of the score ledger and its reward scheduling state.
///
/// The submissions themselves live in fixed-size pages keyed by
/// `(score_epoch, page)`; this entry only carries their count, so it stays the
/// same size however many scores are submitted.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Number of submissions in the current epoch.
    pub score_count: u32,
    /// Bumped whenever the scores are cleared; older pages become unreachable.
    pub score_epoch: u32,
    /// All-time top scores of the current epoch, kept ranked on every submit.
    pub top_scores: Vec<ScoreEntry>,
    /// Start of the most recently paid-out window; 0 means never paid.
    pub last_reward_boundary: u64,
    /// Window length in seconds, never 0.
    pub award_period: u64,
}

impl GameState {
    pub fn new(env: &Env, award_period: u64) -> Self {
        GameState {
            score_count: 0,
            score_epoch: 0,
            top_scores: Vec::new(env),
            last_reward_boundary: 0,
            award_period,
        }
    }

    /// Empty ledger in a fresh epoch, with a new period and no paid windows.
    pub fn restarted(&self, env: &Env, award_period: u64) -> Self {
        GameState {
            score_epoch: self.score_epoch + 1,
            ..GameState::new(env, award_period)
        }
    }
}

// ========== Events ==========

#[contracttype]
#[derive(Clone, Debug)]
pub struct GameInitializedEvent {
    pub admin: Address,
    pub award_period: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ScoreSubmittedEvent {
    pub player: Address,
    pub score: u64,
    pub timestamp: u64,
    pub best_score: u64,
    pub total_games: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AwardPeriodUpdatedEvent {
    pub old_period: u64,
    pub new_period: u64,
}

/// Emitted once per closed window, with or without a winner.
#[contracttype]
#[derive(Clone, Debug)]
pub struct PeriodAwardedEvent {
    pub window_start: u64,
    pub winner: Option<Address>,
    pub score: u64,
    pub token_id: Option<u64>,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct GameResetEvent {
    pub scores_cleared: u32,
    pub award_period: u64,
    pub trophies_reset: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ScoresResetEvent {
    pub scores_cleared: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PlayerStatsResetEvent {
    pub player: Address,
}
