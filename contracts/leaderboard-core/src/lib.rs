#![no_std]
use crate::storage::Storage;
use crate::trophy_handler::TrophyHandler;
use crate::types::{
    AwardPeriodUpdatedEvent, GameInitializedEvent, GameResetEvent, PeriodAwardedEvent,
    PlayerStatsResetEvent, ScoreSubmittedEvent, ScoresResetEvent,
};
use soroban_sdk::{contract, contractimpl, log, Address, Env, Symbol, Vec};

mod errors;
mod ranking;
mod scheduler;
mod storage;
mod trophy_handler;
mod types;

pub use crate::errors::{GameError, GameErrorCode};
pub use crate::ranking::LEADERBOARD_SIZE;
pub use crate::scheduler::DEFAULT_AWARD_PERIOD;
pub use crate::types::{GameState, PlayerStats, ScoreEntry};

#[contract]
pub struct GameLeaderboard;

#[contractimpl]
impl GameLeaderboard {
    /// Records the administrator and the TrophyRegistry this game mints through.
    ///
    /// The registry must be administered by the same account: awards and full
    /// resets fail with `Unauthorized` otherwise.
    pub fn __constructor(env: Env, admin: Address, trophy_registry: Address) {
        Storage::set_admin(&env, &admin);
        Storage::set_trophy_registry(&env, &trophy_registry);
    }

    /// Creates the score ledger with an empty sequence and no paid windows.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `admin` - The configured administrator (must authorize)
    /// * `period` - Award period in seconds, one day when omitted
    ///
    /// # Errors
    /// * `Unauthorized` - `admin` is not the configured administrator
    /// * `AlreadyInitialized` - The game already exists
    /// * `InvalidPeriod` - `period` is 0
    pub fn initialize(env: Env, admin: Address, period: Option<u64>) -> Result<(), GameErrorCode> {
        Self::require_admin(&env, &admin)?;
        if Storage::has_game(&env) {
            return Err(GameErrorCode::AlreadyInitialized);
        }
        let award_period = scheduler::resolve_period(period).map_err(GameErrorCode::from)?;

        Self::start_game(&env, admin, award_period);
        Ok(())
    }

    /// Appends a score for `player` at the current ledger timestamp and updates
    /// the player's best score and game count.
    ///
    /// # Errors
    /// * `InvalidScore` - `score` is 0
    /// * `NotInitialized` - The game has not been initialized
    pub fn submit_score(env: Env, player: Address, score: u64) -> Result<(), GameErrorCode> {
        player.require_auth();

        if score == 0 {
            return Err(GameErrorCode::from(GameError::InvalidScore { score }));
        }
        let mut game = Storage::get_game(&env).ok_or(GameErrorCode::NotInitialized)?;

        let timestamp = env.ledger().timestamp();
        let entry = ScoreEntry {
            player: player.clone(),
            score,
            timestamp,
        };
        Storage::append_score(&env, &mut game, &entry);
        ranking::insert_ranked(&mut game.top_scores, entry);
        Storage::save_game(&env, &game);

        let mut stats = Storage::get_player_stats(&env, &player).unwrap_or_default();
        stats.record(score);
        Storage::save_player_stats(&env, &player, &stats);

        let event = ScoreSubmittedEvent {
            player: player.clone(),
            score,
            timestamp,
            best_score: stats.best_score,
            total_games: stats.total_games,
        };
        env.events()
            .publish((Symbol::new(&env, "ScoreSubmitted"), player), event);

        Ok(())
    }

    /// Top 10 scores of all time, ties in submission order.
    pub fn get_leaderboard(env: Env) -> Result<Vec<ScoreEntry>, GameErrorCode> {
        let game = Storage::get_game(&env).ok_or(GameErrorCode::NotInitialized)?;
        Ok(game.top_scores)
    }

    /// Top 10 scores since the start of the current period.
    ///
    /// Only the lower bound is applied: entries stamped after the current
    /// period are included as well.
    pub fn get_daily_leaderboard(env: Env) -> Result<Vec<ScoreEntry>, GameErrorCode> {
        let game = Storage::get_game(&env).ok_or(GameErrorCode::NotInitialized)?;
        let day_start =
            scheduler::compute_window_start(env.ledger().timestamp(), game.award_period);
        let scores = Storage::scores_since(&env, &game, day_start);
        Ok(ranking::rank_window(&scores, day_start, None))
    }

    /// Top 10 scores of the period `[window_start, window_start + period)`.
    pub fn get_window_leaderboard(
        env: Env,
        window_start: u64,
    ) -> Result<Vec<ScoreEntry>, GameErrorCode> {
        let game = Storage::get_game(&env).ok_or(GameErrorCode::NotInitialized)?;
        let window_end = window_start.saturating_add(game.award_period);
        let scores = Storage::scores_since(&env, &game, window_start);
        Ok(ranking::rank_window(&scores, window_start, Some(window_end)))
    }

    /// Returns the player's stats, zeroed for players who never submitted.
    pub fn get_player_stats(env: Env, player: Address) -> PlayerStats {
        Storage::get_player_stats(&env, &player).unwrap_or_default()
    }

    /// Changes the award period. The last reward boundary is kept as-is.
    pub fn update_award_period(
        env: Env,
        admin: Address,
        new_period: u64,
    ) -> Result<(), GameErrorCode> {
        Self::require_admin(&env, &admin)?;
        let mut game = Storage::get_game(&env).ok_or(GameErrorCode::NotInitialized)?;
        let new_period = scheduler::validate_period(new_period).map_err(GameErrorCode::from)?;

        let old_period = game.award_period;
        game.award_period = new_period;
        Storage::save_game(&env, &game);

        env.events().publish(
            (Symbol::new(&env, "AwardPeriodUpdated"),),
            AwardPeriodUpdatedEvent {
                old_period,
                new_period,
            },
        );
        Ok(())
    }

    /// Rewards the best score of the period that closed before now.
    ///
    /// Mints a trophy for the winner through the TrophyRegistry and marks the
    /// current period start as paid. A closed period without scores is marked
    /// paid too, with nothing minted.
    ///
    /// # Returns
    /// The minted token id, or `None` when the closed period had no scores
    ///
    /// # Errors
    /// * `Unauthorized` - `admin` is not the configured administrator
    /// * `Unauthorized` - The registry needed for a mint has a different administrator
    /// * `NotInitialized` - The game, or the registry needed for a mint, is missing
    /// * `AlreadyRewarded` - The closed period was already paid out
    pub fn award_period_winner(env: Env, admin: Address) -> Result<Option<u64>, GameErrorCode> {
        Self::require_admin(&env, &admin)?;
        let mut game = Storage::get_game(&env).ok_or(GameErrorCode::NotInitialized)?;

        let now = env.ledger().timestamp();
        let plan = scheduler::plan_award(&game, now, |since| {
            Storage::scores_since(&env, &game, since)
        })
        .map_err(GameErrorCode::from)?;

        let token_id = match &plan.winner {
            Some(winner) => {
                let registry = Self::ready_registry(&env, &admin)?.ok_or(
                    GameErrorCode::from(GameError::TrophyRegistryNotInitialized),
                )?;
                Some(TrophyHandler::mint_trophy(
                    &env,
                    &registry,
                    &admin,
                    &winner.player,
                    winner.score,
                    plan.rewarded_window_start,
                ))
            }
            None => {
                log!(&env, "period closed without scores", plan.rewarded_window_start);
                None
            }
        };

        game.last_reward_boundary = plan.window_start;
        Storage::save_game(&env, &game);

        let event = PeriodAwardedEvent {
            window_start: plan.rewarded_window_start,
            winner: plan.winner.as_ref().map(|w| w.player.clone()),
            score: plan.winner.as_ref().map(|w| w.score).unwrap_or(0),
            token_id,
        };
        env.events().publish(
            (Symbol::new(&env, "PeriodAwarded"), plan.rewarded_window_start),
            event,
        );

        Ok(token_id)
    }

    /// Clears the scores, the reward boundary and every trophy, and sets a new
    /// period (one day when omitted). Player stats are kept.
    pub fn reset_game(
        env: Env,
        admin: Address,
        new_period: Option<u64>,
    ) -> Result<(), GameErrorCode> {
        Self::require_admin(&env, &admin)?;
        let game = Storage::get_game(&env).ok_or(GameErrorCode::NotInitialized)?;
        let award_period = scheduler::resolve_period(new_period).map_err(GameErrorCode::from)?;

        Self::reset_full(&env, &admin, &game, award_period)
    }

    /// Clears the score sequence only; the reward boundary and trophies stay.
    pub fn reset_scores_only(env: Env, admin: Address) -> Result<(), GameErrorCode> {
        Self::require_admin(&env, &admin)?;
        let game = Storage::get_game(&env).ok_or(GameErrorCode::NotInitialized)?;

        let mut cleared = game.restarted(&env, game.award_period);
        cleared.last_reward_boundary = game.last_reward_boundary;
        Storage::save_game(&env, &cleared);

        env.events().publish(
            (Symbol::new(&env, "ScoresReset"),),
            ScoresResetEvent {
                scores_cleared: game.score_count,
            },
        );
        Ok(())
    }

    /// Zeroes one player's stats. Unknown players are left alone.
    pub fn reset_player_stats(
        env: Env,
        admin: Address,
        player: Address,
    ) -> Result<(), GameErrorCode> {
        Self::require_admin(&env, &admin)?;

        if Storage::get_player_stats(&env, &player).is_some() {
            Storage::save_player_stats(&env, &player, &PlayerStats::default());
            env.events().publish(
                (Symbol::new(&env, "PlayerStatsReset"), player.clone()),
                PlayerStatsResetEvent { player },
            );
        }
        Ok(())
    }

    /// Fully resets an existing game, or initializes a missing one.
    pub fn reinitialize_game(
        env: Env,
        admin: Address,
        period: Option<u64>,
    ) -> Result<(), GameErrorCode> {
        Self::require_admin(&env, &admin)?;
        let award_period = scheduler::resolve_period(period).map_err(GameErrorCode::from)?;

        match Storage::get_game(&env) {
            Some(game) => Self::reset_full(&env, &admin, &game, award_period),
            None => {
                Self::start_game(&env, admin, award_period);
                Ok(())
            }
        }
    }

    pub fn is_initialized(env: Env) -> bool {
        Storage::has_game(&env)
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        Storage::get_admin(&env)
    }

    pub fn get_trophy_registry(env: Env) -> Option<Address> {
        Storage::get_trophy_registry(&env)
    }

    pub fn get_award_period(env: Env) -> Result<u64, GameErrorCode> {
        let game = Storage::get_game(&env).ok_or(GameErrorCode::NotInitialized)?;
        Ok(game.award_period)
    }

    /// Start of the most recently paid-out period; 0 before the first award.
    pub fn get_last_reward_boundary(env: Env) -> Result<u64, GameErrorCode> {
        let game = Storage::get_game(&env).ok_or(GameErrorCode::NotInitialized)?;
        Ok(game.last_reward_boundary)
    }

    /// Number of scores currently in the ledger.
    pub fn get_score_count(env: Env) -> u32 {
        Storage::get_game(&env)
            .map(|game| game.score_count)
            .unwrap_or(0)
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), GameErrorCode> {
        let admin = Storage::get_admin(env).ok_or(GameErrorCode::Unauthorized)?;
        if admin != *caller {
            return Err(GameErrorCode::from(GameError::Unauthorized));
        }
        caller.require_auth();
        Ok(())
    }

    /// The registry to mint through, or `None` when none is configured or it
    /// has not been initialized. Its administrator must be `admin`.
    fn ready_registry(env: &Env, admin: &Address) -> Result<Option<Address>, GameErrorCode> {
        let registry = match Storage::get_trophy_registry(env) {
            Some(registry) if TrophyHandler::is_ready(env, &registry) => registry,
            _ => return Ok(None),
        };
        if TrophyHandler::registry_admin(env, &registry).as_ref() != Some(admin) {
            return Err(GameErrorCode::from(GameError::TrophyRegistryAdminMismatch));
        }
        Ok(Some(registry))
    }

    fn start_game(env: &Env, admin: Address, award_period: u64) {
        Storage::save_game(env, &GameState::new(env, award_period));

        env.events().publish(
            (Symbol::new(env, "GameInitialized"),),
            GameInitializedEvent {
                admin,
                award_period,
            },
        );
    }

    fn reset_full(
        env: &Env,
        admin: &Address,
        game: &GameState,
        award_period: u64,
    ) -> Result<(), GameErrorCode> {
        let trophies_reset = match Self::ready_registry(env, admin)? {
            Some(registry) => {
                TrophyHandler::reset_trophies(env, &registry, admin);
                true
            }
            None => {
                log!(env, "trophy registry not initialized, trophies left untouched");
                false
            }
        };

        Storage::save_game(env, &game.restarted(env, award_period));

        let event = GameResetEvent {
            scores_cleared: game.score_count,
            award_period,
            trophies_reset,
        };
        env.events()
            .publish((Symbol::new(env, "GameReset"),), event);
        Ok(())
    }
}
