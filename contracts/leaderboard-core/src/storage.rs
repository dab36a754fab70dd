use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

use crate::types::{GameState, PlayerStats, ScoreEntry};

const INSTANCE_BUMP_THRESHOLD: u32 = 17_280;
/// Persistent TTL target (~30 days at 5s/ledger), extended on every write.
const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;
const PERSISTENT_BUMP_THRESHOLD: u32 = PERSISTENT_BUMP_LEDGERS - 17_280;

/// Submissions per score page.
pub const SCORE_PAGE_SIZE: u32 = 128;

pub struct Storage;

impl Storage {
    const ADMIN_KEY: Symbol = symbol_short!("ADMIN");
    const TROPHY_REGISTRY_KEY: Symbol = symbol_short!("TRPHREG");
    const GAME_KEY: Symbol = symbol_short!("GAME");
    const STATS_KEY: Symbol = symbol_short!("STATS");
    const SCORE_PAGE_KEY: Symbol = symbol_short!("SCPG");

    fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_BUMP_THRESHOLD, PERSISTENT_BUMP_LEDGERS);
    }

    // ========== Configuration ==========

    pub fn set_admin(env: &Env, admin: &Address) {
        env.storage().instance().set(&Self::ADMIN_KEY, admin);
        Self::bump_instance(env);
    }

    pub fn get_admin(env: &Env) -> Option<Address> {
        env.storage().instance().get(&Self::ADMIN_KEY)
    }

    pub fn set_trophy_registry(env: &Env, address: &Address) {
        env.storage()
            .instance()
            .set(&Self::TROPHY_REGISTRY_KEY, address);
        Self::bump_instance(env);
    }

    pub fn get_trophy_registry(env: &Env) -> Option<Address> {
        env.storage().instance().get(&Self::TROPHY_REGISTRY_KEY)
    }

    // ========== Game State ==========

    /// Returns an owned copy of the header; later writes never show through it.
    pub fn get_game(env: &Env) -> Option<GameState> {
        env.storage().persistent().get(&Self::GAME_KEY)
    }

    pub fn has_game(env: &Env) -> bool {
        env.storage().persistent().has(&Self::GAME_KEY)
    }

    pub fn save_game(env: &Env, game: &GameState) {
        env.storage().persistent().set(&Self::GAME_KEY, game);
        env.storage().persistent().extend_ttl(
            &Self::GAME_KEY,
            PERSISTENT_BUMP_THRESHOLD,
            PERSISTENT_BUMP_LEDGERS,
        );
    }

    // ========== Score Pages ==========

    /// Returns one page of the current epoch, empty when it was never written.
    pub fn get_score_page(env: &Env, epoch: u32, page: u32) -> Vec<ScoreEntry> {
        let key = Self::score_page_key(epoch, page);
        env.storage()
            .persistent()
            .get(&key)
            .unwrap_or_else(|| Vec::new(env))
    }

    /// Appends to the last page of the game's epoch and bumps `score_count`.
    /// The caller saves the game header.
    pub fn append_score(env: &Env, game: &mut GameState, entry: &ScoreEntry) {
        let page = game.score_count / SCORE_PAGE_SIZE;
        let mut entries = Self::get_score_page(env, game.score_epoch, page);
        entries.push_back(entry.clone());

        let key = Self::score_page_key(game.score_epoch, page);
        env.storage().persistent().set(&key, &entries);
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_BUMP_THRESHOLD,
            PERSISTENT_BUMP_LEDGERS,
        );
        game.score_count += 1;
    }

    /// Returns, in submission order, every page that may hold an entry stamped
    /// at or after `since`.
    ///
    /// Ledger time never goes backwards, so pages are read newest first and
    /// the walk stops at the first page lying wholly before `since`.
    pub fn scores_since(env: &Env, game: &GameState, since: u64) -> Vec<ScoreEntry> {
        let mut pages: Vec<Vec<ScoreEntry>> = Vec::new(env);
        let mut page = game.score_count.div_ceil(SCORE_PAGE_SIZE);
        while page > 0 {
            page -= 1;
            let entries = Self::get_score_page(env, game.score_epoch, page);
            if entries.iter().all(|entry| entry.timestamp < since) {
                break;
            }
            pages.push_front(entries);
        }

        let mut scores = Vec::new(env);
        for entries in pages.iter() {
            scores.append(&entries);
        }
        scores
    }

    // ========== Player Stats ==========

    pub fn get_player_stats(env: &Env, player: &Address) -> Option<PlayerStats> {
        let key = Self::stats_key(player);
        env.storage().persistent().get(&key)
    }

    pub fn save_player_stats(env: &Env, player: &Address, stats: &PlayerStats) {
        let key = Self::stats_key(player);
        env.storage().persistent().set(&key, stats);
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_BUMP_THRESHOLD,
            PERSISTENT_BUMP_LEDGERS,
        );
    }

    // ========== Key Helpers ==========

    fn stats_key(player: &Address) -> (Symbol, Address) {
        (Self::STATS_KEY, player.clone())
    }

    fn score_page_key(epoch: u32, page: u32) -> (Symbol, u32, u32) {
        (Self::SCORE_PAGE_KEY, epoch, page)
    }
}
