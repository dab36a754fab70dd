use crate::{RegistryState, TrophyRecord};
use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

/// Instance entries are bumped once they drop below this many ledgers.
const INSTANCE_BUMP_THRESHOLD: u32 = 17_280;
/// Persistent TTL target (~30 days at 5s/ledger).
const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;
const PERSISTENT_BUMP_THRESHOLD: u32 = PERSISTENT_BUMP_LEDGERS - 17_280;

/// Storage layer for the trophy registry.
///
/// Records and owner indexes are keyed by the registry epoch. A reset bumps the
/// epoch, so every entry written before it becomes unreachable and is left to
/// expire with its TTL.
pub struct Storage;

impl Storage {
    const ADMIN_KEY: Symbol = symbol_short!("ADMIN");
    const STATE_KEY: Symbol = symbol_short!("STATE");
    const TROPHY_KEY: Symbol = symbol_short!("TRPH");
    const OWNER_TROPHIES_KEY: Symbol = symbol_short!("OTRPH");

    fn trophy_key(epoch: u32, token_id: u64) -> (Symbol, u32, u64) {
        (Self::TROPHY_KEY, epoch, token_id)
    }

    fn owner_trophies_key(epoch: u32, owner: &Address) -> (Symbol, u32, Address) {
        (Self::OWNER_TROPHIES_KEY, epoch, owner.clone())
    }

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

    // ========== Registry State ==========

    /// Returns the counter/epoch pair, or None before `initialize`.
    pub fn get_state(env: &Env) -> Option<RegistryState> {
        env.storage().instance().get(&Self::STATE_KEY)
    }

    pub fn set_state(env: &Env, state: &RegistryState) {
        env.storage().instance().set(&Self::STATE_KEY, state);
        Self::bump_instance(env);
    }

    // ========== Trophy Records ==========

    pub fn save_trophy(env: &Env, epoch: u32, record: &TrophyRecord) {
        let key = Self::trophy_key(epoch, record.token_id);
        env.storage().persistent().set(&key, record);
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_BUMP_THRESHOLD,
            PERSISTENT_BUMP_LEDGERS,
        );
    }

    pub fn get_trophy(env: &Env, epoch: u32, token_id: u64) -> Option<TrophyRecord> {
        let key = Self::trophy_key(epoch, token_id);
        env.storage().persistent().get(&key)
    }

    // ========== Owner Index ==========

    /// Appends a token id to the owner's list, keeping mint order.
    pub fn add_trophy_to_owner(env: &Env, epoch: u32, owner: &Address, token_id: u64) {
        let key = Self::owner_trophies_key(epoch, owner);
        let mut token_ids = env
            .storage()
            .persistent()
            .get(&key)
            .unwrap_or_else(|| Vec::new(env));
        token_ids.push_back(token_id);
        env.storage().persistent().set(&key, &token_ids);
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_BUMP_THRESHOLD,
            PERSISTENT_BUMP_LEDGERS,
        );
    }

    pub fn get_owner_trophies(env: &Env, epoch: u32, owner: &Address) -> Vec<u64> {
        let key = Self::owner_trophies_key(epoch, owner);
        env.storage()
            .persistent()
            .get(&key)
            .unwrap_or_else(|| Vec::new(env))
    }
}
