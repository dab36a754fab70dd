#![cfg_attr(not(test), no_std)]
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String, Symbol, Vec};

/// A trophy awarded to the best score of one closed reward period.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trophy {
    pub token_id: u64,
    pub name: String,
    pub description: String,
    /// Start of the period the trophy was awarded for.
    pub day_timestamp: u64,
    /// The winning score.
    pub score: u64,
}

/// Registry entry binding a trophy to its owner.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrophyRecord {
    pub owner: Address,
    pub token_id: u64,
    pub trophy: Trophy,
}

/// Row of the global ownership listing.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrophyOwnership {
    pub owner: Address,
    pub token_id: u64,
    pub name: String,
    pub day_timestamp: u64,
}

/// Mint counter and storage epoch. Absent until `initialize`.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryState {
    pub next_token_id: u64,
    pub epoch: u32,
}

/// Event emitted when the registry is initialized.
#[contracttype]
#[derive(Clone, Debug)]
pub struct RegistryInitializedEvent {
    pub admin: Address,
}

/// Event emitted when a trophy is minted.
#[contracttype]
#[derive(Clone, Debug)]
pub struct TrophyMintedEvent {
    pub token_id: u64,
    pub owner: Address,
    pub day_timestamp: u64,
    pub score: u64,
}

/// Event emitted when all trophies are cleared.
#[contracttype]
#[derive(Clone, Debug)]
pub struct RegistryResetEvent {
    pub cleared: u64,
    pub epoch: u32,
}

mod errors;
mod metadata;
mod storage;

pub use errors::TrophyErrorCode;
use storage::Storage;

#[contract]
pub struct TrophyRegistry;

#[contractimpl]
impl TrophyRegistry {
    /// Records the administrator allowed to initialize, mint and reset.
    pub fn __constructor(env: Env, admin: Address) {
        Storage::set_admin(&env, &admin);
    }

    /// Creates an empty registry with the token counter at 0.
    ///
    /// # Errors
    /// * `Unauthorized` - `admin` is not the configured administrator
    /// * `AlreadyInitialized` - The registry already exists
    pub fn initialize(env: Env, admin: Address) -> Result<(), TrophyErrorCode> {
        Self::require_admin(&env, &admin)?;
        if Storage::get_state(&env).is_some() {
            return Err(TrophyErrorCode::AlreadyInitialized);
        }

        Storage::set_state(
            &env,
            &RegistryState {
                next_token_id: 0,
                epoch: 0,
            },
        );

        env.events().publish(
            (Symbol::new(&env, "RegistryInitialized"),),
            RegistryInitializedEvent { admin },
        );
        Ok(())
    }

    /// Mints a trophy for the winner of the period starting at `window_start`.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `admin` - The configured administrator (must authorize)
    /// * `owner` - The winning player, initial owner of the trophy
    /// * `score` - The winning score
    /// * `window_start` - Start of the rewarded period
    ///
    /// # Returns
    /// The token id of the new trophy
    ///
    /// # Errors
    /// * `Unauthorized` - `admin` is not the configured administrator
    /// * `NotInitialized` - The registry has not been initialized
    pub fn mint(
        env: Env,
        admin: Address,
        owner: Address,
        score: u64,
        window_start: u64,
    ) -> Result<u64, TrophyErrorCode> {
        Self::require_admin(&env, &admin)?;
        let mut state = Storage::get_state(&env).ok_or(TrophyErrorCode::NotInitialized)?;

        let token_id = state.next_token_id;
        state.next_token_id += 1;

        let trophy = Trophy {
            token_id,
            name: metadata::trophy_name(&env, window_start),
            description: metadata::trophy_description(&env, score, window_start),
            day_timestamp: window_start,
            score,
        };
        let record = TrophyRecord {
            owner: owner.clone(),
            token_id,
            trophy,
        };

        Storage::save_trophy(&env, state.epoch, &record);
        Storage::add_trophy_to_owner(&env, state.epoch, &owner, token_id);
        Storage::set_state(&env, &state);

        let event = TrophyMintedEvent {
            token_id,
            owner,
            day_timestamp: window_start,
            score,
        };
        env.events()
            .publish((Symbol::new(&env, "TrophyMinted"), token_id), event);

        Ok(token_id)
    }

    /// Clears every trophy and restarts the token counter at 0.
    pub fn reset(env: Env, admin: Address) -> Result<(), TrophyErrorCode> {
        Self::require_admin(&env, &admin)?;
        let state = Storage::get_state(&env).ok_or(TrophyErrorCode::NotInitialized)?;

        let next = RegistryState {
            next_token_id: 0,
            epoch: state.epoch + 1,
        };
        Storage::set_state(&env, &next);

        let event = RegistryResetEvent {
            cleared: state.next_token_id,
            epoch: next.epoch,
        };
        env.events()
            .publish((Symbol::new(&env, "RegistryReset"),), event);
        Ok(())
    }

    /// Number of trophies held by `owner`.
    pub fn get_trophy_count(env: Env, owner: Address) -> u32 {
        match Storage::get_state(&env) {
            Some(state) => Storage::get_owner_trophies(&env, state.epoch, &owner).len(),
            None => 0,
        }
    }

    /// Trophies held by `owner`, in mint order.
    pub fn get_player_trophies(env: Env, owner: Address) -> Vec<Trophy> {
        let mut trophies = Vec::new(&env);
        for record in Self::owner_records(&env, &owner).iter() {
            trophies.push_back(record.trophy);
        }
        trophies
    }

    /// Full records (owner, token id, trophy) held by `owner`, in mint order.
    pub fn get_trophy_details(env: Env, owner: Address) -> Vec<TrophyRecord> {
        Self::owner_records(&env, &owner)
    }

    /// Every trophy's owner, in mint order.
    pub fn get_all_nft_owners(env: Env) -> Vec<TrophyOwnership> {
        let mut owners = Vec::new(&env);
        let Some(state) = Storage::get_state(&env) else {
            return owners;
        };
        for token_id in 0..state.next_token_id {
            if let Some(record) = Storage::get_trophy(&env, state.epoch, token_id) {
                owners.push_back(TrophyOwnership {
                    owner: record.owner,
                    token_id: record.token_id,
                    name: record.trophy.name,
                    day_timestamp: record.trophy.day_timestamp,
                });
            }
        }
        owners
    }

    /// Retrieves a trophy record by token id.
    pub fn get_trophy(env: Env, token_id: u64) -> Option<TrophyRecord> {
        let state = Storage::get_state(&env)?;
        Storage::get_trophy(&env, state.epoch, token_id)
    }

    /// Returns the owner of a trophy.
    pub fn owner_of(env: Env, token_id: u64) -> Option<Address> {
        Self::get_trophy(env, token_id).map(|record| record.owner)
    }

    /// Number of trophies minted since the last reset.
    pub fn total_supply(env: Env) -> u64 {
        Storage::get_state(&env)
            .map(|state| state.next_token_id)
            .unwrap_or(0)
    }

    pub fn is_initialized(env: Env) -> bool {
        Storage::get_state(&env).is_some()
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        Storage::get_admin(&env)
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), TrophyErrorCode> {
        match Storage::get_admin(env) {
            Some(admin) if admin == *caller => {
                caller.require_auth();
                Ok(())
            }
            _ => Err(TrophyErrorCode::Unauthorized),
        }
    }

    fn owner_records(env: &Env, owner: &Address) -> Vec<TrophyRecord> {
        let mut records = Vec::new(env);
        let Some(state) = Storage::get_state(env) else {
            return records;
        };
        for token_id in Storage::get_owner_trophies(env, state.epoch, owner).iter() {
            if let Some(record) = Storage::get_trophy(env, state.epoch, token_id) {
                records.push_back(record);
            }
        }
        records
    }
}

#[cfg(test)]
mod test;
