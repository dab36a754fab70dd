use soroban_sdk::{Address, Env, IntoVal, Symbol, Val, Vec};

/// Calls into the TrophyRegistry contract.
///
/// A failing registry call aborts the whole invocation, so callers run their
/// own checks (including `is_ready`) before the first write.
pub struct TrophyHandler;

impl TrophyHandler {
    /// Returns whether the registry has been initialized and can mint.
    pub fn is_ready(env: &Env, registry: &Address) -> bool {
        env.invoke_contract(
            registry,
            &Symbol::new(env, "is_initialized"),
            Vec::new(env),
        )
    }

    /// Returns the administrator the registry checks mints and resets against.
    pub fn registry_admin(env: &Env, registry: &Address) -> Option<Address> {
        env.invoke_contract(registry, &Symbol::new(env, "get_admin"), Vec::new(env))
    }

    /// Mints the trophy for a period winner.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `registry` - Address of the TrophyRegistry contract
    /// * `admin` - The administrator, forwarded for the registry's own auth check
    /// * `winner` - The player receiving the trophy
    /// * `score` - The winning score
    /// * `window_start` - Start of the rewarded period
    ///
    /// # Returns
    /// The token id of the minted trophy
    pub fn mint_trophy(
        env: &Env,
        registry: &Address,
        admin: &Address,
        winner: &Address,
        score: u64,
        window_start: u64,
    ) -> u64 {
        let mut args: Vec<Val> = Vec::new(env);
        args.push_back(admin.clone().into_val(env));
        args.push_back(winner.clone().into_val(env));
        args.push_back(score.into_val(env));
        args.push_back(window_start.into_val(env));

        env.invoke_contract(registry, &Symbol::new(env, "mint"), args)
    }

    /// Clears every trophy in the registry.
    pub fn reset_trophies(env: &Env, registry: &Address, admin: &Address) {
        let mut args: Vec<Val> = Vec::new(env);
        args.push_back(admin.clone().into_val(env));

        env.invoke_contract::<()>(registry, &Symbol::new(env, "reset"), args);
    }
}
