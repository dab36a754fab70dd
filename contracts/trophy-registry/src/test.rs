#![cfg(test)]
extern crate std;

use crate::{TrophyErrorCode, TrophyRegistry, TrophyRegistryClient};
use soroban_sdk::{
    testutils::{Address as _, Events as _, Ledger as _},
    Address, Env, String,
};

fn setup_env() -> Env {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1000);
    env
}

/// Registers the registry with `admin` and initializes it.
fn setup_registry(env: &Env) -> (TrophyRegistryClient<'_>, Address) {
    let admin = Address::generate(env);
    let client = TrophyRegistryClient::new(env, &env.register(TrophyRegistry, (admin.clone(),)));
    client.initialize(&admin);
    (client, admin)
}

#[test]
fn test_mint_trophy() {
    let env = setup_env();
    let (client, admin) = setup_registry(&env);
    let player = Address::generate(&env);

    let token_id = client.mint(&admin, &player, &80, &0);
    assert_eq!(token_id, 0);

    let record = client.get_trophy(&token_id).unwrap();
    assert_eq!(record.owner, player);
    assert_eq!(record.token_id, 0);
    assert_eq!(record.trophy.token_id, 0);
    assert_eq!(record.trophy.day_timestamp, 0);
    assert_eq!(record.trophy.score, 80);
    assert_eq!(record.trophy.name, String::from_str(&env, "Period Champion #0"));
    assert_eq!(
        record.trophy.description,
        String::from_str(&env, "Top score 80 in the period starting at 0")
    );
}

#[test]
fn test_token_ids_strictly_increase() {
    let env = setup_env();
    let (client, admin) = setup_registry(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    assert_eq!(client.mint(&admin, &alice, &10, &0), 0);
    assert_eq!(client.mint(&admin, &bob, &20, &86_400), 1);
    assert_eq!(client.mint(&admin, &alice, &30, &172_800), 2);
    assert_eq!(client.total_supply(), 3);
}

#[test]
fn test_initialize_twice_fails() {
    let env = setup_env();
    let (client, admin) = setup_registry(&env);

    let result = client.try_initialize(&admin);
    assert_eq!(result, Err(Ok(TrophyErrorCode::AlreadyInitialized)));
}

#[test]
fn test_initialize_by_non_admin_fails() {
    let env = setup_env();
    let admin = Address::generate(&env);
    let stranger = Address::generate(&env);
    let client = TrophyRegistryClient::new(&env, &env.register(TrophyRegistry, (admin.clone(),)));

    let result = client.try_initialize(&stranger);
    assert_eq!(result, Err(Ok(TrophyErrorCode::Unauthorized)));
    assert!(!client.is_initialized());
}

#[test]
fn test_mint_by_non_admin_fails() {
    let env = setup_env();
    let (client, _admin) = setup_registry(&env);
    let stranger = Address::generate(&env);

    let result = client.try_mint(&stranger, &stranger, &100, &0);
    assert_eq!(result, Err(Ok(TrophyErrorCode::Unauthorized)));
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_mint_before_initialize_fails() {
    let env = setup_env();
    let admin = Address::generate(&env);
    let player = Address::generate(&env);
    let client = TrophyRegistryClient::new(&env, &env.register(TrophyRegistry, (admin.clone(),)));

    let result = client.try_mint(&admin, &player, &100, &0);
    assert_eq!(result, Err(Ok(TrophyErrorCode::NotInitialized)));
}

#[test]
#[should_panic(expected = "HostError")]
fn test_mint_requires_admin_auth() {
    let env = Env::default();
    let admin = Address::generate(&env);
    let player = Address::generate(&env);
    // Do NOT mock auth - the admin has not signed the mint
    let client = TrophyRegistryClient::new(&env, &env.register(TrophyRegistry, (admin.clone(),)));

    client.mint(&admin, &player, &100, &0);
}

#[test]
fn test_owner_queries_filter_by_owner() {
    let env = setup_env();
    let (client, admin) = setup_registry(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&admin, &alice, &50, &0);
    client.mint(&admin, &bob, &70, &86_400);
    client.mint(&admin, &alice, &90, &172_800);

    assert_eq!(client.get_trophy_count(&alice), 2);
    assert_eq!(client.get_trophy_count(&bob), 1);

    let alice_trophies = client.get_player_trophies(&alice);
    assert_eq!(alice_trophies.len(), 2);
    assert_eq!(alice_trophies.get(0).unwrap().token_id, 0);
    assert_eq!(alice_trophies.get(1).unwrap().token_id, 2);
    assert_eq!(alice_trophies.get(1).unwrap().score, 90);

    let bob_details = client.get_trophy_details(&bob);
    assert_eq!(bob_details.len(), 1);
    let detail = bob_details.get(0).unwrap();
    assert_eq!(detail.owner, bob);
    assert_eq!(detail.token_id, 1);
    assert_eq!(detail.trophy.day_timestamp, 86_400);
}

#[test]
fn test_all_owners_in_mint_order() {
    let env = setup_env();
    let (client, admin) = setup_registry(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&admin, &alice, &50, &0);
    client.mint(&admin, &bob, &70, &86_400);
    client.mint(&admin, &alice, &90, &172_800);

    let owners = client.get_all_nft_owners();
    assert_eq!(owners.len(), 3);
    let owner_ids: std::vec::Vec<(Address, u64)> = owners
        .iter()
        .map(|row| (row.owner, row.token_id))
        .collect();
    assert_eq!(
        owner_ids,
        std::vec![(alice.clone(), 0), (bob.clone(), 1), (alice.clone(), 2)]
    );
    let second = owners.get(1).unwrap();
    assert_eq!(second.day_timestamp, 86_400);
    assert_eq!(second.name, String::from_str(&env, "Period Champion #86400"));
}

#[test]
fn test_queries_empty_on_uninitialized_registry() {
    let env = setup_env();
    let admin = Address::generate(&env);
    let player = Address::generate(&env);
    let client = TrophyRegistryClient::new(&env, &env.register(TrophyRegistry, (admin,)));

    assert_eq!(client.get_trophy_count(&player), 0);
    assert_eq!(client.get_player_trophies(&player).len(), 0);
    assert_eq!(client.get_trophy_details(&player).len(), 0);
    assert_eq!(client.get_all_nft_owners().len(), 0);
    assert_eq!(client.total_supply(), 0);
    assert!(client.get_trophy(&0).is_none());
    assert!(client.owner_of(&0).is_none());
}

#[test]
fn test_reset_clears_trophies_and_restarts_counter() {
    let env = setup_env();
    let (client, admin) = setup_registry(&env);
    let alice = Address::generate(&env);

    client.mint(&admin, &alice, &50, &0);
    client.mint(&admin, &alice, &60, &86_400);
    client.reset(&admin);

    assert_eq!(client.total_supply(), 0);
    assert_eq!(client.get_trophy_count(&alice), 0);
    assert_eq!(client.get_player_trophies(&alice).len(), 0);
    assert_eq!(client.get_all_nft_owners().len(), 0);
    assert!(client.get_trophy(&0).is_none());

    let token_id = client.mint(&admin, &alice, &70, &172_800);
    assert_eq!(token_id, 0);
    let trophies = client.get_player_trophies(&alice);
    assert_eq!(trophies.len(), 1);
    assert_eq!(trophies.get(0).unwrap().score, 70);
}

#[test]
fn test_reset_by_non_admin_fails() {
    let env = setup_env();
    let (client, admin) = setup_registry(&env);
    let alice = Address::generate(&env);
    client.mint(&admin, &alice, &50, &0);

    let result = client.try_reset(&alice);
    assert_eq!(result, Err(Ok(TrophyErrorCode::Unauthorized)));
    assert_eq!(client.get_trophy_count(&alice), 1);
}

#[test]
fn test_reset_before_initialize_fails() {
    let env = setup_env();
    let admin = Address::generate(&env);
    let client = TrophyRegistryClient::new(&env, &env.register(TrophyRegistry, (admin.clone(),)));

    let result = client.try_reset(&admin);
    assert_eq!(result, Err(Ok(TrophyErrorCode::NotInitialized)));
}

#[test]
fn test_trophy_minted_event() {
    let env = setup_env();
    let (client, admin) = setup_registry(&env);
    let player = Address::generate(&env);

    client.mint(&admin, &player, &42, &0);

    let events = env.events().all();
    assert!(!events.is_empty());
    // Last event should be TrophyMinted
    let (_contract, topics, _data) = events.get(events.len() - 1).unwrap();
    assert_eq!(topics.len(), 2); // "TrophyMinted" + token_id
}
