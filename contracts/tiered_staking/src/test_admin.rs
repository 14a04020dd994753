extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    vec, Address, Env, Vec,
};

use crate::{
    rewards::SECONDS_PER_DAY, ContractError, RewardTier, TieredStakingContract,
    TieredStakingContractClient,
};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn tier(min_duration: u64, reward_bps: u32) -> RewardTier {
    RewardTier {
        min_duration,
        reward_bps,
    }
}

fn setup() -> (Env, TieredStakingContractClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let token = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let contract_id = env.register(TieredStakingContract, ());
    let client = TieredStakingContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(
        &owner,
        &token.address(),
        &vec![
            &env,
            tier(SECONDS_PER_DAY, 100),
            tier(7 * SECONDS_PER_DAY, 1_000),
        ],
    );

    StellarAssetClient::new(&env, &token.address()).mint(&contract_id, &1_000_000i128);

    (env, client, owner, token.address())
}

// ── Tier table replacement ───────────────────────────────────────────────────

#[test]
fn test_owner_replaces_whole_table() {
    let (env, client, owner, _token) = setup();

    let replacement = vec![&env, tier(3_600, 50)];
    client.update_reward_tiers(&owner, &replacement);

    // Old tiers are gone, not merged.
    assert_eq!(client.reward_tier_count(), 1);
    assert_eq!(client.get_reward_tier(&0), tier(3_600, 50));
    assert_eq!(client.get_reward_tiers(), replacement);
    assert!(!client.is_locked());
}

#[test]
fn test_non_owner_cannot_update_tiers() {
    let (env, client, _owner, _token) = setup();
    let stranger = Address::generate(&env);

    let result = client.try_update_reward_tiers(&stranger, &vec![&env, tier(1, 1)]);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.reward_tier_count(), 2);
}

#[test]
fn test_invalid_tables_leave_old_table_in_place() {
    let (env, client, owner, _token) = setup();
    let before = client.get_reward_tiers();

    assert_eq!(
        client.try_update_reward_tiers(&owner, &Vec::new(&env)),
        Err(Ok(ContractError::EmptyTierSet))
    );
    assert_eq!(
        client.try_update_reward_tiers(&owner, &vec![&env, tier(10, 1), tier(10, 2)]),
        Err(Ok(ContractError::NonIncreasingDuration))
    );
    assert_eq!(
        client.try_update_reward_tiers(&owner, &vec![&env, tier(20, 1), tier(10, 2)]),
        Err(Ok(ContractError::NonIncreasingDuration))
    );
    assert_eq!(
        client.try_update_reward_tiers(&owner, &vec![&env, tier(10, 2), tier(20, 2)]),
        Err(Ok(ContractError::NonIncreasingReward))
    );
    assert_eq!(
        client.try_update_reward_tiers(&owner, &vec![&env, tier(10, 5), tier(20, 6), tier(30, 1)]),
        Err(Ok(ContractError::NonIncreasingReward))
    );

    assert_eq!(client.get_reward_tiers(), before);
}

#[test]
fn test_get_reward_tier_out_of_range() {
    let (_env, client, _owner, _token) = setup();

    assert_eq!(client.get_reward_tier(&1), tier(7 * SECONDS_PER_DAY, 1_000));
    assert_eq!(
        client.try_get_reward_tier(&2),
        Err(Ok(ContractError::IndexOutOfRange))
    );
    assert_eq!(
        client.try_get_reward_tier(&u32::MAX),
        Err(Ok(ContractError::IndexOutOfRange))
    );
}

#[test]
fn test_open_position_is_valued_against_new_table() {
    let (env, client, owner, token) = setup();
    let account = Address::generate(&env);
    StellarAssetClient::new(&env, &token).mint(&account, &1_000);

    client.stake(&account, &1_000);
    env.ledger().set_timestamp(2 * SECONDS_PER_DAY);
    assert_eq!(client.get_pending_interest(&account), 10);

    client.update_reward_tiers(&owner, &vec![&env, tier(SECONDS_PER_DAY, 300)]);
    assert_eq!(client.get_pending_interest(&account), 30);
    assert_eq!(client.claim_interest(&account), 30);
}

// ── Ownership ────────────────────────────────────────────────────────────────

#[test]
fn test_transfer_ownership_moves_tier_rights() {
    let (env, client, owner, _token) = setup();
    let successor = Address::generate(&env);

    client.transfer_ownership(&owner, &successor);
    assert_eq!(client.get_owner(), successor);

    // The old owner is now a stranger.
    assert_eq!(
        client.try_update_reward_tiers(&owner, &vec![&env, tier(1, 1)]),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(
        client.try_transfer_ownership(&owner, &owner),
        Err(Ok(ContractError::Unauthorized))
    );

    client.update_reward_tiers(&successor, &vec![&env, tier(1, 1)]);
    assert_eq!(client.reward_tier_count(), 1);
}

#[test]
fn test_non_owner_cannot_transfer_ownership() {
    let (env, client, owner, _token) = setup();
    let stranger = Address::generate(&env);

    let result = client.try_transfer_ownership(&stranger, &stranger);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.get_owner(), owner);
}
