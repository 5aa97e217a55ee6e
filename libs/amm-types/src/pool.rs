use soroban_sdk::{contracttype, Address};

/// Pool configuration - immutable after initialization
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolConfig {
    /// Only identity allowed to make the bootstrap deposit
    pub owner: Address,
    /// First token of the pair
    pub token_a: Address,
    /// Second token of the pair
    pub token_b: Address,
}

/// Reserve and share bookkeeping for an initialized pool
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reserves {
    /// Pool-held balance of token A
    pub reserve_a: i128,
    /// Pool-held balance of token B
    pub reserve_b: i128,
    /// Sum of all outstanding liquidity shares
    pub total_shares: i128,
}

/// Pool lifecycle state - stored in Instance storage
///
/// The bootstrap gate is a tagged state rather than a boolean flag:
/// only the configured owner may move the pool out of `Uninitialized`,
/// and the transition happens exactly once.
#[contracttype]
#[derive(Clone, Debug)]
pub enum PoolState {
    /// No reserves, no shares; only the owner may deposit
    Uninitialized,
    /// Live pool; anyone may add/remove liquidity or swap
    Initialized(Reserves),
}
