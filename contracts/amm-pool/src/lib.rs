#![no_std]

mod liquidity;
mod storage;
mod swap;

use amm_types::{PoolConfig, PoolError, PoolState};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Vec};
use storage::{get_config, get_shares, get_state, has_config, set_config, set_state};

#[contract]
pub struct AmmPool;

#[contractimpl]
impl AmmPool {
    /// Wire the pool to its token pair and owner. Reserves start empty;
    /// only `owner` may make the first deposit.
    pub fn initialize(env: Env, owner: Address, token_a: Address, token_b: Address) {
        if has_config(&env) {
            panic_with_error!(&env, PoolError::AlreadyInitialized);
        }
        if token_a == token_b {
            panic_with_error!(&env, PoolError::InvalidPath);
        }
        set_config(
            &env,
            &PoolConfig {
                owner,
                token_a,
                token_b,
            },
        );
        set_state(&env, &PoolState::Uninitialized);
    }

    /// Deposit both tokens at the pool ratio and mint shares to `recipient`
    ///
    /// # Returns
    /// (amount_a, amount_b, shares_minted) - Amounts actually deposited
    pub fn add_liquidity(
        env: Env,
        caller: Address,
        token_a: Address,
        token_b: Address,
        amount_a_desired: i128,
        amount_b_desired: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        recipient: Address,
        deadline: u64,
    ) -> (i128, i128, i128) {
        liquidity::add_liquidity(
            &env,
            caller,
            token_a,
            token_b,
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
            recipient,
            deadline,
        )
    }

    /// Burn `shares` from the caller and pay out both tokens to `recipient`
    ///
    /// # Returns
    /// (amount_a, amount_b) - Amounts withdrawn
    pub fn remove_liquidity(
        env: Env,
        caller: Address,
        token_a: Address,
        token_b: Address,
        shares: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        recipient: Address,
        deadline: u64,
    ) -> (i128, i128) {
        liquidity::remove_liquidity(
            &env,
            caller,
            token_a,
            token_b,
            shares,
            amount_a_min,
            amount_b_min,
            recipient,
            deadline,
        )
    }

    /// Swap an exact input for at least `amount_out_min` of the other token.
    /// `path` must be the configured pair, in either direction.
    ///
    /// # Returns
    /// [amount_in, amount_out]
    pub fn swap_exact_tokens_for_tokens(
        env: Env,
        caller: Address,
        amount_in: i128,
        amount_out_min: i128,
        path: Vec<Address>,
        recipient: Address,
        deadline: u64,
    ) -> Vec<i128> {
        swap::swap_exact_tokens_for_tokens(
            &env,
            caller,
            amount_in,
            amount_out_min,
            path,
            recipient,
            deadline,
        )
    }

    /// Constant-product quote, no state access
    pub fn get_amount_out(env: Env, amount_in: i128, reserve_in: i128, reserve_out: i128) -> i128 {
        if amount_in <= 0 {
            panic_with_error!(&env, PoolError::ZeroAmount);
        }
        if reserve_in <= 0 || reserve_out <= 0 {
            panic_with_error!(&env, PoolError::InsufficientLiquidity);
        }
        amount_from(
            &env,
            amm_math::get_amount_out(
                &env,
                amount_in as u128,
                reserve_in as u128,
                reserve_out as u128,
            ),
        )
    }

    /// Spot price of `token_a` in units of `token_b`, scaled by 10^18
    pub fn get_price(env: Env, token_a: Address, token_b: Address) -> i128 {
        swap::price(&env, token_a, token_b)
    }

    // === View Functions ===

    /// Bootstrap authority
    pub fn owner(env: Env) -> Address {
        get_config(&env).owner
    }

    /// First token of the pair
    pub fn token_a(env: Env) -> Address {
        get_config(&env).token_a
    }

    /// Second token of the pair
    pub fn token_b(env: Env) -> Address {
        get_config(&env).token_b
    }

    /// Current reserves, (0, 0) before the bootstrap deposit
    pub fn get_reserves(env: Env) -> (i128, i128) {
        match get_state(&env) {
            PoolState::Initialized(r) => (r.reserve_a, r.reserve_b),
            PoolState::Uninitialized => (0, 0),
        }
    }

    /// Sum of all outstanding liquidity shares
    pub fn total_shares(env: Env) -> i128 {
        match get_state(&env) {
            PoolState::Initialized(r) => r.total_shares,
            PoolState::Uninitialized => 0,
        }
    }

    /// Liquidity share balance of `holder`
    pub fn shares_of(env: Env, holder: Address) -> i128 {
        get_shares(&env, &holder)
    }

    /// Whether the bootstrap deposit has happened
    pub fn is_initialized(env: Env) -> bool {
        matches!(get_state(&env), PoolState::Initialized(_))
    }
}

/// Reject calls whose deadline has passed
pub(crate) fn check_deadline(env: &Env, deadline: u64) {
    if env.ledger().timestamp() > deadline {
        panic_with_error!(env, PoolError::Expired);
    }
}

/// Narrow a math-library result back to a token amount
pub(crate) fn amount_from(env: &Env, value: u128) -> i128 {
    match i128::try_from(value) {
        Ok(v) => v,
        Err(_) => panic_with_error!(env, PoolError::Overflow),
    }
}
