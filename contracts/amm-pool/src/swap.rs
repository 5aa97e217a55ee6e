use crate::storage::{get_config, get_state, set_state};
use crate::{amount_from, check_deadline};
use amm_math::{get_amount_out, spot_price};
use amm_types::{PoolConfig, PoolError, PoolState, Reserves};
use soroban_sdk::{panic_with_error, token, vec, Address, Env, Symbol, Vec};

/// Swap an exact input amount along a two-token path
pub fn swap_exact_tokens_for_tokens(
    env: &Env,
    caller: Address,
    amount_in: i128,
    amount_out_min: i128,
    path: Vec<Address>,
    recipient: Address,
    deadline: u64,
) -> Vec<i128> {
    caller.require_auth();
    check_deadline(env, deadline);

    if amount_in <= 0 {
        panic_with_error!(env, PoolError::ZeroAmount);
    }
    if path.len() != 2 {
        panic_with_error!(env, PoolError::InvalidPath);
    }
    let token_in = path.get_unchecked(0);
    let token_out = path.get_unchecked(1);

    let config = get_config(env);
    let a_to_b = resolve_direction(env, &config, &token_in, &token_out);

    let prior = match get_state(env) {
        PoolState::Initialized(r) => r,
        PoolState::Uninitialized => panic_with_error!(env, PoolError::InsufficientLiquidity),
    };
    let (reserve_in, reserve_out) = if a_to_b {
        (prior.reserve_a, prior.reserve_b)
    } else {
        (prior.reserve_b, prior.reserve_a)
    };
    if reserve_in == 0 || reserve_out == 0 {
        panic_with_error!(env, PoolError::InsufficientLiquidity);
    }

    let amount_out = amount_from(
        env,
        get_amount_out(
            env,
            amount_in as u128,
            reserve_in as u128,
            reserve_out as u128,
        ),
    );
    if amount_out == 0 {
        panic_with_error!(env, PoolError::ZeroAmount);
    }
    if amount_out < amount_out_min {
        panic_with_error!(env, PoolError::SlippageExceeded);
    }

    // The quote is strictly below reserve_out, so the out side never
    // underflows and the reserve product never decreases
    let updated = if a_to_b {
        Reserves {
            reserve_a: prior.reserve_a + amount_in,
            reserve_b: prior.reserve_b - amount_out,
            total_shares: prior.total_shares,
        }
    } else {
        Reserves {
            reserve_a: prior.reserve_a - amount_out,
            reserve_b: prior.reserve_b + amount_in,
            total_shares: prior.total_shares,
        }
    };
    set_state(env, &PoolState::Initialized(updated));

    let contract = env.current_contract_address();
    token::Client::new(env, &token_in).transfer(&caller, &contract, &amount_in);
    token::Client::new(env, &token_out).transfer(&contract, &recipient, &amount_out);

    let amounts = vec![env, amount_in, amount_out];
    env.events().publish(
        (Symbol::new(env, "SwapExactTokensForTokens"),),
        (caller, amounts.clone()),
    );

    amounts
}

/// Spot price of `token_a` in units of `token_b`, scaled by PRICE_SCALE
pub fn price(env: &Env, token_a: Address, token_b: Address) -> i128 {
    let config = get_config(env);
    let a_to_b = resolve_direction(env, &config, &token_a, &token_b);

    let reserves = match get_state(env) {
        PoolState::Initialized(r) => r,
        PoolState::Uninitialized => panic_with_error!(env, PoolError::InsufficientLiquidity),
    };
    let (base, counter) = if a_to_b {
        (reserves.reserve_a, reserves.reserve_b)
    } else {
        (reserves.reserve_b, reserves.reserve_a)
    };
    if base == 0 {
        panic_with_error!(env, PoolError::InsufficientLiquidity);
    }

    amount_from(env, spot_price(env, base as u128, counter as u128))
}

/// Map an ordered token pair onto the configured pair.
/// Returns true when the pair is (token_a, token_b), false when reversed.
fn resolve_direction(
    env: &Env,
    config: &PoolConfig,
    token_in: &Address,
    token_out: &Address,
) -> bool {
    if *token_in == config.token_a && *token_out == config.token_b {
        true
    } else if *token_in == config.token_b && *token_out == config.token_a {
        false
    } else {
        panic_with_error!(env, PoolError::InvalidPath);
    }
}
