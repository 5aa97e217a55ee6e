use crate::storage::{get_config, get_shares, get_state, set_shares, set_state};
use crate::{amount_from, check_deadline};
use amm_math::{mul_div, quote, quote_u256, sqrt_product};
use amm_types::{PoolError, PoolState, Reserves};
use soroban_sdk::{panic_with_error, token, Address, Env, Symbol, U256};

/// Deposit both tokens and mint liquidity shares to `recipient`
pub fn add_liquidity(
    env: &Env,
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
    caller.require_auth();
    check_deadline(env, deadline);

    if amount_a_desired <= 0 || amount_b_desired <= 0 {
        panic_with_error!(env, PoolError::ZeroAmount);
    }

    let config = get_config(env);
    if token_a != config.token_a || token_b != config.token_b {
        panic_with_error!(env, PoolError::InvalidPath);
    }

    let (amount_a, amount_b, minted, updated) = match get_state(env) {
        PoolState::Uninitialized => {
            // Bootstrap is owner-only; after it the pool is permissionless
            if caller != config.owner {
                panic_with_error!(env, PoolError::Unauthorized);
            }
            seed(env, amount_a_desired, amount_b_desired)
        }
        PoolState::Initialized(prior) if prior.total_shares == 0 => {
            // Fully drained pool: the next deposit re-seeds it at a fresh
            // ratio, without the bootstrap gate
            seed(env, amount_a_desired, amount_b_desired)
        }
        PoolState::Initialized(prior) => {
            // Match the deposit to the current ratio, constrained by
            // whichever side would over-contribute. The counterpart
            // quote is taken at 256-bit width: a lopsided ratio can
            // push it past u128 even though the branch that ends up
            // taken fits comfortably.
            let b_wide = quote_u256(
                env,
                &U256::from_u128(env, amount_a_desired as u128),
                &U256::from_u128(env, prior.reserve_a as u128),
                &U256::from_u128(env, prior.reserve_b as u128),
            );
            let fits_b = !b_wide.gt(&U256::from_u128(env, amount_b_desired as u128));
            let (amount_a, amount_b) = if fits_b {
                // Bounded by amount_b_desired, so the narrow quote is
                // representable
                let b_proportional = amount_from(
                    env,
                    quote(
                        env,
                        amount_a_desired as u128,
                        prior.reserve_a as u128,
                        prior.reserve_b as u128,
                    ),
                );
                if b_proportional < amount_b_min {
                    panic_with_error!(env, PoolError::SlippageExceeded);
                }
                (amount_a_desired, b_proportional)
            } else {
                // B is the scarce side; the matched A amount is bounded
                // by amount_a_desired
                let a_proportional = amount_from(
                    env,
                    quote(
                        env,
                        amount_b_desired as u128,
                        prior.reserve_b as u128,
                        prior.reserve_a as u128,
                    ),
                );
                if a_proportional < amount_a_min {
                    panic_with_error!(env, PoolError::SlippageExceeded);
                }
                (a_proportional, amount_b_desired)
            };

            // Shares follow the smaller relative contribution
            let minted = mul_div(
                env,
                amount_a as u128,
                prior.total_shares as u128,
                prior.reserve_a as u128,
            )
            .min(mul_div(
                env,
                amount_b as u128,
                prior.total_shares as u128,
                prior.reserve_b as u128,
            ));
            if minted == 0 {
                panic_with_error!(env, PoolError::ZeroAmount);
            }
            let minted = amount_from(env, minted);

            (
                amount_a,
                amount_b,
                minted,
                Reserves {
                    reserve_a: prior.reserve_a + amount_a,
                    reserve_b: prior.reserve_b + amount_b,
                    total_shares: prior.total_shares + minted,
                },
            )
        }
    };

    // Bookkeeping lands before any token movement; a failed pull traps
    // inside the token contract and rolls the whole invocation back
    set_state(env, &PoolState::Initialized(updated));
    set_shares(env, &recipient, get_shares(env, &recipient) + minted);

    let contract = env.current_contract_address();
    token::Client::new(env, &config.token_a).transfer(&caller, &contract, &amount_a);
    token::Client::new(env, &config.token_b).transfer(&caller, &contract, &amount_b);

    env.events().publish(
        (Symbol::new(env, "AddLiquidity"),),
        (caller, amount_a, amount_b, minted),
    );

    (amount_a, amount_b, minted)
}

/// Burn liquidity shares held by `caller` and pay out both tokens
pub fn remove_liquidity(
    env: &Env,
    caller: Address,
    token_a: Address,
    token_b: Address,
    shares: i128,
    amount_a_min: i128,
    amount_b_min: i128,
    recipient: Address,
    deadline: u64,
) -> (i128, i128) {
    caller.require_auth();
    check_deadline(env, deadline);

    if shares <= 0 {
        panic_with_error!(env, PoolError::ZeroAmount);
    }

    let config = get_config(env);
    if token_a != config.token_a || token_b != config.token_b {
        panic_with_error!(env, PoolError::InvalidPath);
    }

    let prior = match get_state(env) {
        PoolState::Initialized(r) => r,
        PoolState::Uninitialized => panic_with_error!(env, PoolError::InsufficientLiquidity),
    };

    let held = get_shares(env, &caller);
    if held < shares {
        panic_with_error!(env, PoolError::InsufficientBalance);
    }

    // Floor division: the withdrawer never receives more than their
    // exact proportional cut, residual dust stays with other holders
    let amount_a = amount_from(
        env,
        mul_div(
            env,
            shares as u128,
            prior.reserve_a as u128,
            prior.total_shares as u128,
        ),
    );
    let amount_b = amount_from(
        env,
        mul_div(
            env,
            shares as u128,
            prior.reserve_b as u128,
            prior.total_shares as u128,
        ),
    );

    if amount_a < amount_a_min || amount_b < amount_b_min {
        panic_with_error!(env, PoolError::SlippageExceeded);
    }

    set_shares(env, &caller, held - shares);
    set_state(
        env,
        &PoolState::Initialized(Reserves {
            reserve_a: prior.reserve_a - amount_a,
            reserve_b: prior.reserve_b - amount_b,
            total_shares: prior.total_shares - shares,
        }),
    );

    let contract = env.current_contract_address();
    if amount_a > 0 {
        token::Client::new(env, &config.token_a).transfer(&contract, &recipient, &amount_a);
    }
    if amount_b > 0 {
        token::Client::new(env, &config.token_b).transfer(&contract, &recipient, &amount_b);
    }

    env.events().publish(
        (Symbol::new(env, "RemoveLiquidity"),),
        (caller, amount_a, amount_b),
    );

    (amount_a, amount_b)
}

/// First deposit into an empty pool: amounts are taken as-is and the
/// share supply starts at the geometric mean of the two sides
fn seed(env: &Env, amount_a: i128, amount_b: i128) -> (i128, i128, i128, Reserves) {
    let minted = amount_from(env, sqrt_product(env, amount_a as u128, amount_b as u128));
    (
        amount_a,
        amount_b,
        minted,
        Reserves {
            reserve_a: amount_a,
            reserve_b: amount_b,
            total_shares: minted,
        },
    )
}
