use crate::full_math::{into_u128, mul_div};
use amm_types::PRICE_SCALE;
use soroban_sdk::{Env, U256};

/// Constant-product quote at full 256-bit width (rounds down)
/// Returns amount_in * reserve_out / (reserve_in + amount_in)
///
/// No fee is applied; truncation alone keeps the product of reserves
/// non-decreasing across a swap.
pub fn get_amount_out_u256(
    env: &Env,
    amount_in: &U256,
    reserve_in: &U256,
    reserve_out: &U256,
) -> U256 {
    let denominator = reserve_in.add(amount_in);
    if denominator == U256::from_u32(env, 0) {
        panic!("Division by zero");
    }
    amount_in.mul(reserve_out).div(&denominator)
}

/// Constant-product quote for u128 operands
pub fn get_amount_out(env: &Env, amount_in: u128, reserve_in: u128, reserve_out: u128) -> u128 {
    let out = get_amount_out_u256(
        env,
        &U256::from_u128(env, amount_in),
        &U256::from_u128(env, reserve_in),
        &U256::from_u128(env, reserve_out),
    );
    // Bounded above by reserve_out, so narrowing cannot fail
    into_u128(&out)
}

/// Proportional counterpart at full 256-bit width (rounds down)
/// Returns amount_a * reserve_b / reserve_a
pub fn quote_u256(env: &Env, amount_a: &U256, reserve_a: &U256, reserve_b: &U256) -> U256 {
    if *reserve_a == U256::from_u32(env, 0) {
        panic!("Division by zero");
    }
    amount_a.mul(reserve_b).div(reserve_a)
}

/// Proportional counterpart for a deposit: the amount of token B that
/// matches `amount_a` at the current reserve ratio (rounds down)
pub fn quote(env: &Env, amount_a: u128, reserve_a: u128, reserve_b: u128) -> u128 {
    mul_div(env, amount_a, reserve_b, reserve_a)
}

/// Spot price of token A in units of token B, scaled by PRICE_SCALE
pub fn spot_price(env: &Env, reserve_a: u128, reserve_b: u128) -> u128 {
    mul_div(env, PRICE_SCALE as u128, reserve_b, reserve_a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{Env, U256};

    const E18: u128 = 1_000_000_000_000_000_000;

    // === get_amount_out tests ===

    #[test]
    fn test_get_amount_out_basic() {
        let env = Env::default();
        // 100 in against 1000/1000 reserves: 100 * 1000 / 1100 = 90
        assert_eq!(get_amount_out(&env, 100, 1000, 1000), 90);
    }

    #[test]
    fn test_get_amount_out_small_input_rounds_to_zero() {
        let env = Env::default();
        // 1 * 10 / (1000 + 1) = 0
        assert_eq!(get_amount_out(&env, 1, 1000, 10), 0);
    }

    #[test]
    fn test_get_amount_out_monotonic_in_amount_in() {
        let env = Env::default();
        let reserve_in = 50_000_000_000_000u128 * E18;
        let reserve_out = 50_000_000_000_000u128 * E18;
        let mut prev = 0u128;
        for amount_in in [1u128, E18, 1_000 * E18, 999_999 * E18, 50_000_000 * E18] {
            let out = get_amount_out(&env, amount_in, reserve_in, reserve_out);
            assert!(out >= prev, "output must not shrink as input grows");
            assert!(out < reserve_out, "output must stay below reserve_out");
            prev = out;
        }
    }

    #[test]
    fn test_get_amount_out_bounded_even_for_huge_input() {
        let env = Env::default();
        // Input dwarfing the reserves still cannot drain the out side
        let out = get_amount_out(&env, u128::MAX / 2, 1_000, 1_000);
        assert!(out < 1_000);
    }

    #[test]
    fn test_get_amount_out_preserves_product() {
        let env = Env::default();
        let reserve_in = 50_000_000_000_000u128 * E18;
        let reserve_out = 50_000_000_000_000u128 * E18;
        let amount_in = 999_999u128 * E18;
        let out = get_amount_out(&env, amount_in, reserve_in, reserve_out);

        let before = U256::from_u128(&env, reserve_in).mul(&U256::from_u128(&env, reserve_out));
        let after = U256::from_u128(&env, reserve_in + amount_in)
            .mul(&U256::from_u128(&env, reserve_out - out));
        assert!(!before.gt(&after), "reserve product must not decrease");
    }

    #[test]
    fn test_get_amount_out_u256_wide_operands() {
        let env = Env::default();
        // Reserves far beyond u128; quote must still be exact integer math:
        // amount_in  = 999_998_765_522 * 10^18
        // reserve_in = 99_999_876_552_200_000_000_000_000 * 10^18
        // reserve_out = 7_777_777_655_220_000_000_000_000 * 10^18
        let scale = U256::from_u128(&env, E18);
        let amount_in = U256::from_u128(&env, 999_998_765_522).mul(&scale);
        let reserve_in =
            U256::from_u128(&env, 99_999_876_552_200_000_000_000_000).mul(&scale);
        let reserve_out =
            U256::from_u128(&env, 7_777_777_655_220_000_000_000_000).mul(&scale);

        let out = get_amount_out_u256(&env, &amount_in, &reserve_in, &reserve_out);
        assert_eq!(
            out,
            U256::from_u128(&env, 77_777_776_552_199_222_222_234_478_007)
        );
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_get_amount_out_empty_pool() {
        let env = Env::default();
        get_amount_out(&env, 0, 0, 1_000);
    }

    // === quote tests ===

    #[test]
    fn test_quote_matches_ratio() {
        let env = Env::default();
        // 2:1 pool: 100 of A matches 50 of B
        assert_eq!(quote(&env, 100, 1_000, 500), 50);
        // 1:3 pool
        assert_eq!(quote(&env, 100, 500, 1_500), 300);
    }

    #[test]
    fn test_quote_rounds_down() {
        let env = Env::default();
        assert_eq!(quote(&env, 1, 3, 2), 0);
        assert_eq!(quote(&env, 5, 3, 2), 3);
    }

    #[test]
    fn test_quote_u256_result_above_u128() {
        let env = Env::default();
        // 10 A against reserves (1, 10^20) at 18 decimals: the matched
        // B amount is 10^39, which only the wide form can carry
        let amount_a = U256::from_u128(&env, 10 * E18);
        let reserve_a = U256::from_u128(&env, E18);
        let reserve_b =
            U256::from_u128(&env, 100_000_000_000_000_000_000).mul(&U256::from_u128(&env, E18));
        let expected =
            U256::from_u128(&env, 10 * E18).mul(&U256::from_u128(&env, 100_000_000_000_000_000_000));
        assert_eq!(quote_u256(&env, &amount_a, &reserve_a, &reserve_b), expected);
    }

    #[test]
    fn test_quote_large_reserves() {
        let env = Env::default();
        let reserve = 50_000_000_000_000u128 * E18;
        assert_eq!(quote(&env, 123_456 * E18, reserve, reserve), 123_456 * E18);
    }

    // === spot_price tests ===

    #[test]
    fn test_spot_price_balanced_pool() {
        let env = Env::default();
        assert_eq!(spot_price(&env, 1_000, 1_000), PRICE_SCALE as u128);
    }

    #[test]
    fn test_spot_price_ratio() {
        let env = Env::default();
        // B twice as plentiful as A: one A is worth two B
        assert_eq!(spot_price(&env, 500, 1_000), 2 * PRICE_SCALE as u128);
        assert_eq!(spot_price(&env, 1_000, 500), PRICE_SCALE as u128 / 2);
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_spot_price_empty_reserve() {
        let env = Env::default();
        spot_price(&env, 0, 1_000);
    }
}
