use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        panic!("Division by zero");
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let quotient = product.div(&U256::from_u128(env, denominator));

    into_u128(&quotient)
}

/// Floor of the square root of `a * b`, with the product formed at
/// 256-bit width so the multiplication cannot overflow.
///
/// The root of a 256-bit value always fits in 128 bits, so the search
/// runs over u128 directly.
pub fn sqrt_product(env: &Env, a: u128, b: u128) -> u128 {
    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    if product == U256::from_u32(env, 0) {
        return 0;
    }

    // Binary search for the largest root with root^2 <= product
    let mut lo: u128 = 1;
    let mut hi: u128 = u128::MAX;
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        let mid_256 = U256::from_u128(env, mid);
        if mid_256.mul(&mid_256).gt(&product) {
            hi = mid - 1;
        } else {
            lo = mid;
        }
    }
    lo
}

/// Narrow a U256 to u128, panics if the value does not fit
pub(crate) fn into_u128(value: &U256) -> u128 {
    match value.to_u128() {
        Some(v) => v,
        None => panic!("Amount exceeds u128"),
    }
}
