#![no_std]

mod error;
mod pool;

pub use error::*;
pub use pool::*;

/// Fixed-point scale (10^18) used to express spot prices as integers
pub const PRICE_SCALE: i128 = 1_000_000_000_000_000_000;
