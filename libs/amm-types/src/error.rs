use soroban_sdk::contracterror;

/// Failure taxonomy for the pool contract.
///
/// Every failure traps and rolls the invocation back; no partial state
/// is ever visible. Transfer failures (insufficient balance or missing
/// authorization on the collaborating token contracts) trap inside the
/// token itself and are not wrapped here.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    /// Non-owner attempted the bootstrap deposit
    Unauthorized = 1,
    /// A zero input amount, or a computation that would mint or return zero
    ZeroAmount = 2,
    /// Ledger time exceeds the supplied deadline
    Expired = 3,
    /// A computed amount fell below the caller-supplied minimum
    SlippageExceeded = 4,
    /// Operation against an empty or uninitialized pool
    InsufficientLiquidity = 5,
    /// Caller holds fewer liquidity shares than requested
    InsufficientBalance = 6,
    /// Pool configuration was already written
    AlreadyInitialized = 7,
    /// Token arguments do not resolve to the configured pair
    InvalidPath = 8,
    /// A computed amount exceeds the representable token range
    Overflow = 9,
}
