//! Wire timing constants.
//!
//! OpenTherm runs at 1000 bits/s with bi-phase (Manchester) coding, so
//! every bit is two 500 us half-periods with a guaranteed transition in
//! the middle. The receive thresholds below discriminate those mid-bit
//! transitions from the optional transitions at bit boundaries: a
//! boundary edge trails the last sampled edge by ~500 us, the next
//! mid-bit edge by ~1000 us, so anything past 750 us is a sample point.

/// Half of one bit period. Each transmitted bit holds the line at one
/// level for this long, then at the opposite level for the same time.
pub const HALF_BIT_US: u32 = 500;

/// A start bit's confirming second-half edge must arrive within this
/// window of its leading edge.
pub const START_BIT_WINDOW_US: u64 = 750;

/// While receiving, an edge later than this after the previously
/// recorded edge samples the next bit; earlier edges are boundary
/// transitions and are ignored.
pub const SAMPLE_THRESHOLD_US: u64 = 750;

/// Upper bound on any in-flight exchange. A slave must answer within
/// 800 ms; past one second the exchange is abandoned as timed out.
pub const WATCHDOG_TIMEOUT_US: u64 = 1_000_000;

/// Mandatory quiet period between the end of one exchange and the
/// start of the next, so the slave can turn the line around.
pub const GUARD_INTERVAL_US: u64 = 100_000;

/// Idle hold after line setup before the first exchange, giving the
/// interface circuit and the slave time to settle.
pub const BOOT_SETTLE_MS: u32 = 1_000;
