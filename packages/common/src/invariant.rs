//! # Invariant Assertions
//!
//! Caller-contract checks for conditions that indicate a programming error,
//! not a recoverable runtime condition. Violations abort the current
//! operation with a panic; everything recoverable goes through `Result`
//! instead.

/// Assert a caller contract. Panics with the given message when the
/// condition does not hold.
#[macro_export]
macro_rules! invariant {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            panic!("invariant violation: {}", format_args!($($arg)+));
        }
    };
}
