//! Utilities: small, reusable helpers used across the crate.
//!
//! Hex rendering/parsing backs log output and operator-entered key material;
//! the timeout helper centralizes millisecond-to-Duration conversion for the
//! crate's fixed waits.

pub mod hex;
pub mod timeout;

// Re-export the most common helpers at the `utils` module level so callers can
// use `crate::utils::bytes_to_hex(...)` etc if they prefer.
pub use hex::*;
pub use timeout::*;
