//! Timeout helpers used across the crate.
//!
//! Every fixed wait in the protocol layer (post-command sleeps, inter-block
//! and inter-sector delays) goes through `ms` so suspension points are easy
//! to locate.

use std::time::Duration;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
