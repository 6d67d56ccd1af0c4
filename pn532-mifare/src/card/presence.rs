// pn532-mifare/src/card/presence.rs

//! Debounced card-presence tracking.
//!
//! Raw detections flicker when a card hovers at the edge of the field. The
//! monitor keeps an unstable reading guarded by a counter and only flips
//! its stable state after enough consecutive disagreeing polls, emitting
//! one event per flip.

use std::time::Duration;

use crate::device::{Device, Initialized};
use crate::types::Uid;
use crate::utils::ms;
use crate::Result;

/// Consecutive disagreeing polls required before the stable state flips.
pub const DEBOUNCE_THRESHOLD: u8 = 2;

/// Poll pacing for watch loops. A resting card needs no fast sampling, so
/// present polls back off; absent polls stay tight for snappy placement.
pub const POLL_PRESENT_MS: u64 = 300;
pub const POLL_ABSENT_MS: u64 = 150;

/// Edge emitted when the stable state flips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenceEvent {
    /// A card settled on the antenna.
    Placed { uid: Uid },
    /// The card left the field; carries the last stable UID for caller
    /// bookkeeping such as logging.
    Removed { uid: Option<Uid> },
}

/// Two-level debouncer over raw detection results.
#[derive(Debug, Clone)]
pub struct PresenceMonitor {
    threshold: u8,
    counter: u8,
    unstable_present: bool,
    stable_present: bool,
    last_uid: Option<Uid>,
}

impl Default for PresenceMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl PresenceMonitor {
    pub fn new() -> Self {
        Self::with_threshold(DEBOUNCE_THRESHOLD)
    }

    pub fn with_threshold(threshold: u8) -> Self {
        Self {
            threshold,
            counter: 0,
            unstable_present: false,
            stable_present: false,
            last_uid: None,
        }
    }

    /// Feed one raw detection result into the debouncer.
    ///
    /// The counter resets whenever the raw result agrees with the unstable
    /// reading and increments otherwise; at the threshold the unstable
    /// reading takes the raw value, and a resulting stable flip emits an
    /// event. Each flip requires a fresh run of disagreeing polls.
    pub fn observe(&mut self, raw: Option<Uid>) -> Option<PresenceEvent> {
        let raw_present = raw.is_some();

        if raw_present == self.unstable_present {
            self.counter = 0;
            return None;
        }

        self.counter += 1;
        if self.counter < self.threshold {
            return None;
        }

        self.unstable_present = raw_present;
        self.counter = 0;

        if self.unstable_present == self.stable_present {
            return None;
        }
        self.stable_present = self.unstable_present;

        if self.stable_present {
            // raw_present guarantees the UID here
            let uid = raw?;
            self.last_uid = Some(uid.clone());
            log::info!("card placed: {}", uid.to_hex());
            Some(PresenceEvent::Placed { uid })
        } else {
            let uid = self.last_uid.clone();
            if let Some(gone) = &uid {
                log::info!("card removed: {}", gone.to_hex());
            }
            Some(PresenceEvent::Removed { uid })
        }
    }

    /// One detection pass fed through the debouncer.
    pub fn poll(&mut self, device: &mut Device<Initialized>) -> Result<Option<PresenceEvent>> {
        let target = device.detect_target()?;
        Ok(self.observe(target.map(|t| t.uid)))
    }

    /// Current stable state.
    pub fn is_present(&self) -> bool {
        self.stable_present
    }

    /// UID of the current or most recent stable card.
    pub fn last_uid(&self) -> Option<&Uid> {
        self.last_uid.as_ref()
    }

    /// Recommended sleep before the next poll, given the stable state.
    pub fn poll_interval(&self) -> Duration {
        if self.stable_present {
            ms(POLL_PRESENT_MS)
        } else {
            ms(POLL_ABSENT_MS)
        }
    }
}
