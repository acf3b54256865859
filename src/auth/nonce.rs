//! Nonces for signed Bittrex requests.
//!
//! The nonce travels in the query string and is therefore covered by
//! `apisign`. Bittrex remembers the nonces it has seen per API key and
//! answers a repeat with `NONCE_USED`, so a key shared by several processes
//! needs a provider that can be moved past a value seen elsewhere.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of per-request nonces.
///
/// Values handed out by one provider must never repeat.
pub trait NonceProvider: Send + Sync {
    /// Next nonce for a signed request.
    fn next_nonce(&self) -> u64;
}

/// Microsecond clock nonce that never goes backwards.
///
/// Two calls within the same microsecond, or after the wall clock stepped
/// back, get `previous + 1`.
#[derive(Debug, Default)]
pub struct IncreasingNonce {
    floor: AtomicU64,
}

impl IncreasingNonce {
    /// Provider seeded from the clock only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider whose first nonce is greater than `used`.
    ///
    /// Useful when resuming with a key whose last nonce is known.
    pub fn starting_after(used: u64) -> Self {
        Self {
            floor: AtomicU64::new(used),
        }
    }

    /// Make sure later nonces are greater than `used`.
    ///
    /// Call this after a `NONCE_USED` rejection with the nonce that was
    /// refused; the retry then gets a fresh value.
    pub fn advance_past(&self, used: u64) {
        self.floor.fetch_max(used, Ordering::SeqCst);
    }

    fn clock_micros() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX))
            .unwrap_or_default()
    }
}

impl NonceProvider for IncreasingNonce {
    fn next_nonce(&self) -> u64 {
        let now = Self::clock_micros();
        let bump = |previous: u64| Some(now.max(previous.saturating_add(1)));
        match self
            .floor
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, bump)
        {
            Ok(previous) | Err(previous) => now.max(previous.saturating_add(1)),
        }
    }
}
