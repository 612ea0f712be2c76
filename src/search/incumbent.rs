//! # Shared Best Record
//!
//! Cross-worker holder of the best valid combination seen so far.
//!
//! The authoritative record lives behind a `Mutex`. A relaxed atomic mirror of
//! its dps lets workers skip the lock when a local improvement cannot beat the
//! global value. Every install re-checks against the guarded value, so the
//! best dps never decreases no matter how workers race.
//!
//! New bests are handed to the [`SearchObserver`] while the lock is held,
//! which serializes reporting with respect to updates.

use super::evaluator::Combination;
use super::SearchObserver;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

/// A valid combination together with where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct BestRecord {
    pub combination: Combination,
    /// Linear combination index.
    pub index: u64,
    pub worker: usize,
}

impl BestRecord {
    #[inline]
    pub fn dps(&self) -> f64 {
        self.combination.totals.dps
    }
}

#[derive(Debug)]
pub struct SharedBest {
    /// `f64::to_bits` of the installed dps; 0.0 while empty.
    dps_bits: AtomicU64,
    record: Mutex<Option<BestRecord>>,
}

impl Default for SharedBest {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedBest {
    pub fn new() -> Self {
        Self {
            dps_bits: AtomicU64::new(0.0f64.to_bits()),
            record: Mutex::new(None),
        }
    }

    /// Last published dps. May lag behind a concurrent install.
    #[inline]
    pub fn dps(&self) -> f64 {
        f64::from_bits(self.dps_bits.load(Ordering::Relaxed))
    }

    /// Installs `candidate` if it is strictly better than the current record.
    /// Returns whether it was installed.
    pub fn try_install(&self, candidate: BestRecord, observer: &dyn SearchObserver) -> bool {
        if candidate.dps() <= self.dps() {
            return false;
        }

        let mut guard = self.lock();
        let current = guard.as_ref().map_or(0.0, BestRecord::dps);
        if candidate.dps() <= current {
            return false;
        }

        self.dps_bits
            .store(candidate.dps().to_bits(), Ordering::Relaxed);
        observer.on_new_best(&candidate);
        *guard = Some(candidate);
        true
    }

    pub fn snapshot(&self) -> Option<BestRecord> {
        self.lock().clone()
    }

    pub fn into_inner(self) -> Option<BestRecord> {
        self.record
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // A panicking observer must not hide the record from the other workers.
    fn lock(&self) -> MutexGuard<'_, Option<BestRecord>> {
        self.record
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
