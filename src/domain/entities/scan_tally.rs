//! Scan tally entity
//!
//! Counters summarising a run. `TallyCounter` is the accumulator shared by
//! workers during the run; `ScanTally` is the plain snapshot handed out
//! afterwards.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Snapshot of a run's counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanTally {
    /// Signal files secured in the vault
    pub kept: usize,
    pub noise: usize,
    pub neutral: usize,
    /// Signal files whose copy into the vault failed
    pub copy_failed: usize,
    /// Accepted files whose content could not be read
    pub read_errors: usize,
}

impl ScanTally {
    /// Files kept, noise or neutral
    ///
    /// Failed copies and read errors have their own counters and are not
    /// part of the total.
    pub fn classified(&self) -> usize {
        self.kept + self.noise + self.neutral
    }
}

/// Thread-safe accumulator for a run in progress
#[derive(Debug, Default)]
pub struct TallyCounter {
    kept: AtomicUsize,
    noise: AtomicUsize,
    neutral: AtomicUsize,
    copy_failed: AtomicUsize,
    read_errors: AtomicUsize,
}

impl TallyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_kept(&self) {
        self.kept.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_noise(&self) {
        self.noise.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_neutral(&self) {
        self.neutral.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_copy_failed(&self) {
        self.copy_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_read_error(&self) {
        self.read_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ScanTally {
        ScanTally {
            kept: self.kept.load(Ordering::Relaxed),
            noise: self.noise.load(Ordering::Relaxed),
            neutral: self.neutral.load(Ordering::Relaxed),
            copy_failed: self.copy_failed.load(Ordering::Relaxed),
            read_errors: self.read_errors.load(Ordering::Relaxed),
        }
    }
}
