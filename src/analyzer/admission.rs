//! Admission control for in-flight fetches
//!
//! This module bounds how many fetches execute concurrently. It wraps a
//! counting semaphore behind a permit guard so that a slot is released on
//! every exit path, and instruments acquisition with in-flight/peak
//! counters so the bound can be verified from the outside.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Counting permit pool that bounds concurrently executing fetches
///
/// Waiters are served in whatever order the underlying tokio semaphore
/// grants permits (FIFO today); only the bound itself is guaranteed.
pub struct AdmissionController {
    semaphore: Arc<Semaphore>,
    in_flight: Arc<AtomicUsize>,
    peak: AtomicUsize,
}

/// Guard for one admitted fetch
///
/// The slot is returned to the pool when this guard drops, including on
/// panic unwind.
pub struct AdmissionPermit {
    _permit: OwnedSemaphorePermit,
    in_flight: Arc<AtomicUsize>,
}

impl Drop for AdmissionPermit {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

impl AdmissionController {
    /// Creates a pool with the given number of slots
    ///
    /// # Arguments
    ///
    /// * `limit` - Maximum number of simultaneously held permits
    pub fn new(limit: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(limit)),
            in_flight: Arc::new(AtomicUsize::new(0)),
            peak: AtomicUsize::new(0),
        }
    }

    /// Waits until a slot is free and claims it
    ///
    /// # Returns
    ///
    /// A permit guard that releases the slot when dropped
    pub async fn admit(&self) -> AdmissionPermit {
        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .expect("permit pool is never closed");

        let holders = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(holders, Ordering::SeqCst);

        AdmissionPermit {
            _permit: permit,
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    /// Returns the number of permits currently held
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Returns the highest number of permits held simultaneously so far
    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}
