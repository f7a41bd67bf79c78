//! An opt-in concurrency collaborator for [`Allocator`](crate::Allocator).
//!
//! The core [`Allocator`](crate::Allocator) is intentionally single-threaded:
//! it has no internal synchronization and every operation is wait-free and
//! bounded. Callers who need concurrent access must serialize
//! `init`/`allocate`/`free` under an external mutual-exclusion discipline,
//! treating the heap and the partition table as one unit of shared state.
//! [`SyncAllocator`] is exactly that discipline, applied with `spin::Mutex` —
//! it is a thin collaborator layered on top of the core, not part of it.

use crate::Allocator;
use spin::{Mutex, MutexGuard};

/// A [`Allocator`] behind a `spin::Mutex`, for use from more than one
/// thread (or interrupt context) at a time.
///
/// All three operations are still performed through the guard returned by
/// [`lock`](Self::lock); `SyncAllocator` adds serialization, nothing else —
/// it does not change the core's O(1)/O(N) bounds, nor does it add
/// coalescing, splitting, or any other behavior the core doesn't have.
pub struct SyncAllocator(Mutex<Allocator>);

impl SyncAllocator {
    /// Create a new, uninitialized [`SyncAllocator`].
    pub const fn new() -> Self {
        Self(Mutex::new(Allocator::new()))
    }

    /// Acquire exclusive access to the underlying [`Allocator`].
    ///
    /// Blocks (spins) until any other holder releases the lock; there is no
    /// timeout, matching the wait-free-once-acquired model of the core.
    pub fn lock(&self) -> MutexGuard<'_, Allocator> {
        self.0.lock()
    }
}

impl Default for SyncAllocator {
    fn default() -> Self {
        Self::new()
    }
}
