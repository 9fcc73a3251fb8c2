//! crates/logging/src/config.rs
//! Process-wide logging state: severity threshold, locking flag, stream mutex.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::level::Level;

// Each global is independent; per-record snapshots only need atomicity, so
// Relaxed ordering is sufficient throughout.
static MIN_LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);
static LOCKING_ENABLED: AtomicBool = AtomicBool::new(true);
static STREAM_LOCK: Mutex<()> = Mutex::new(());

/// Sets the process-wide minimum severity that produces output.
///
/// The threshold is read when a record is constructed, so changing it affects
/// records created afterwards and never retroactively activates or silences a
/// record that is already in flight.
///
/// # Examples
///
/// ```
/// use logging::Level;
///
/// logging::set_min_level(Level::Warning);
/// assert_eq!(logging::min_level(), Level::Warning);
/// ```
pub fn set_min_level(level: Level) {
    MIN_LEVEL.store(level.rank(), Ordering::Relaxed);
}

/// Returns the current process-wide minimum severity.
///
/// Defaults to [`Level::Info`].
#[must_use]
pub fn min_level() -> Level {
    Level::from_rank(MIN_LEVEL.load(Ordering::Relaxed))
}

/// Enables or disables mutual exclusion between concurrent emissions.
///
/// When enabled (the default), each active record holds the process-wide
/// stream mutex while its fully rendered line is written, so lines from
/// different threads never interleave. When disabled no lock is taken and
/// concurrent emissions may interleave at the byte level; single-threaded
/// programs can opt out of the locking cost this way.
///
/// Every record snapshots the flag at construction, so a toggle that races
/// with an in-flight record never half-applies to that record's emission.
pub fn set_locking_enabled(enabled: bool) {
    LOCKING_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Reports whether emissions are currently serialized by the stream mutex.
#[must_use]
pub fn locking_enabled() -> bool {
    LOCKING_ENABLED.load(Ordering::Relaxed)
}

// A diagnostics facility must keep emitting after another thread panicked
// mid-log; the guarded region holds no invariant a poisoned lock could have
// broken, so the guard is recovered rather than propagated.
pub(crate) fn stream_guard() -> MutexGuard<'static, ()> {
    STREAM_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}
