#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a minimal leveled diagnostics facility: level-named factories
//! hand out short-lived [`Record`] values that accumulate appended fragments
//! and flush themselves to stderr as exactly one colorized, level-tagged line
//! when they go out of scope. A process-wide severity threshold decides at
//! construction time whether a record produces output at all, and a
//! process-wide mutex (on by default) serializes concurrent emissions so
//! lines from different threads never interleave.
//!
//! # Design
//!
//! Each record renders nothing until it is dropped. Appends accumulate into a
//! private buffer, the drop sanitizes the body (NUL and carriage-return
//! characters are removed, embedded newlines become indented continuation
//! lines), prepends the bold color-coded level tag, and writes the whole line
//! with a single call. Buffering the line rather than streaming it keeps the
//! stream mutex out of user code: the lock is held only for the one write,
//! never across the appends in between.
//!
//! Both configuration flags are snapshotted per record at construction. A
//! threshold or locking change made while a record is in flight applies to
//! records constructed afterwards, never to the one being built.
//!
//! # Invariants
//!
//! - With locking enabled, the bytes of one record's line appear contiguously
//!   on stderr; emissions from different threads are strictly serialized.
//! - An inactive record has no observable side effects: no write, no lock
//!   acquisition, no termination.
//! - Every emitted line ends with exactly one newline, and continuation
//!   lines are indented by two spaces under the tag.
//!
//! # Errors
//!
//! The API is total: appends accept any [`std::fmt::Display`] value and
//! configuration setters cannot fail. Write errors on stderr are discarded;
//! diagnostics are best-effort. Completing a [`fatal`] record aborts the
//! process after the line is written. The only error type in the crate is
//! [`ParseLevelError`], returned when parsing a [`Level`] from a string.
//!
//! # Examples
//!
//! ```
//! use logging::Level;
//!
//! logging::set_min_level(Level::Debug);
//!
//! logging::debug().append("resolved ").append(3).append(" targets");
//! logging::info().append("starting pass");
//! logging::warning().append("index stale, rebuilding");
//! logging::error().append("write failed: ").append("disk full");
//!
//! // Multi-line bodies stay visually nested under the level tag.
//! logging::info().append("summary:\n- copied 12\n- skipped 3");
//! ```
//!
//! A fatal record emits and then aborts the process:
//!
//! ```no_run
//! logging::fatal().append("state file corrupt");
//! // unreachable
//! ```

mod config;
mod level;
mod record;
mod sanitize;
mod style;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{locking_enabled, min_level, set_locking_enabled, set_min_level};
pub use level::{Level, ParseLevelError};
pub use record::{Record, debug, error, fatal, info, warning};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{LevelLayer, init_tracing};
