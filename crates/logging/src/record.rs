use std::fmt::{self, Write as _};
use std::io::{self, Write as _};
use std::marker::PhantomData;
use std::process;

use crate::config;
use crate::level::Level;
use crate::sanitize::sanitize_body;
use crate::style;

/// One in-flight diagnostic record, flushed when it goes out of scope.
///
/// A record is obtained from a level-named factory such as [`info`] or
/// [`error`], decides at construction whether it is active (its level is at
/// or above [`min_level`](crate::min_level)), and accumulates appended values
/// until it is dropped. The drop writes the fully rendered line to stderr in
/// a single call, under the process-wide stream mutex when locking was
/// enabled at construction time, so concurrent records never interleave.
///
/// Records are deliberately confined: they implement neither [`Clone`] nor
/// [`Send`], so a record stays on the thread and at the call site that
/// created it. An inactive record performs no work at all; appends are no-ops
/// and the drop writes nothing.
///
/// # Examples
///
/// ```
/// logging::warning()
///     .append("retrying in ")
///     .append(250)
///     .append("ms");
/// ```
pub struct Record {
    level: Level,
    active: bool,
    locking: bool,
    buffer: String,
    // Records belong to the thread that created them.
    _not_send: PhantomData<*const ()>,
}

impl Record {
    pub(crate) fn new(level: Level) -> Self {
        Self {
            level,
            active: level >= config::min_level(),
            locking: config::locking_enabled(),
            buffer: String::new(),
            _not_send: PhantomData,
        }
    }

    /// Returns the record's severity.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Reports whether the record passed the severity threshold when it was
    /// constructed.
    ///
    /// Activity is fixed for the record's lifetime; raising the threshold
    /// after construction does not silence a record already in flight.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Appends `value`, rendered through its [`fmt::Display`] impl, to the
    /// record body.
    ///
    /// Calls chain by value and the final record in the chain emits when the
    /// statement ends. Appending to an inactive record is a no-op.
    pub fn append(mut self, value: impl fmt::Display) -> Self {
        if self.active {
            // Formatting into a String cannot fail unless the Display impl
            // itself reports an error; such fragments are silently skipped.
            let _ = write!(self.buffer, "{value}");
        }
        self
    }
}

impl Drop for Record {
    fn drop(&mut self) {
        if !self.active {
            return;
        }

        let line = render_line(self.level, &self.buffer);

        {
            let _guard = self.locking.then(config::stream_guard);
            let mut stderr = io::stderr().lock();
            // Diagnostics are best-effort; a logger has no channel to report
            // its own write failures.
            let _ = stderr.write_all(line.as_bytes());
            let _ = stderr.flush();
        }

        if self.level == Level::Fatal {
            process::abort();
        }
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("level", &self.level)
            .field("active", &self.active)
            .field("locking", &self.locking)
            .finish_non_exhaustive()
    }
}

// The whole line is rendered up front so the stream sees exactly one write
// per record.
pub(crate) fn render_line(level: Level, body: &str) -> String {
    let body = sanitize_body(body);
    let mut line = String::with_capacity(16 + body.len());
    line.push_str(style::BOLD);
    line.push_str(style::color(level));
    line.push(level.tag());
    line.push_str(style::RESET);
    line.push(' ');
    line.push_str(&body);
    line.push('\n');
    line
}

/// Starts a debug-level record.
pub fn debug() -> Record {
    Record::new(Level::Debug)
}

/// Starts an info-level record.
pub fn info() -> Record {
    Record::new(Level::Info)
}

/// Starts a warning-level record.
pub fn warning() -> Record {
    Record::new(Level::Warning)
}

/// Starts an error-level record.
pub fn error() -> Record {
    Record::new(Level::Error)
}

/// Starts a fatal-level record.
///
/// When the record goes out of scope the rendered line is written and the
/// process is aborted. The abort is unconditional and uncatchable; it is a
/// deliberate control-flow exit, not an error that callers can observe.
pub fn fatal() -> Record {
    Record::new(Level::Fatal)
}
