//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the record facility.
//!
//! This module provides a tracing subscriber layer that routes tracing events
//! through ordinary diagnostic records, so code instrumented with the
//! standard tracing macros (trace!, debug!, info!, warn!, error!) shares the
//! severity threshold, line format, and locking behaviour of records built
//! directly.
//!
//! # Usage
//!
//! ```rust,ignore
//! logging::init_tracing();
//!
//! tracing::info!("transfer started");
//! tracing::warn!("index stale, rebuilding");
//! ```

use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::level::Level;
use crate::record::Record;

/// A tracing layer that emits each event as a diagnostic record.
///
/// Event levels map onto record severities: `ERROR` becomes
/// [`Level::Error`], `WARN` becomes [`Level::Warning`], `INFO` becomes
/// [`Level::Info`], and both `DEBUG` and `TRACE` become [`Level::Debug`].
/// `Fatal` has no tracing counterpart and is never produced by the bridge.
#[derive(Clone, Copy, Debug, Default)]
pub struct LevelLayer;

impl LevelLayer {
    /// Creates a new layer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn map_level(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warning,
            tracing::Level::INFO => Level::Info,
            _ => Level::Debug,
        }
    }
}

impl<S> Layer<S> for LevelLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let level = Self::map_level(event.metadata().level());

        // Skip the visitor work when the record would be inactive anyway.
        if level < crate::config::min_level() {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            drop(Record::new(level).append(message));
        }
    }
}

/// Visitor that extracts the message field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a [`LevelLayer`] as the global tracing subscriber.
///
/// Events recorded through tracing macros are then gated and rendered
/// exactly like records built through the level-named factories. Call once
/// at startup; installing a second global subscriber panics inside
/// tracing-subscriber, as usual.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry().with(LevelLayer::new()).init();
}
