//! crates/logging/src/level.rs
//! Severity levels and the rank ordering used for threshold gating.

use std::fmt;
use std::str::FromStr;

/// Severity of a diagnostic record.
///
/// Variants are declared in ascending rank, so the derived [`Ord`] provides
/// the comparison used when a record is gated against the process-wide
/// threshold: a record is emitted when its level is at or above
/// [`min_level`](crate::min_level).
///
/// # Examples
///
/// ```
/// use logging::Level;
///
/// assert!(Level::Debug < Level::Info);
/// assert!(Level::Error < Level::Fatal);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Level {
    /// Diagnostic detail intended for developers.
    Debug = 0,
    /// Routine progress information.
    Info = 1,
    /// Something surprising that did not stop the operation.
    Warning = 2,
    /// A failed operation.
    Error = 3,
    /// An unrecoverable failure; completing a fatal record aborts the process.
    Fatal = 4,
}

impl Level {
    /// Returns the lowercase label used when parsing and displaying a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Level;
    ///
    /// assert_eq!(Level::Info.as_str(), "info");
    /// assert_eq!(Level::Warning.as_str(), "warning");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    /// Returns the single-character marker rendered at the start of every
    /// emitted line.
    ///
    /// Info uses `>` rather than `I` so routine output reads as a stream of
    /// arrows while the remaining levels keep their initial.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Level;
    ///
    /// assert_eq!(Level::Info.tag(), '>');
    /// assert_eq!(Level::Error.tag(), 'E');
    /// ```
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Debug => 'D',
            Self::Info => '>',
            Self::Warning => 'W',
            Self::Error => 'E',
            Self::Fatal => 'F',
        }
    }

    // Atomics store the discriminant; out-of-range values decode to the
    // default threshold.
    pub(crate) const fn from_rank(rank: u8) -> Self {
        match rank {
            0 => Self::Debug,
            2 => Self::Warning,
            3 => Self::Error,
            4 => Self::Fatal,
            _ => Self::Info,
        }
    }

    pub(crate) const fn rank(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Level`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseLevelError {
    _private: (),
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised diagnostic level")
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ParseLevelError { _private: () }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_ascend_with_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for level in [
            Level::Debug,
            Level::Info,
            Level::Warning,
            Level::Error,
            Level::Fatal,
        ] {
            assert_eq!(level.as_str().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn from_str_rejects_unknown_labels() {
        assert!("verbose".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
        assert!("Info".parse::<Level>().is_err());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Level::Warning.to_string(), "warning");
        assert_eq!(Level::Fatal.to_string(), "fatal");
    }

    #[test]
    fn tags_are_distinct() {
        let tags = [
            Level::Debug.tag(),
            Level::Info.tag(),
            Level::Warning.tag(),
            Level::Error.tag(),
            Level::Fatal.tag(),
        ];
        for (i, a) in tags.iter().enumerate() {
            for b in &tags[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn rank_round_trips_for_every_level() {
        for level in [
            Level::Debug,
            Level::Info,
            Level::Warning,
            Level::Error,
            Level::Fatal,
        ] {
            assert_eq!(Level::from_rank(level.rank()), level);
        }
    }

    #[test]
    fn from_rank_defaults_out_of_range_values_to_info() {
        assert_eq!(Level::from_rank(5), Level::Info);
        assert_eq!(Level::from_rank(255), Level::Info);
    }

    #[test]
    fn parse_error_mentions_the_problem() {
        let error = "nope".parse::<Level>().unwrap_err();
        assert!(error.to_string().contains("level"));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn level_serde_round_trip() {
            for level in [
                Level::Debug,
                Level::Info,
                Level::Warning,
                Level::Error,
                Level::Fatal,
            ] {
                let json = serde_json::to_string(&level).unwrap();
                let decoded: Level = serde_json::from_str(&json).unwrap();
                assert_eq!(level, decoded);
            }
        }

        #[test]
        fn level_serializes_as_variant_name() {
            let json = serde_json::to_string(&Level::Warning).unwrap();
            assert_eq!(json, "\"Warning\"");
        }
    }
}
