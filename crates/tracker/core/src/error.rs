//! Common error infrastructure for tracker-core.
//!
//! Every error the core can produce is recovered locally by the caller: a
//! failed keypad lookup resets the input state and nothing else changes.
//! Configuration load failures live in the content crate, which owns I/O.

/// Severity level of an error, used for categorization and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Invalid user input, e.g. a keypad digit outside `1..=9`.
    ///
    /// Dropped silently after resetting the input state.
    Validation,

    /// Configuration inconsistency, e.g. a zone-item cell naming an item the
    /// catalog does not contain. Worth a log line, never fatal.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error points at broken configuration.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all tracker-core errors.
pub trait TrackerError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Failure to translate a `(zone, item)` keypad pair into a catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("keypad digits out of range: zone {zone}, item {item} (must be 1-9)")]
    OutOfRange { zone: u8, item: u8 },

    #[error("no item defined for zone {zone} item {item}")]
    Undefined { zone: u8, item: u8 },

    #[error("item name misconfigured: {name}")]
    Misconfigured { name: String },
}

impl TrackerError for LookupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OutOfRange { .. } | Self::Undefined { .. } => ErrorSeverity::Validation,
            Self::Misconfigured { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "LOOKUP_OUT_OF_RANGE",
            Self::Undefined { .. } => "LOOKUP_UNDEFINED",
            Self::Misconfigured { .. } => "LOOKUP_MISCONFIGURED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_lookup_errors() {
        let range = LookupError::OutOfRange { zone: 0, item: 5 };
        let undefined = LookupError::Undefined { zone: 1, item: 1 };
        let misconfigured = LookupError::Misconfigured {
            name: "Hookshot".into(),
        };

        assert_eq!(range.severity(), ErrorSeverity::Validation);
        assert_eq!(undefined.severity(), ErrorSeverity::Validation);
        assert!(misconfigured.severity().is_internal());
        assert_eq!(misconfigured.error_code(), "LOOKUP_MISCONFIGURED");
        assert_eq!(misconfigured.to_string(), "item name misconfigured: Hookshot");
    }
}
