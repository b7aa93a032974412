//! Decline code classifier

use crate::code::DeclineCode;
use crate::decoded::DecodedDecline;

/// Handle over the shared decline table.
///
/// Zero-sized and `Copy`; every instance reads the same immutable table, so
/// it can be handed to any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeclineCodeClassifier;

impl DeclineCodeClassifier {
    /// Create a classifier
    pub const fn new() -> Self {
        Self
    }

    /// Classify a raw processor code
    pub fn classify(&self, code: i32) -> DecodedDecline {
        DecodedDecline::new(code)
    }

    /// Look up a known decline, skipping the decoded wrapper
    pub fn lookup(&self, code: i32) -> Option<DeclineCode> {
        DeclineCode::from_code(code)
    }

    /// Number of known declines
    pub fn len(&self) -> usize {
        DeclineCode::ALL.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        DeclineCode::ALL.is_empty()
    }

    /// Iterate `(code, decline)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (i32, DeclineCode)> + '_ {
        DeclineCode::ALL.iter().map(|&known| (known.code(), known))
    }
}

/// Classify a raw processor code against the shared table
pub fn classify(code: i32) -> DecodedDecline {
    DecodedDecline::new(code)
}
