// Declinekit - processor decline code classification
//
// Facade over the workspace crates: the decline table and classifier are
// always available, logging setup behind the `log` feature.

// Re-export core functionality
pub use declinekit_codes::*;

// Re-export optional crates
#[cfg(feature = "log")]
pub use declinekit_log;

/// Prelude for common imports.
///
/// ```
/// use declinekit::prelude::*;
///
/// let decoded = classify(2000);
/// assert_eq!(decoded.known_code(), Some(DeclineCode::DoNotHonor));
/// ```
pub mod prelude {
    pub use declinekit_codes::{
        DeclineClass, DeclineCode, DeclineCodeClassifier, DecodedDecline, classify,
    };
}
