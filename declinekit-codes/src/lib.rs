//! Processor Decline Codes for Declinekit
//!
//! Translates the integer decline codes returned by Braintree (and PayPal
//! through Braintree) into a closed set of symbolic categories for logging,
//! analytics tagging or choosing user-facing copy.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Decline Classification                   │
//! │                                                          │
//! │   raw i32 ──▶ classify() ──▶ DecodedDecline              │
//! │                   │           ├─ code: i32               │
//! │                   │           ├─ known_code: Option<_>   │
//! │                   ▼           └─ class: Option<_>        │
//! │      HashMap<i32, DeclineCode>                           │
//! │      (built once, read-only)                             │
//! │                                                          │
//! │   2000..=2108  processor declined                        │
//! │   3000         processor network unavailable             │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown codes are not errors: they decode with `known_code() == None`.
//!
//! ## Quick Start
//!
//! ```rust
//! use declinekit_codes::{classify, DeclineClass, DeclineCode};
//!
//! let decoded = classify(2001);
//! assert_eq!(decoded.known_code(), Some(DeclineCode::InsufficientFunds));
//! assert_eq!(decoded.class(), Some(DeclineClass::ProcessorDeclined));
//!
//! match classify(9999).known_code() {
//!     Some(known) => println!("declined: {known}"),
//!     None => println!("unknown decline"),
//! }
//! ```

pub mod classifier;
pub mod code;
pub mod decoded;
pub mod error;

pub use classifier::*;
pub use code::*;
pub use decoded::*;
pub use error::*;
