//! Structured redaction.
//!
//! This module replaces the values at configured dotted key paths with a fixed
//! placeholder:
//!
//! - **Target keys**: exact dotted paths such as `database.password`.
//!
//! - **Placeholder**: `prefix + "OBFUSCATED" + suffix`, or the empty string for
//!   values that are blank to begin with.
//!
//! - **Walk**: one depth-first traversal shared by every document format.
//!
//! # Example
//!
//! ```
//! use confscrub::formats::{Format, Json};
//! use confscrub::redact::{walk, Placeholder, TargetKeys};
//!
//! let mut doc = Json::parse(br#"{"database": {"password": "hunter2"}}"#).unwrap();
//! let targets = TargetKeys::new(["database.password"]);
//! let placeholder = Placeholder::new("ENC(", ")");
//!
//! let report = walk(&mut doc, &targets, |v| placeholder.apply(v));
//! assert!(report.is_mutated());
//! assert_eq!(doc["database"]["password"], "ENC(OBFUSCATED)");
//! ```

mod placeholder;
mod walk;

pub use placeholder::{Placeholder, TargetKeys, MARKER};
pub use walk::{walk, WalkReport};
