//! `confscrub` - Redacts secret values from built configuration files
//!
//! This library walks a build output directory, selects configuration files
//! by glob pattern and replaces the values at configured dotted key paths in
//! `.properties`, YAML, JSON and XML documents with a fixed placeholder.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod formats;
pub mod logging;
pub mod redact;
pub mod runner;
pub mod select;
pub mod tree;

pub use config::Config;
pub use error::{Error, Result};
pub use formats::FileFormat;
pub use logging::init_logging;
pub use redact::{walk, Placeholder, TargetKeys, WalkReport};
pub use runner::{Runner, RunSummary};
pub use select::{Candidate, Selector};
