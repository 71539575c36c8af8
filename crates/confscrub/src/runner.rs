//! Redaction runs over a directory tree.
//!
//! The runner is the host around the engine: it asks the [`Selector`] for
//! candidates, hands each one to the adapter for its extension and writes the
//! result back only when a key was actually redacted. The whole file is
//! parsed, walked and serialized in memory before the single write.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::formats::FileFormat;
use crate::redact::{Placeholder, TargetKeys};
use crate::select::{Candidate, Selector};

/// Keys redacted in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRedaction {
    /// Path relative to the run root.
    pub file: String,
    /// Format the file was handled as.
    pub format: FileFormat,
    /// Redacted keys in document order.
    pub keys: Vec<String>,
}

/// What happened to a single candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// No adapter for this extension.
    Unsupported,
    /// Parsed and walked, nothing to redact. The file was not written.
    Unchanged,
    /// At least one key was redacted.
    Redacted(FileRedaction),
}

/// Totals for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Root that was scanned.
    pub root: PathBuf,
    /// Whether writes were suppressed.
    pub dry_run: bool,
    /// Selected files that were processed.
    pub files_scanned: usize,
    /// Files that had at least one key redacted.
    pub files_redacted: usize,
    /// Total redacted keys.
    pub keys_redacted: usize,
    /// Per-file details, in processing order.
    pub redactions: Vec<FileRedaction>,
}

impl RunSummary {
    fn record(&mut self, redaction: FileRedaction) {
        self.files_redacted += 1;
        self.keys_redacted += redaction.keys.len();
        self.redactions.push(redaction);
    }
}

/// Runs redaction over one root directory.
#[derive(Debug, Clone)]
pub struct Runner {
    root: PathBuf,
    selector: Selector,
    targets: TargetKeys,
    placeholder: Placeholder,
    dry_run: bool,
}

impl Runner {
    /// Build a runner from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if a glob pattern does not compile.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            root: config.root.clone(),
            selector: config.selector()?,
            targets: config.target_keys(),
            placeholder: config.placeholder(),
            dry_run: false,
        })
    }

    /// Walk and report without writing any file.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The directory this runner scans.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Redact every selected file under the root.
    ///
    /// Stops at the first failing file; files already rewritten stay
    /// rewritten.
    ///
    /// # Errors
    ///
    /// Returns the first walk, read, parse, serialize or write error.
    pub fn run(&self) -> Result<RunSummary> {
        let mut summary = RunSummary {
            root: self.root.clone(),
            dry_run: self.dry_run,
            ..RunSummary::default()
        };

        if self.targets.is_empty() {
            info!("no keys configured for redaction, skipping");
            return Ok(summary);
        }

        if !self.root.exists() {
            info!(root = %self.root.display(), "root directory does not exist, skipping");
            return Ok(summary);
        }

        for candidate in self.selector.select(&self.root) {
            let candidate = candidate?;
            summary.files_scanned += 1;
            if let FileOutcome::Redacted(redaction) = self.process_file(&candidate)? {
                summary.record(redaction);
            }
        }

        info!(
            files_scanned = summary.files_scanned,
            files_redacted = summary.files_redacted,
            keys_redacted = summary.keys_redacted,
            "redaction finished"
        );
        Ok(summary)
    }

    /// Redact one candidate file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`], [`Error::Parse`], [`Error::Serialize`] or
    /// [`Error::Write`] labelled with the file path.
    pub fn process_file(&self, candidate: &Candidate) -> Result<FileOutcome> {
        let Some(format) = FileFormat::from_path(&candidate.path) else {
            debug!(file = %candidate.relative, "no adapter for file type");
            return Ok(FileOutcome::Unsupported);
        };

        info!(file = %candidate.relative, %format, "processing file");

        let bytes = fs::read(&candidate.path).map_err(|source| Error::Read {
            path: candidate.path.clone(),
            source,
        })?;

        let redacted = format.redact(&candidate.path, &bytes, &self.targets, &self.placeholder)?;
        let Some(output) = redacted.output else {
            debug!(file = %candidate.relative, "nothing to redact");
            return Ok(FileOutcome::Unchanged);
        };

        if self.dry_run {
            info!(file = %candidate.relative, "dry run, not writing");
        } else {
            fs::write(&candidate.path, output).map_err(|source| Error::Write {
                path: candidate.path.clone(),
                source,
            })?;
            debug!(file = %candidate.relative, "file rewritten");
        }

        Ok(FileOutcome::Redacted(FileRedaction {
            file: candidate.relative.clone(),
            format,
            keys: redacted.report.into_keys(),
        }))
    }
}
