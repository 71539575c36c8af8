//! Document format adapters.
//!
//! Each adapter parses raw file content into a native tree that implements
//! [`Container`], and serializes that tree back once the walk has changed it.
//! Adapters own encoding, escaping and layout; the walk never sees bytes.
//!
//! | format       | extensions      | write-back                         |
//! |--------------|-----------------|------------------------------------|
//! | `Properties` | `.properties`   | `key=value` lines, ISO-8859-1      |
//! | `Yaml`       | `.yml`, `.yaml` | block style, one or more documents |
//! | `Json`       | `.json`         | pretty printed, key order kept     |
//! | `Xml`        | `.xml`          | plain serialization                |

mod json;
mod properties;
mod xml;
mod yaml;

use std::fmt;
use std::path::Path;

use serde::Serialize;

pub use json::Json;
pub use properties::{Properties, PropertiesDocument, HEADER_COMMENT};
pub use xml::Xml;
pub use yaml::{Yaml, YamlDocument};

use crate::error::{Error, FormatError, Result};
use crate::redact::{walk, Placeholder, TargetKeys, WalkReport};
use crate::tree::Container;

/// A document format: bytes in, tree out, and back.
pub trait Format {
    /// Parsed document.
    type Document: Container + 'static;

    /// Short name used in logs.
    const NAME: &'static str;

    /// Parse raw file content.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid for this format.
    fn parse(bytes: &[u8]) -> std::result::Result<Self::Document, FormatError>;

    /// Serialize a document to raw file content.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be emitted.
    fn serialize(doc: &Self::Document) -> std::result::Result<Vec<u8>, FormatError>;
}

/// The format of a candidate file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileFormat {
    /// Java-style `key=value` files.
    Properties,
    /// YAML mapping documents.
    Yaml,
    /// JSON value trees.
    Json,
    /// XML element trees.
    Xml,
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Properties => Properties::NAME,
            Self::Yaml => Yaml::NAME,
            Self::Json => Json::NAME,
            Self::Xml => Xml::NAME,
        };
        f.write_str(name)
    }
}

/// Outcome of redacting one document in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Redacted {
    /// Keys replaced, in document order.
    pub report: WalkReport,
    /// New file content; `None` when nothing changed.
    pub output: Option<Vec<u8>>,
}

impl FileFormat {
    /// Detect the format from a file extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "properties" => Some(Self::Properties),
            "yml" | "yaml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "xml" => Some(Self::Xml),
            _ => None,
        }
    }

    /// Parse `bytes`, redact `targets` and serialize again if anything changed.
    ///
    /// `path` is only used to label errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] or [`Error::Serialize`] wrapped with `path`.
    pub fn redact(
        self,
        path: &Path,
        bytes: &[u8],
        targets: &TargetKeys,
        placeholder: &Placeholder,
    ) -> Result<Redacted> {
        match self {
            Self::Properties => redact_document::<Properties>(path, bytes, targets, placeholder),
            Self::Yaml => redact_document::<Yaml>(path, bytes, targets, placeholder),
            Self::Json => redact_document::<Json>(path, bytes, targets, placeholder),
            Self::Xml => redact_document::<Xml>(path, bytes, targets, placeholder),
        }
    }
}

fn redact_document<F: Format>(
    path: &Path,
    bytes: &[u8],
    targets: &TargetKeys,
    placeholder: &Placeholder,
) -> Result<Redacted> {
    let mut doc = F::parse(bytes).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let report = walk(&mut doc, targets, |value| placeholder.apply(value));
    if !report.is_mutated() {
        return Ok(Redacted {
            report,
            output: None,
        });
    }

    let output = F::serialize(&doc).map_err(|source| Error::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Redacted {
        report,
        output: Some(output),
    })
}
