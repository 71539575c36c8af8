//! Java-style `.properties` files.
//!
//! The format is flat: every entry is a leaf at the top level and its dotted
//! path is the key itself, dots included. Comments are dropped on rewrite.

use indexmap::IndexMap;

use super::Format;
use crate::error::FormatError;
use crate::tree::{Container, Entry, Node};

/// Comment written at the top of every rewritten properties file.
pub const HEADER_COMMENT: &str = "Redacted by confscrub";

/// Parsed properties: keys in file order, last value wins for duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesDocument {
    entries: IndexMap<String, String>,
}

impl PropertiesDocument {
    /// Value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the file held no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Container for PropertiesDocument {
    fn entries(&mut self) -> Vec<Entry<'_>> {
        self.entries
            .iter_mut()
            .map(|(key, value)| Entry::new(key.as_str(), Node::Leaf(value)))
            .collect()
    }
}

/// Adapter for `.properties` files.
#[derive(Debug, Clone, Copy)]
pub struct Properties;

impl Format for Properties {
    type Document = PropertiesDocument;

    const NAME: &'static str = "properties";

    fn parse(bytes: &[u8]) -> Result<Self::Document, FormatError> {
        let mut entries = IndexMap::new();
        java_properties::PropertiesIter::new(bytes).read_into(|key, value| {
            entries.insert(key, value);
        })?;
        Ok(PropertiesDocument { entries })
    }

    fn serialize(doc: &Self::Document) -> Result<Vec<u8>, FormatError> {
        let mut buf = Vec::new();
        let mut writer = java_properties::PropertiesWriter::new(&mut buf);
        writer.write_comment(HEADER_COMMENT)?;
        for (key, value) in &doc.entries {
            writer.write(key, value)?;
        }
        writer.finish()?;
        Ok(buf)
    }
}
