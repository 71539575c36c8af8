//! YAML documents.
//!
//! Mappings are containers; strings, numbers and booleans are leaves. Nulls,
//! sequences and tagged values are left alone. A file may hold several
//! `---`-separated documents, each walked from the top.
//!
//! Plain integer literals must fit in 64 bits; a wider one such as
//! `id: 123456789012345678901234567890` is rejected as a parse error. Quote it
//! to keep it as text.

use std::borrow::Cow;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use super::Format;
use crate::error::FormatError;
use crate::tree::{Container, Entry, Leaf, Node};

/// Separator written between documents of a multi-document file.
const DOCUMENT_SEPARATOR: &str = "---\n";

/// Every document of a YAML stream, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YamlDocument {
    /// Parsed documents.
    pub documents: Vec<Value>,
}

impl Container for YamlDocument {
    fn entries(&mut self) -> Vec<Entry<'_>> {
        self.documents
            .iter_mut()
            .filter_map(|doc| match doc {
                Value::Mapping(map) => Some(map.entries()),
                _ => None,
            })
            .flatten()
            .collect()
    }
}

impl Container for Mapping {
    fn entries(&mut self) -> Vec<Entry<'_>> {
        self.iter_mut()
            .filter_map(|(key, value)| Some(Entry::new(key_name(key)?, classify(value))))
            .collect()
    }
}

impl Leaf for Value {
    fn text(&self) -> Cow<'_, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Bool(b) => Cow::Owned(b.to_string()),
            _ => Cow::Borrowed(""),
        }
    }

    fn replace(&mut self, text: String) {
        *self = Value::String(text);
    }
}

/// Path segment for a mapping key. Only scalar keys take part in paths.
fn key_name(key: &Value) -> Option<Cow<'_, str>> {
    match key {
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

fn classify(value: &mut Value) -> Node<'_> {
    match value {
        Value::Mapping(map) => Node::Container(map),
        Value::String(_) | Value::Number(_) | Value::Bool(_) => Node::Leaf(value),
        Value::Null | Value::Sequence(_) | Value::Tagged(_) => Node::Skip,
    }
}

/// Adapter for `.yml` / `.yaml` files.
#[derive(Debug, Clone, Copy)]
pub struct Yaml;

impl Format for Yaml {
    type Document = YamlDocument;

    const NAME: &'static str = "yaml";

    fn parse(bytes: &[u8]) -> Result<Self::Document, FormatError> {
        let documents = serde_yaml::Deserializer::from_slice(bytes)
            .map(Value::deserialize)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(YamlDocument { documents })
    }

    fn serialize(doc: &Self::Document) -> Result<Vec<u8>, FormatError> {
        let mut out = String::new();
        for (i, document) in doc.documents.iter().enumerate() {
            if i > 0 {
                out.push_str(DOCUMENT_SEPARATOR);
            }
            out.push_str(&serde_yaml::to_string(document)?);
        }
        Ok(out.into_bytes())
    }
}
