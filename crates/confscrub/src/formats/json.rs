//! JSON value trees.

use std::borrow::Cow;

use serde_json::{Map, Value};

use super::Format;
use crate::error::FormatError;
use crate::tree::{Container, Entry, Leaf, Node};

impl Container for Value {
    fn entries(&mut self) -> Vec<Entry<'_>> {
        match self {
            Value::Object(map) => map.entries(),
            _ => Vec::new(),
        }
    }
}

impl Container for Map<String, Value> {
    fn entries(&mut self) -> Vec<Entry<'_>> {
        self.iter_mut()
            .map(|(key, value)| Entry::new(key.as_str(), classify(value)))
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

fn classify(value: &mut Value) -> Node<'_> {
    match value {
        Value::Object(map) => Node::Container(map),
        Value::String(_) | Value::Number(_) | Value::Bool(_) => Node::Leaf(value),
        Value::Null | Value::Array(_) => Node::Skip,
    }
}

/// Adapter for `.json` files. Output is pretty printed with a trailing newline.
#[derive(Debug, Clone, Copy)]
pub struct Json;

impl Format for Json {
    type Document = Value;

    const NAME: &'static str = "json";

    fn parse(bytes: &[u8]) -> Result<Self::Document, FormatError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn serialize(doc: &Self::Document) -> Result<Vec<u8>, FormatError> {
        let mut out = serde_json::to_vec_pretty(doc)?;
        out.push(b'\n');
        Ok(out)
    }
}
