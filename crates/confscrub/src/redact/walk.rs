//! The generic redaction walk.

use tracing::{info, trace};

use super::placeholder::TargetKeys;
use crate::tree::{join_path, Container, Node};

/// What a walk changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkReport {
    redacted: Vec<String>,
}

impl WalkReport {
    /// Whether any leaf was replaced.
    #[must_use]
    pub fn is_mutated(&self) -> bool {
        !self.redacted.is_empty()
    }

    /// Redacted keys in traversal order.
    #[must_use]
    pub fn redacted_keys(&self) -> &[String] {
        &self.redacted
    }

    /// Consume the report, returning the redacted keys.
    #[must_use]
    pub fn into_keys(self) -> Vec<String> {
        self.redacted
    }
}

/// Walk `root` depth-first and replace every leaf whose dotted path is in
/// `targets` with `placeholder(current_value)`.
///
/// Children are visited in document order, which is also the order of the
/// keys in the returned report and of the `redacted key` log events.
pub fn walk<F>(root: &mut dyn Container, targets: &TargetKeys, placeholder: F) -> WalkReport
where
    F: Fn(&str) -> String,
{
    let mut report = WalkReport::default();
    if !targets.is_empty() {
        walk_container(root, "", targets, &placeholder, &mut report);
    }
    report
}

fn walk_container<F>(
    container: &mut dyn Container,
    parent: &str,
    targets: &TargetKeys,
    placeholder: &F,
    report: &mut WalkReport,
) where
    F: Fn(&str) -> String,
{
    for entry in container.entries() {
        let full_key = join_path(parent, &entry.name);
        match entry.node {
            Node::Container(child) => {
                walk_container(child, &full_key, targets, placeholder, report);
            }
            Node::Leaf(leaf) if targets.contains(&full_key) => {
                let replacement = placeholder(leaf.text().as_ref());
                leaf.replace(replacement);
                info!(key = %full_key, "redacted key");
                report.redacted.push(full_key);
            }
            Node::Leaf(_) | Node::Skip => {
                trace!(key = %full_key, "skipped");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redact::Placeholder;
    use crate::tree::{Entry, Leaf};
    use indexmap::IndexMap;
    use std::borrow::Cow;

    /// Minimal in-memory tree for exercising the walk without any format.
    #[derive(Debug, Clone, PartialEq)]
    enum Value {
        Map(IndexMap<String, Value>),
        Text(String),
        Number(i64),
        Null,
    }

    impl Leaf for Value {
        fn text(&self) -> Cow<'_, str> {
            match self {
                Self::Text(s) => Cow::Borrowed(s),
                Self::Number(n) => Cow::Owned(n.to_string()),
                Self::Map(_) | Self::Null => Cow::Borrowed(""),
            }
        }

        fn replace(&mut self, text: String) {
            *self = Self::Text(text);
        }
    }

    impl Container for IndexMap<String, Value> {
        fn entries(&mut self) -> Vec<Entry<'_>> {
            self.iter_mut()
                .map(|(name, value)| {
                    let node = match value {
                        Value::Map(map) => Node::Container(map),
                        Value::Null => Node::Skip,
                        leaf => Node::Leaf(leaf),
                    };
                    Entry::new(name.as_str(), node)
                })
                .collect()
        }
    }

    fn map<const N: usize>(entries: [(&str, Value); N]) -> IndexMap<String, Value> {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    fn sample() -> IndexMap<String, Value> {
        map([
            (
                "database",
                Value::Map(map([
                    ("password", text("hunter2")),
                    ("host", text("db1")),
                    ("port", Value::Number(5432)),
                ])),
            ),
            ("name", text("app")),
            ("token", Value::Null),
        ])
    }

    fn enc() -> Placeholder {
        Placeholder::new("ENC(", ")")
    }

    #[test]
    fn test_walk_redacts_nested_target() {
        let mut tree = sample();
        let targets = TargetKeys::new(["database.password"]);
        let placeholder = enc();

        let report = walk(&mut tree, &targets, |v| placeholder.apply(v));

        assert!(report.is_mutated());
        assert_eq!(report.redacted_keys(), ["database.password"]);
        let Value::Map(db) = &tree["database"] else {
            panic!("expected map");
        };
        assert_eq!(db["password"], text("ENC(OBFUSCATED)"));
        assert_eq!(db["host"], text("db1"));
    }

    #[test]
    fn test_walk_no_targets_present() {
        let mut tree = sample();
        let before = tree.clone();
        let targets = TargetKeys::new(["missing.key"]);

        let report = walk(&mut tree, &targets, |v| enc().apply(v));

        assert!(!report.is_mutated());
        assert_eq!(tree, before);
    }

    #[test]
    fn test_walk_container_key_is_not_a_leaf() {
        let mut tree = sample();
        let before = tree.clone();
        let targets = TargetKeys::new(["database"]);

        let report = walk(&mut tree, &targets, |v| enc().apply(v));

        assert!(!report.is_mutated());
        assert_eq!(tree, before);
    }

    #[test]
    fn test_walk_skips_null() {
        let mut tree = sample();
        let targets = TargetKeys::new(["token"]);

        let report = walk(&mut tree, &targets, |v| enc().apply(v));

        assert!(!report.is_mutated());
        assert_eq!(tree["token"], Value::Null);
    }

    #[test]
    fn test_walk_widens_numbers_to_text() {
        let mut tree = sample();
        let targets = TargetKeys::new(["database.port"]);

        walk(&mut tree, &targets, |v| enc().apply(v));

        let Value::Map(db) = &tree["database"] else {
            panic!("expected map");
        };
        assert_eq!(db["port"], text("ENC(OBFUSCATED)"));
    }

    #[test]
    fn test_walk_passes_current_value() {
        let mut tree = sample();
        let targets = TargetKeys::new(["database.port", "name"]);

        walk(&mut tree, &targets, |v| format!("<{v}>"));

        let Value::Map(db) = &tree["database"] else {
            panic!("expected map");
        };
        assert_eq!(db["port"], text("<5432>"));
        assert_eq!(tree["name"], text("<app>"));
    }

    #[test]
    fn test_walk_blank_target_becomes_empty() {
        let mut tree = map([("secret", text("   "))]);
        let targets = TargetKeys::new(["secret"]);

        let report = walk(&mut tree, &targets, |v| enc().apply(v));

        assert!(report.is_mutated());
        assert_eq!(tree["secret"], text(""));
    }

    #[test]
    fn test_walk_reports_document_order() {
        let mut tree = sample();
        let targets = TargetKeys::new(["name", "database.host", "database.password"]);

        let report = walk(&mut tree, &targets, |v| enc().apply(v));

        assert_eq!(
            report.into_keys(),
            vec!["database.password", "database.host", "name"]
        );
    }

    #[test]
    fn test_walk_is_idempotent() {
        let targets = TargetKeys::new(["database.password", "name"]);
        let mut once = sample();
        walk(&mut once, &targets, |v| enc().apply(v));

        let mut twice = once.clone();
        walk(&mut twice, &targets, |v| enc().apply(v));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_walk_empty_targets() {
        let mut tree = sample();
        let report = walk(&mut tree, &TargetKeys::default(), |v| enc().apply(v));
        assert!(!report.is_mutated());
    }
}
