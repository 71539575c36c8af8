//! Target key sets and the replacement placeholder.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Marker placed between the prefix and suffix of every replacement.
pub const MARKER: &str = "OBFUSCATED";

/// The set of dotted key paths to redact.
///
/// Membership is exact, case-sensitive string equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetKeys {
    keys: HashSet<String>,
}

impl TargetKeys {
    /// Build a key set from dotted paths.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a reconstructed path is a target.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.keys.contains(path)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no keys are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TargetKeys {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Replacement text written in place of a redacted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    /// Text before the marker, e.g. `ENC(`.
    pub prefix: String,
    /// Text after the marker, e.g. `)`.
    pub suffix: String,
}

impl Default for Placeholder {
    fn default() -> Self {
        Self::new("-", "-")
    }
}

impl Placeholder {
    /// Create a placeholder from a prefix and suffix.
    #[must_use]
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// The full placeholder text.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{}{MARKER}{}", self.prefix, self.suffix)
    }

    /// Replacement for `original`.
    ///
    /// Blank values carry no secret and become the empty string.
    #[must_use]
    pub fn apply(&self, original: &str) -> String {
        if original.trim().is_empty() {
            String::new()
        } else {
            self.text()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_default() {
        let placeholder = Placeholder::default();
        assert_eq!(placeholder.text(), "-OBFUSCATED-");
    }

    #[test]
    fn test_placeholder_prefix_suffix() {
        let placeholder = Placeholder::new("ENC(", ")");
        assert_eq!(placeholder.apply("hunter2"), "ENC(OBFUSCATED)");
    }

    #[test]
    fn test_placeholder_ignores_original_value() {
        let placeholder = Placeholder::new("ENC(", ")");
        assert_eq!(placeholder.apply("a"), placeholder.apply("a much longer secret"));
    }

    #[test]
    fn test_placeholder_blank_values() {
        let placeholder = Placeholder::new("ENC(", ")");
        assert_eq!(placeholder.apply(""), "");
        assert_eq!(placeholder.apply("   "), "");
        assert_eq!(placeholder.apply("\t\n"), "");
    }

    #[test]
    fn test_placeholder_reapplied_is_stable() {
        let placeholder = Placeholder::new("ENC(", ")");
        let once = placeholder.apply("secret");
        assert_eq!(placeholder.apply(&once), once);
    }

    #[test]
    fn test_target_keys_exact_match() {
        let keys = TargetKeys::new(["database.password"]);
        assert!(keys.contains("database.password"));
        assert!(!keys.contains("Database.Password"));
        assert!(!keys.contains("database"));
        assert!(!keys.contains("database.password.old"));
    }

    #[test]
    fn test_target_keys_dedup() {
        let keys: TargetKeys = ["a.b", "a.b", "c"].into_iter().collect();
        assert_eq!(keys.len(), 2);
        assert!(!keys.is_empty());
        assert!(TargetKeys::default().is_empty());
    }
}
