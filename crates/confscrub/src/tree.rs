//! Format-agnostic document tree.
//!
//! Every supported format is seen by the redactor through two traits:
//! [`Container`] for nodes with named children and [`Leaf`] for scalar values
//! that can be replaced in place. Format adapters implement these traits on
//! their native tree types, so the walk mutates the parsed document directly
//! and the adapter serializes the very same value afterwards.

use std::borrow::Cow;

/// A node as seen by the walk.
#[derive(Debug)]
pub enum Node<'a> {
    /// A node with named children.
    Container(&'a mut dyn Container),
    /// A scalar value.
    Leaf(&'a mut dyn Leaf),
    /// Neither: nulls, sequences and anything else the walk must not touch.
    Skip,
}

/// A named child of a [`Container`].
#[derive(Debug)]
pub struct Entry<'a> {
    /// Field name, without any parent path.
    pub name: Cow<'a, str>,
    /// The child node.
    pub node: Node<'a>,
}

impl<'a> Entry<'a> {
    /// Create a new entry.
    #[must_use]
    pub fn new(name: impl Into<Cow<'a, str>>, node: Node<'a>) -> Self {
        Self {
            name: name.into(),
            node,
        }
    }
}

/// A node with named children.
pub trait Container {
    /// Children in document order.
    ///
    /// Implementations must only return mutable borrows of disjoint children.
    fn entries(&mut self) -> Vec<Entry<'_>>;
}

/// A scalar value that can be replaced in place.
pub trait Leaf {
    /// The value rendered as text. Numbers and booleans use their literal form.
    fn text(&self) -> Cow<'_, str>;

    /// Replace the value with text.
    fn replace(&mut self, text: String);
}

impl std::fmt::Debug for dyn Container + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Container")
    }
}

impl std::fmt::Debug for dyn Leaf + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Leaf({:?})", self.text())
    }
}

/// Join a parent path and a field name into a dotted path.
#[must_use]
pub fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        let mut path = String::with_capacity(parent.len() + 1 + name.len());
        path.push_str(parent);
        path.push('.');
        path.push_str(name);
        path
    }
}

impl Leaf for String {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }

    fn replace(&mut self, text: String) {
        *self = text;
    }
}
