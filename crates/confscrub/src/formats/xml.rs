//! XML element trees.
//!
//! Paths start below the document element: `<config><db><password/></db></config>`
//! holds `db.password`. An element is a leaf when it has no child elements;
//! text, comments and processing instructions do not count as children.
//!
//! Documents are read straight from `xml-rs` events so whitespace-only text
//! survives a rewrite: `<pad>   </pad>` keeps its three spaces and the
//! indentation between elements is written back as it was read.

use std::borrow::Cow;
use std::io::Read;

use xml::attribute::OwnedAttribute;
use xml::name::OwnedName;
use xml::namespace::Namespace;
use xml::reader::{EventReader, ParserConfig, XmlEvent};
use xmltree::{Element, ParseError, XMLNode};

use super::Format;
use crate::error::FormatError;
use crate::tree::{Container, Entry, Leaf, Node};

impl Container for Element {
    fn entries(&mut self) -> Vec<Entry<'_>> {
        self.children
            .iter_mut()
            .filter_map(|child| match child {
                XMLNode::Element(element) => {
                    let name = qualified_name(element);
                    let node = if has_child_elements(element) {
                        Node::Container(element)
                    } else {
                        Node::Leaf(element)
                    };
                    Some(Entry::new(name, node))
                }
                _ => None,
            })
            .collect()
    }
}

impl Leaf for Element {
    fn text(&self) -> Cow<'_, str> {
        self.get_text().unwrap_or(Cow::Borrowed(""))
    }

    fn replace(&mut self, text: String) {
        self.children.clear();
        if !text.is_empty() {
            self.children.push(XMLNode::Text(text));
        }
    }
}

fn qualified_name(element: &Element) -> String {
    match &element.prefix {
        Some(prefix) => format!("{prefix}:{}", element.name),
        None => element.name.clone(),
    }
}

fn read_document<R: Read>(source: R) -> Result<Element, ParseError> {
    let config = ParserConfig::new().ignore_comments(false);
    let mut reader = EventReader::new_with_config(source, config);
    let mut root = None;
    loop {
        match reader.next().map_err(ParseError::MalformedXml)? {
            XmlEvent::StartElement {
                name,
                attributes,
                namespace,
            } => {
                let element = new_element(name, attributes, namespace);
                root = Some(read_children(&mut reader, element)?);
            }
            XmlEvent::EndDocument => return root.ok_or(ParseError::CannotParse),
            _ => {}
        }
    }
}

fn read_children<R: Read>(
    reader: &mut EventReader<R>,
    mut element: Element,
) -> Result<Element, ParseError> {
    loop {
        match reader.next().map_err(ParseError::MalformedXml)? {
            XmlEvent::StartElement {
                name,
                attributes,
                namespace,
            } => {
                let child = read_children(reader, new_element(name, attributes, namespace))?;
                element.children.push(XMLNode::Element(child));
            }
            XmlEvent::EndElement { .. } => return Ok(element),
            XmlEvent::Characters(text) | XmlEvent::Whitespace(text) | XmlEvent::CData(text) => {
                element.children.push(XMLNode::Text(text));
            }
            XmlEvent::Comment(text) => element.children.push(XMLNode::Comment(text)),
            XmlEvent::ProcessingInstruction { name, data } => {
                element
                    .children
                    .push(XMLNode::ProcessingInstruction(name, data));
            }
            XmlEvent::StartDocument { .. } | XmlEvent::EndDocument => {
                return Err(ParseError::CannotParse);
            }
        }
    }
}

fn new_element(name: OwnedName, attributes: Vec<OwnedAttribute>, namespace: Namespace) -> Element {
    Element {
        prefix: name.prefix,
        namespace: name.namespace,
        namespaces: if namespace.is_essentially_empty() {
            None
        } else {
            Some(namespace)
        },
        name: name.local_name,
        attributes: attributes
            .into_iter()
            .map(|attr| (attr.name.local_name, attr.value))
            .collect(),
        children: Vec::new(),
    }
}

fn has_child_elements(element: &Element) -> bool {
    element
        .children
        .iter()
        .any(|child| matches!(child, XMLNode::Element(_)))
}

/// Adapter for `.xml` files. Output carries an XML declaration and is not
/// re-indented.
#[derive(Debug, Clone, Copy)]
pub struct Xml;

impl Format for Xml {
    type Document = Element;

    const NAME: &'static str = "xml";

    fn parse(bytes: &[u8]) -> Result<Self::Document, FormatError> {
        Ok(read_document(bytes)?)
    }

    fn serialize(doc: &Self::Document) -> Result<Vec<u8>, FormatError> {
        let mut out = Vec::new();
        doc.write(&mut out)?;
        Ok(out)
    }
}
