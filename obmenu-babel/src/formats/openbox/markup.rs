//! Markup tree
//!
//! Pipeline: source text → xmltree → [`Element`] tree
//!
//! xmltree (on top of xml-rs) rejects anything that is not well-formed XML: a document
//! cut short, unquoted attribute values, undeclared entities. Its tree is converted into
//! a small owned tree holding only what the interpreter looks at: element local names,
//! attributes, text and comments. Processing instructions are dropped. Keeping the
//! interpreter on this tree means it can be driven from trees built by hand.
//!
//! Menus are line-oriented once converted, so newlines are removed from text and
//! attribute values as the tree is built. A command spread over several lines becomes
//! those lines joined together.

use crate::error::FormatError;
use tracing::warn;
use xmltree::XMLNode;

/// A node of the markup tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    Element(Element),
    Text(String),
    Comment,
}

/// An element with its attributes and children, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Markup>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Markup::Element(child));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Markup::Text(text.into()));
        self
    }

    /// Value of the attribute called `name` (case-sensitive)
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Parse an XML document and return its root element
pub fn parse_markup(source: &str) -> Result<Element, FormatError> {
    let root = xmltree::Element::parse(source.as_bytes()).map_err(|e| {
        warn!("xml: {}", e);
        FormatError::ParseError(e.to_string())
    })?;
    Ok(convert_element(root))
}

fn single_line(text: String) -> String {
    if text.contains('\n') {
        text.replace('\n', "")
    } else {
        text
    }
}

fn convert_element(element: xmltree::Element) -> Element {
    let mut attributes: Vec<_> = element
        .attributes
        .into_iter()
        .map(|(name, value)| (name, single_line(value)))
        .collect();
    attributes.sort();

    Element {
        name: element.name,
        attributes,
        children: element.children.into_iter().filter_map(convert_node).collect(),
    }
}

fn convert_node(node: XMLNode) -> Option<Markup> {
    match node {
        XMLNode::Element(element) => Some(Markup::Element(convert_element(element))),
        XMLNode::Text(text) | XMLNode::CData(text) => Some(Markup::Text(single_line(text))),
        XMLNode::Comment(_) => Some(Markup::Comment),
        XMLNode::ProcessingInstruction(..) => None,
    }
}
