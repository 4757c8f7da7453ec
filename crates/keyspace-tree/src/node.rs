//! Document tree model
//!
//! An owned, immutable-by-convention tree of tagged nodes. Whatever loads a
//! document builds it once; the resolver and the tree-backed store only ever
//! borrow it and walk it forward (children in document order).
//!
//! # Examples
//!
//! ```
//! use keyspace_tree::{Element, Node};
//!
//! let root = Element::new("config")
//!     .with_attribute("version", "2")
//!     .with_child(Element::new("host").with_text("localhost"))
//!     .with_comment("ignored by lookups");
//!
//! assert_eq!(root.name(), "config");
//! assert_eq!(root.attribute("version").map(|a| a.value()), Some("2"));
//! assert_eq!(root.text(), "localhost");
//! assert_eq!(root.children().iter().filter(|n| n.is_element()).count(), 1);
//! assert!(matches!(root.children()[1], Node::Comment(_)));
//! ```

/// A single node in a document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A named element with attributes and ordered children
    Element(Element),
    /// Character data
    Text(String),
    /// A comment; contributes nothing to text and is never addressable
    Comment(String),
}

impl Node {
    /// The element name, or `None` for text and comments.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Element(element) => Some(element.name()),
            Node::Text(_) | Node::Comment(_) => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Text content of this node.
    ///
    /// Elements yield the concatenation of all descendant text in document
    /// order, text nodes yield their content and comments yield nothing.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Node::Text(content) => out.push_str(content),
            Node::Comment(_) => {}
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// A name/value pair attached to an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Same text contract as [`Node::text`]: an attribute's text is its literal value.
    pub fn text(&self) -> String {
        self.value.clone()
    }
}

/// An element node: name, unique attributes and children in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any existing value under the same name.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.children.push(Node::Comment(comment.into()));
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
    }

    pub fn push_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// All children in document order, including text and comments.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Element children only, in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// First element child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|e| e.name == name)
    }

    /// Concatenation of all descendant text in document order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}
