//! Key path resolution against a document tree
//!
//! [`PathResolver`] walks a borrowed [`Element`] tree one [`Step`] at a time,
//! forward only, and stops at the first step that does not match.

use crate::node::{Attribute, Element, Node};
use crate::path::{KeyPath, Step};
use crate::Result;

/// The target of a successful resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    Element(&'a Element),
    Attribute(&'a Attribute),
}

impl<'a> Resolved<'a> {
    /// Descendant text for elements, literal value for attributes.
    pub fn text(&self) -> String {
        match self {
            Resolved::Element(element) => element.text(),
            Resolved::Attribute(attribute) => attribute.text(),
        }
    }

    pub fn as_element(&self) -> Option<&'a Element> {
        match *self {
            Resolved::Element(element) => Some(element),
            Resolved::Attribute(_) => None,
        }
    }
}

/// Where the walk currently stands.
///
/// Index steps count forward through the current element's following
/// siblings, so the cursor remembers which sibling list it sits in.
#[derive(Debug, Clone, Copy)]
enum Cursor<'a> {
    Root(&'a Element),
    Child { siblings: &'a [Node], pos: usize },
}

impl<'a> Cursor<'a> {
    fn element(&self) -> Option<&'a Element> {
        match *self {
            Cursor::Root(root) => Some(root),
            Cursor::Child { siblings, pos } => siblings.get(pos).and_then(Node::as_element),
        }
    }

    fn child(element: &'a Element, name: &str) -> Option<Self> {
        let siblings = element.children();
        siblings
            .iter()
            .position(|node| node.name() == Some(name))
            .map(|pos| Cursor::Child { siblings, pos })
    }

    /// The `n`-th same-named sibling, where `n == 0` is the current element.
    fn sibling(self, n: usize) -> Option<Self> {
        if n == 0 {
            return Some(self);
        }
        match self {
            // The root has no siblings to count
            Cursor::Root(_) => None,
            Cursor::Child { siblings, pos } => {
                let name = siblings[pos].name()?;
                siblings
                    .iter()
                    .enumerate()
                    .skip(pos + 1)
                    .filter(|(_, node)| node.name() == Some(name))
                    .nth(n - 1)
                    .map(|(pos, _)| Cursor::Child { siblings, pos })
            }
        }
    }
}

/// Resolves key paths against a borrowed document tree.
///
/// # Examples
///
/// ```
/// use keyspace_tree::{Element, PathResolver};
///
/// let root = Element::new("config")
///     .with_child(Element::new("server").with_attribute("port", "80"))
///     .with_child(Element::new("server").with_attribute("port", "443"));
///
/// let resolver = PathResolver::new(&root);
/// assert_eq!(resolver.get("server[1][@port]").unwrap().as_deref(), Some("443"));
/// assert_eq!(resolver.enumerate("").unwrap(), vec!["server", "server[1]"]);
/// assert_eq!(resolver.get("server[2]").unwrap(), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    root: &'a Element,
}

impl<'a> PathResolver<'a> {
    pub fn new(root: &'a Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &'a Element {
        self.root
    }

    /// Parse `path` and resolve it.
    ///
    /// Returns `Ok(None)` when any step fails to match; the empty path
    /// resolves to the root itself.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedPath`] if the path does not parse.
    pub fn resolve(&self, path: &str) -> Result<Option<Resolved<'a>>> {
        let key_path = KeyPath::parse(path)?;
        Ok(self.resolve_path(&key_path))
    }

    /// Resolve an already parsed path.
    pub fn resolve_path(&self, path: &KeyPath) -> Option<Resolved<'a>> {
        let mut cursor = Cursor::Root(self.root);

        for step in path.steps() {
            let current = cursor.element()?;
            let next = match step {
                Step::Segment(name) => Cursor::child(current, name),
                Step::Index(n) => cursor.sibling(*n),
                Step::Attribute(name) => {
                    let found = current.attribute(name).map(Resolved::Attribute);
                    if found.is_none() {
                        tracing::trace!(%path, attribute = %name, "attribute not found");
                    }
                    return found;
                }
            };
            match next {
                Some(next) => cursor = next,
                None => {
                    tracing::trace!(%path, ?step, "key path step did not match");
                    return None;
                }
            }
        }

        cursor.element().map(Resolved::Element)
    }

    /// The value at `path`: descendant text for an element, the literal
    /// value for an attribute, `None` if nothing matches.
    pub fn get(&self, path: &str) -> Result<Option<String>> {
        Ok(self.resolve(path)?.map(|resolved| resolved.text()))
    }

    /// Whether `path` resolves to anything.
    pub fn has(&self, path: &str) -> Result<bool> {
        Ok(self.resolve(path)?.is_some())
    }

    /// Key names of the element children under `path`, in document order.
    ///
    /// The first child with a given name is listed bare; later ones carry
    /// a 1-based count of earlier same-named siblings (`a`, `a[1]`, `a[2]`),
    /// which is exactly the index step that addresses them. Unresolved paths
    /// and attributes have no children.
    pub fn enumerate(&self, path: &str) -> Result<Vec<String>> {
        let Some(element) = self.resolve(path)?.and_then(|r| r.as_element()) else {
            return Ok(Vec::new());
        };
        Ok(child_keys(element))
    }
}

/// Index-disambiguated key names for the element children of `element`.
pub fn child_keys(element: &Element) -> Vec<String> {
    let mut seen: Vec<(&str, usize)> = Vec::new();
    element
        .elements()
        .map(|child| {
            let name = child.name();
            match seen.iter_mut().find(|(n, _)| *n == name) {
                Some((_, count)) => {
                    let key = format!("{name}[{count}]");
                    *count += 1;
                    key
                }
                None => {
                    seen.push((name, 1));
                    name.to_string()
                }
            }
        })
        .collect()
}
