//! Read-only store over a document tree

use keyspace_tree::{Element, PathResolver};

use crate::{ConfigurationStore, Error, Result};

/// A read-only [`ConfigurationStore`] backed by a borrowed document tree.
///
/// Keys use the full key-path grammar (`a.b[1][@attr]`). Element values are
/// their concatenated descendant text; attribute values are literal.
///
/// # Examples
///
/// ```
/// use keyspace_store::{ConfigurationStore, TreeStore};
/// use keyspace_tree::Element;
///
/// let root = Element::new("config")
///     .with_child(Element::new("host").with_text("localhost"));
/// let store = TreeStore::new(&root);
///
/// assert_eq!(store.get_raw("host").unwrap().as_deref(), Some("localhost"));
/// assert!(store.set_raw("host", "example.com").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TreeStore<'a> {
    resolver: PathResolver<'a>,
}

impl<'a> TreeStore<'a> {
    pub fn new(root: &'a Element) -> Self {
        Self {
            resolver: PathResolver::new(root),
        }
    }

    pub fn root(&self) -> &'a Element {
        self.resolver.root()
    }
}

impl ConfigurationStore for TreeStore<'_> {
    fn has(&self, key: &str) -> Result<bool> {
        Ok(self.resolver.has(key)?)
    }

    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.resolver.get(key)?)
    }

    fn set_raw(&self, key: &str, _value: &str) -> Result<()> {
        tracing::debug!(key, "rejected write to read-only tree store");
        Err(Error::read_only(key, "tree-backed stores are read-only"))
    }

    fn enumerate(&self, key: &str) -> Result<Vec<String>> {
        Ok(self.resolver.enumerate(key)?)
    }
}
