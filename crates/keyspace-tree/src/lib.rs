//! Document tree model and key-path resolution for keyspace
//!
//! Addresses values inside a hierarchical document through flat, dotted
//! key paths such as `config.server[1].host` or `config.server[@port]`.

pub mod error;
pub mod node;
pub mod path;
pub mod resolver;

pub use error::{Error, Result};
pub use node::{Attribute, Element, Node};
pub use path::{KeyPath, Step};
pub use resolver::{PathResolver, Resolved, child_keys};
