//! Configuration stores for keyspace
//!
//! A single [`ConfigurationStore`] contract with three implementations:
//!
//! - [`TreeStore`]: read-only, resolves key paths against a document tree
//! - [`MapStore`]: in-memory and writable, flat dotted keys
//! - [`NamespaceMapper`]: a view of another store under a different prefix

pub mod config;
pub mod error;
pub mod map_store;
pub mod mapper;
pub mod store;
pub mod tree_store;

pub use config::{NamespaceConfig, NamespaceTable};
pub use error::{Error, Result};
pub use map_store::MapStore;
pub use mapper::NamespaceMapper;
pub use store::ConfigurationStore;
pub use tree_store::TreeStore;
