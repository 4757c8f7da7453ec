//! The configuration store contract
//!
//! Every store exposes the same flat, dotted key space. Absence is an
//! ordinary outcome (`false` / `None`); errors are reserved for writes a
//! store cannot accept and for keys that do not parse.

use std::sync::Arc;

use crate::{Error, Result};

/// Uniform access to a hierarchical key/value configuration.
///
/// Implemented by [`crate::TreeStore`] (read-only, document-backed),
/// [`crate::MapStore`] (in-memory) and [`crate::NamespaceMapper`] (a renamed
/// view over another store). Stores synchronize internally, so every
/// method takes `&self`.
pub trait ConfigurationStore: Send + Sync {
    /// Whether `key` holds a value.
    fn has(&self, key: &str) -> Result<bool> {
        Ok(self.get_raw(key)?.is_some())
    }

    /// The raw string value at `key`, or `None` if there is none.
    fn get_raw(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` at `key`.
    ///
    /// Read-only stores and non-writable regions of a key space return
    /// [`Error::Unsupported`].
    fn set_raw(&self, key: &str, value: &str) -> Result<()>;

    /// Names of the direct children of `key`, in store order.
    ///
    /// `enumerate("")` lists the top-level keys.
    fn enumerate(&self, key: &str) -> Result<Vec<String>>;

    /// Like [`get_raw`](Self::get_raw), but absence is an [`Error::NotFound`].
    fn get_string(&self, key: &str) -> Result<String> {
        self.get_raw(key)?.ok_or_else(|| Error::not_found(key))
    }

    /// The value at `key`, or `default` when absent.
    fn get_string_or(&self, key: &str, default: &str) -> Result<String> {
        Ok(self.get_raw(key)?.unwrap_or_else(|| default.to_string()))
    }

    /// Top-level keys.
    fn keys(&self) -> Result<Vec<String>> {
        self.enumerate("")
    }
}

macro_rules! forward_store {
    ($($ty:ty),*) => {$(
        impl<T: ConfigurationStore + ?Sized> ConfigurationStore for $ty {
            fn has(&self, key: &str) -> Result<bool> {
                (**self).has(key)
            }

            fn get_raw(&self, key: &str) -> Result<Option<String>> {
                (**self).get_raw(key)
            }

            fn set_raw(&self, key: &str, value: &str) -> Result<()> {
                (**self).set_raw(key, value)
            }

            fn enumerate(&self, key: &str) -> Result<Vec<String>> {
                (**self).enumerate(key)
            }
        }
    )*};
}

forward_store!(&T, Box<T>, Arc<T>);
