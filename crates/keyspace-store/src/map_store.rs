//! In-memory key/value store

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::{IndexMap, IndexSet};

use crate::{ConfigurationStore, Result};

/// A mutable, thread-safe [`ConfigurationStore`] holding flat dotted keys.
///
/// Keys keep their insertion order, so [`enumerate`](ConfigurationStore::enumerate)
/// lists children in the order they were first written. Only keys that were
/// set hold values; intermediate segments (`config` in `config.value1`) are
/// enumerable but not present.
///
/// # Examples
///
/// ```
/// use keyspace_store::{ConfigurationStore, MapStore};
///
/// let store = MapStore::new();
/// store.set_raw("config.value1", "v1").unwrap();
/// store.set_raw("config.sub.value1", "v3").unwrap();
///
/// assert_eq!(store.keys().unwrap(), vec!["config"]);
/// assert_eq!(store.enumerate("config").unwrap(), vec!["value1", "sub"]);
/// assert!(!store.has("config").unwrap());
/// ```
#[derive(Debug, Default)]
pub struct MapStore {
    values: RwLock<IndexMap<String, String>>,
}

impl MapStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Remove the value at `key`, returning it if one was stored.
    ///
    /// Remaining keys keep their relative order.
    pub fn remove_raw(&self, key: &str) -> Option<String> {
        self.write().shift_remove(key)
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, String>> {
        self.values.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, String>> {
        self.values.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: RwLock::new(values),
        }
    }
}

impl ConfigurationStore for MapStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read().get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        self.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn enumerate(&self, key: &str) -> Result<Vec<String>> {
        let prefix = if key.is_empty() {
            String::new()
        } else {
            format!("{key}.")
        };

        let values = self.read();
        let children: IndexSet<&str> = values
            .keys()
            .filter_map(|k| k.strip_prefix(prefix.as_str()))
            .filter_map(|rest| rest.split('.').next())
            .filter(|segment| !segment.is_empty())
            .collect();
        Ok(children.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_then_get() {
        let store = MapStore::new();
        store.set_raw("a.b", "1").unwrap();
        assert_eq!(store.get_raw("a.b").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get_raw("a").unwrap(), None);
        assert!(store.has("a.b").unwrap());
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let store: MapStore = [("x", "1"), ("y", "2")].into_iter().collect();
        store.set_raw("x", "3").unwrap();
        assert_eq!(store.keys().unwrap(), vec!["x", "y"]);
        assert_eq!(store.get_string("x").unwrap(), "3");
    }

    #[test]
    fn test_enumerate_distinct_children_in_insertion_order() {
        let store: MapStore = [
            ("config.value1", "v1"),
            ("config.value2", "v2"),
            ("config.sub.value1", "v3"),
            ("config.sub.value2", "v4"),
            ("other", "o"),
        ]
        .into_iter()
        .collect();

        assert_eq!(store.keys().unwrap(), vec!["config", "other"]);
        assert_eq!(store.enumerate("config").unwrap(), vec!["value1", "value2", "sub"]);
        assert_eq!(store.enumerate("config.sub").unwrap(), vec!["value1", "value2"]);
        assert!(store.enumerate("config.value1").unwrap().is_empty());
        assert!(store.enumerate("conf").unwrap().is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let store: MapStore = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        assert_eq!(store.remove_raw("b").as_deref(), Some("2"));
        assert_eq!(store.remove_raw("b"), None);
        assert_eq!(store.keys().unwrap(), vec!["a", "c"]);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
