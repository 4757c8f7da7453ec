//! Declarative namespace mounts
//!
//! Mappers can be described in TOML instead of code:
//!
//! ```toml
//! [[mount]]
//! from_prefix = "config"
//! to_prefix = "root.conf"
//! ```
//!
//! Reading the text is up to the caller; this module only parses it.

use serde::{Deserialize, Serialize};

use crate::{ConfigurationStore, Error, NamespaceMapper, Result};

/// The two prefixes of a single [`NamespaceMapper`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceConfig {
    /// Prefix of the keys in the underlying store
    pub from_prefix: String,

    /// Prefix those keys appear under in the mapped view
    pub to_prefix: String,
}

impl NamespaceConfig {
    pub fn new(from_prefix: impl Into<String>, to_prefix: impl Into<String>) -> Self {
        Self {
            from_prefix: from_prefix.into(),
            to_prefix: to_prefix.into(),
        }
    }

    /// Parse a single mount from TOML.
    ///
    /// Missing fields default to the empty prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyspace_store::NamespaceConfig;
    ///
    /// let config = NamespaceConfig::from_toml_str(r#"from_prefix = "config""#).unwrap();
    /// assert_eq!(config, NamespaceConfig::new("config", ""));
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        parse_toml(content)
    }

    /// Build a mapper over `store` with these prefixes.
    pub fn mount<S: ConfigurationStore>(&self, store: S) -> NamespaceMapper<S> {
        NamespaceMapper::new(&self.from_prefix, &self.to_prefix, store)
    }
}

impl<S: ConfigurationStore> From<&NamespaceMapper<S>> for NamespaceConfig {
    fn from(mapper: &NamespaceMapper<S>) -> Self {
        Self::new(mapper.from_prefix(), mapper.to_prefix())
    }
}

/// A list of mounts, as written with `[[mount]]` tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceTable {
    #[serde(rename = "mount")]
    pub mounts: Vec<NamespaceConfig>,
}

impl NamespaceTable {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        parse_toml(content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::ConfigParse {
            format: "TOML".into(),
            message: e.to_string(),
        })
    }
}

fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T> {
    toml::from_str(content).map_err(|e| Error::ConfigParse {
        format: "TOML".into(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_table() {
        let table = NamespaceTable::from_toml_str(
            r#"
[[mount]]
from_prefix = "config"
to_prefix = "root.conf"

[[mount]]
to_prefix = "all"
"#,
        )
        .unwrap();

        assert_eq!(
            table.mounts,
            vec![
                NamespaceConfig::new("config", "root.conf"),
                NamespaceConfig::new("", "all"),
            ]
        );
    }

    #[test]
    fn test_empty_table() {
        assert!(NamespaceTable::from_toml_str("").unwrap().mounts.is_empty());
    }

    #[test]
    fn test_invalid_toml_is_config_parse_error() {
        let err = NamespaceConfig::from_toml_str("from_prefix = ").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));

        let err = NamespaceConfig::from_toml_str("from_prefix = 3").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_mount_builds_mapper() {
        let store: MapStore = [("config.value1", "v1")].into_iter().collect();
        let config = NamespaceConfig::new("config", "app");
        let mapper = config.mount(&store);
        assert_eq!(mapper.get_string("app.value1").unwrap(), "v1");
        assert_eq!(NamespaceConfig::from(&mapper), config);
    }

    #[test]
    fn test_table_round_trips_through_toml() {
        let table = NamespaceTable {
            mounts: vec![NamespaceConfig::new("a.b", "c")],
        };
        let text = table.to_toml_string().unwrap();
        assert_eq!(NamespaceTable::from_toml_str(&text).unwrap(), table);
    }
}
