//! Namespace mapping over another store
//!
//! A [`NamespaceMapper`] exposes the keys an underlying store holds below
//! `from_prefix` as if they lived below `to_prefix`. Incoming keys fall into
//! one of three zones:
//!
//! - **synthetic**: a strict prefix of `to_prefix`. These are scaffolding
//!   segments that exist only in the mapped view.
//! - **delegate**: `to_prefix` followed by a remainder `R`. The operation is
//!   forwarded to the underlying store at `from_prefix` followed by `R`.
//!   `R` is passed on exactly as written, and may start with a bracket step
//!   (`to_prefix[@id]`, `to_prefix[1].x`) to address the mapped root itself.
//! - **outside**: anything else. Nothing exists there and nothing can be
//!   written there.
//!
//! # Examples
//!
//! ```
//! use keyspace_store::{ConfigurationStore, MapStore, NamespaceMapper};
//!
//! let store: MapStore = [("config.value1", "v1")].into_iter().collect();
//! let mapper = NamespaceMapper::new("config", "root.conf", &store);
//!
//! assert_eq!(mapper.keys().unwrap(), vec!["root"]);
//! assert_eq!(mapper.enumerate("root").unwrap(), vec!["conf"]);
//! assert_eq!(mapper.get_string("root.conf.value1").unwrap(), "v1");
//!
//! mapper.set_raw("root.conf.value2", "v2").unwrap();
//! assert_eq!(store.get_string("config.value2").unwrap(), "v2");
//! ```

use crate::{ConfigurationStore, Error, Result};

const SEPARATOR: char = '.';

/// Byte ranges of a key's dotted segments, skipping empty ones.
///
/// Dots inside brackets (`a[@x.y]`) do not split.
fn segment_spans(key: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, ch) in key.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            SEPARATOR if depth == 0 => {
                spans.push((start, i));
                start = i + ch.len_utf8();
            }
            _ => {}
        }
    }
    spans.push((start, key.len()));
    spans.retain(|(start, end)| start < end);
    spans
}

/// Split a key into its dotted segments, folding empty ones.
fn split_segments(key: &str) -> Vec<&str> {
    segment_spans(key)
        .into_iter()
        .map(|(start, end)| &key[start..end])
        .collect()
}

/// Where a key lands relative to the mapped namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Zone<'m> {
    /// Scaffolding above the mapped root; `next` is the segment below it.
    Synthetic { next: &'m str },
    /// Inside the mapped namespace; carries the translated underlying key.
    Delegate(String),
    Outside,
}

/// A renamed, rebased view of another [`ConfigurationStore`].
///
/// The mapper holds no state of its own beyond the two prefixes: reads and
/// writes go straight through to the underlying store. `S` may be a
/// reference, a `Box`, an `Arc`, or another mapper.
#[derive(Debug, Clone)]
pub struct NamespaceMapper<S> {
    from_prefix: String,
    to_prefix: String,
    to: Vec<String>,
    inner: S,
}

impl<S: ConfigurationStore> NamespaceMapper<S> {
    /// Expose `inner`'s keys under `from_prefix` as keys under `to_prefix`.
    ///
    /// Either prefix may be empty. Prefixes are normalized like keys, so
    /// `"root..conf."` is the same as `"root.conf"`.
    pub fn new(from_prefix: &str, to_prefix: &str, inner: S) -> Self {
        let to: Vec<String> = split_segments(to_prefix).into_iter().map(String::from).collect();
        Self {
            from_prefix: split_segments(from_prefix).join("."),
            to_prefix: to.join("."),
            to,
            inner,
        }
    }

    pub fn from_prefix(&self) -> &str {
        &self.from_prefix
    }

    pub fn to_prefix(&self) -> &str {
        &self.to_prefix
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    /// The underlying key for a mapped key, if it lies in the delegate zone.
    pub fn translate(&self, key: &str) -> Option<String> {
        match self.zone(key) {
            Zone::Delegate(translated) => Some(translated),
            _ => None,
        }
    }

    fn zone(&self, key: &str) -> Zone<'_> {
        let spans = segment_spans(key);
        let mut shared = 0;
        // Byte offset in `key` where the part below `to_prefix` begins
        let mut rest = 0;

        for (&(start, end), to) in spans.iter().zip(&self.to) {
            let segment = &key[start..end];
            if segment == to.as_str() {
                shared += 1;
                rest = end;
                continue;
            }
            // `to[1]` or `to[@attr]` on the last prefix segment addresses the mapped root
            let is_last = shared + 1 == self.to.len();
            if is_last && segment.strip_prefix(to.as_str()).is_some_and(|r| r.starts_with('[')) {
                shared += 1;
                rest = start + to.len();
            }
            break;
        }

        let zone = if shared < self.to.len() {
            if shared == spans.len() {
                Zone::Synthetic {
                    next: &self.to[shared],
                }
            } else {
                Zone::Outside
            }
        } else {
            Zone::Delegate(self.translate_rest(key, rest))
        };
        tracing::trace!(key, ?zone, to_prefix = %self.to_prefix, "classified mapped key");
        zone
    }

    /// Join `from_prefix` with the untouched remainder of `key` after byte `rest`.
    fn translate_rest(&self, key: &str, rest: usize) -> String {
        let remainder = if self.to.is_empty() {
            key
        } else {
            let tail = &key[rest..];
            tail.strip_prefix(SEPARATOR).unwrap_or(tail)
        };

        if self.from_prefix.is_empty() {
            remainder.to_string()
        } else if remainder.is_empty() {
            self.from_prefix.clone()
        } else if remainder.starts_with('[') {
            format!("{}{remainder}", self.from_prefix)
        } else {
            format!("{}{SEPARATOR}{remainder}", self.from_prefix)
        }
    }
}

impl<S: ConfigurationStore> ConfigurationStore for NamespaceMapper<S> {
    fn has(&self, key: &str) -> Result<bool> {
        match self.zone(key) {
            Zone::Synthetic { .. } => Ok(true),
            Zone::Delegate(translated) => self.inner.has(&translated),
            Zone::Outside => Ok(false),
        }
    }

    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        match self.zone(key) {
            Zone::Delegate(translated) => self.inner.get_raw(&translated),
            Zone::Synthetic { .. } | Zone::Outside => Ok(None),
        }
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        match self.zone(key) {
            Zone::Delegate(translated) => {
                tracing::debug!(key, %translated, "writing through namespace mapper");
                self.inner.set_raw(&translated, value)
            }
            Zone::Synthetic { .. } => Err(Error::read_only(
                key,
                format!("scaffolding segment of mapped prefix {:?}", self.to_prefix),
            )),
            Zone::Outside => Err(Error::OutsideNamespace {
                key: key.to_string(),
                prefix: self.to_prefix.clone(),
            }),
        }
    }

    fn enumerate(&self, key: &str) -> Result<Vec<String>> {
        match self.zone(key) {
            Zone::Synthetic { next } => Ok(vec![next.to_string()]),
            Zone::Delegate(translated) => self.inner.enumerate(&translated),
            Zone::Outside => Ok(Vec::new()),
        }
    }
}
