//! Key path parsing
//!
//! A key path addresses a location in a document tree with a flat, dotted
//! syntax.
//!
//! # Path Syntax
//!
//! - Dot-separated names: `config.database.host`
//! - Same-name sibling index: `server[1].host` (0-based, `server[0]` is `server`)
//! - Attribute reference: `server[@port]` (terminal; anything after it is ignored)
//!
//! Runs of dots are folded, so `a..b` and `a.b.` both mean `a.b`.
//!
//! # Examples
//!
//! ```
//! use keyspace_tree::path::{KeyPath, Step};
//!
//! let path = KeyPath::parse("config.server[1][@port]").unwrap();
//! assert_eq!(path.steps(), &[
//!     Step::Segment("config".to_string()),
//!     Step::Segment("server".to_string()),
//!     Step::Index(1),
//!     Step::Attribute("port".to_string()),
//! ]);
//! ```

use std::fmt;

use crate::{Error, Result};

const SEPARATOR: char = '.';
const OPEN: char = '[';
const CLOSE: char = ']';
const ATTRIBUTE: char = '@';

/// One step of a parsed key path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// First child element with this name (e.g., "host" in "config.host")
    Segment(String),
    /// The n-th same-named sibling, counted from the current element (e.g., 1 in `server[1]`)
    Index(usize),
    /// An attribute of the current element (e.g., "port" in `server[@port]`)
    Attribute(String),
}

/// A parsed key path: an ordered sequence of [`Step`]s.
///
/// An attribute step, when present, is always the last step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPath {
    steps: Vec<Step>,
}

impl KeyPath {
    /// Parse a key path string into steps.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPath`] when an index step is empty,
    /// non-numeric, or missing its closing bracket.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyspace_tree::path::{KeyPath, Step};
    ///
    /// let path = KeyPath::parse("items[2].name").unwrap();
    /// assert_eq!(path.steps(), &[
    ///     Step::Segment("items".to_string()),
    ///     Step::Index(2),
    ///     Step::Segment("name".to_string()),
    /// ]);
    ///
    /// assert!(KeyPath::parse("items[x]").is_err());
    /// assert!(KeyPath::parse("").unwrap().is_empty());
    /// ```
    pub fn parse(path: &str) -> Result<Self> {
        let mut steps = Vec::new();
        let mut chars = path.char_indices().peekable();

        loop {
            while chars.next_if(|&(_, ch)| ch == SEPARATOR).is_some() {}

            let Some(&(start, ch)) = chars.peek() else {
                break;
            };

            if ch == OPEN {
                chars.next();
                if chars.next_if(|&(_, ch)| ch == ATTRIBUTE).is_some() {
                    // Unterminated attribute references run to the end of the path
                    let name: String = chars
                        .by_ref()
                        .map(|(_, ch)| ch)
                        .take_while(|&ch| ch != CLOSE)
                        .collect();
                    steps.push(Step::Attribute(name));
                    break;
                }

                let mut index = String::new();
                let mut closed = false;
                for (_, ch) in chars.by_ref() {
                    if ch == CLOSE {
                        closed = true;
                        break;
                    }
                    index.push(ch);
                }
                if !closed {
                    return Err(Error::malformed(path, start, "unterminated index step"));
                }
                let malformed = || {
                    Error::malformed(
                        path,
                        start,
                        format!("index {index:?} is not a non-negative integer"),
                    )
                };
                // Digits only: `parse` alone would also accept a leading `+`
                if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(malformed());
                }
                let n = index.parse::<usize>().map_err(|_| malformed())?;
                steps.push(Step::Index(n));
            } else {
                let mut name = String::new();
                while let Some((_, ch)) = chars.next_if(|&(_, ch)| ch != SEPARATOR && ch != OPEN) {
                    name.push(ch);
                }
                steps.push(Step::Segment(name));
            }
        }

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                Step::Segment(name) if i == 0 => write!(f, "{name}")?,
                Step::Segment(name) => write!(f, "{SEPARATOR}{name}")?,
                Step::Index(n) => write!(f, "{OPEN}{n}{CLOSE}")?,
                Step::Attribute(name) => write!(f, "{OPEN}{ATTRIBUTE}{name}{CLOSE}")?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for KeyPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
