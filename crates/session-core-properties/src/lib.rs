#![warn(missing_docs)]
//! `session-core-properties` - the ordered, line-oriented key/value list behind the
//! `session-core` profile format.
//!
//! The format is one `key=value` pair per line. Values wrapped in single quotes are
//! literal strings (the quotes are stripped on parse and re-added on render); bare
//! values are raw text. A key may occur any number of times, and all occurrences are
//! kept in insertion order, so repeated keys collect into an ordered sequence of
//! values rather than overwriting each other.
//!
//! Parsing is lenient by design: the files are hand-editable, so lines that do not
//! look like a pair are skipped silently instead of failing the whole document.
//! Any further decoding of a value (numbers, packed fields, colors) is the caller's
//! job.
//!
//! ```rust
//! use session_core_properties::Properties;
//!
//! let props = Properties::parse("indentLevel=4\npath='a.bas'\npath='b.bas'\n");
//! assert_eq!(props.get("indentLevel"), Some("4"));
//! let paths: Vec<&str> = props.get_all("path").collect();
//! assert_eq!(paths, ["a.bas", "b.bas"]);
//! ```

use std::fmt;

/// One `key=value` entry in a [`Properties`] list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Key text (left of `=`, surrounding whitespace trimmed).
    pub key: String,
    /// Value text, with any single-quote wrapping already removed.
    pub value: String,
    /// Whether the value is a literal string, rendered as `key='value'`.
    pub quoted: bool,
}

/// An ordered multimap of string keys to string values.
///
/// Entries keep the order they were parsed or pushed in. Lookups scan that order:
/// [`Properties::get`] returns the first match and [`Properties::get_all`] yields
/// every match in sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<Property>,
}

impl Properties {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whole text buffer, one `key=value` pair per line.
    ///
    /// Lines without a `=` (including blank lines) are skipped, as are lines whose
    /// key would be empty. This never fails; a malformed buffer simply yields fewer
    /// entries.
    pub fn parse(text: &str) -> Self {
        let mut entries = Vec::new();
        for line in text.lines() {
            let Some(eq) = line.find('=') else {
                continue;
            };
            let key = line[..eq].trim();
            if key.is_empty() {
                continue;
            }
            let value = line[eq + 1..].trim();
            let (value, quoted) =
                if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
                    (&value[1..value.len() - 1], true)
                } else {
                    (value, false)
                };
            entries.push(Property {
                key: key.to_string(),
                value: value.to_string(),
                quoted,
            });
        }
        Self { entries }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.entries.iter()
    }

    /// First value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// All values stored under `key`, preserving insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// Append a raw (unquoted) value.
    pub fn push_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Property {
            key: key.into(),
            value: value.into(),
            quoted: false,
        });
    }

    /// Append a literal string value, rendered single-quoted.
    ///
    /// No escaping is performed; a value containing `'` or a line break cannot be
    /// represented and it is the caller's job to reject it beforehand.
    pub fn push_str(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Property {
            key: key.into(),
            value: value.into(),
            quoted: true,
        });
    }

    /// Append an integer value, rendered bare.
    pub fn push_int(&mut self, key: impl Into<String>, value: usize) {
        self.push_raw(key, value.to_string());
    }
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            if entry.quoted {
                writeln!(f, "{}='{}'", entry.key, entry.value)?;
            } else {
                writeln!(f, "{}={}", entry.key, entry.value)?;
            }
        }
        Ok(())
    }
}
