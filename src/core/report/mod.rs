//! Diagnostics accumulated while transforming a config document.
//!
//! A [`Report`] only ever grows: entries are appended by [`Report::add`] or by merging the
//! report of a sub-operation with [`Report::merge`]. Neither call touches entries that are
//! already present, so merging is associative and the final order is the order in which the
//! operations ran.

use serde::Serialize;
use std::fmt;

/// Diagnostic kinds a transform or validator can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Error,
    Warning,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Error => write!(f, "error"),
            EntryKind::Warning => write!(f, "warning"),
        }
    }
}

/// One diagnostic. `location` is a dotted path into the input document when known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub kind: EntryKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Entry {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Error,
            message: message.into(),
            location: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Warning,
            message: message.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if let Some(location) = &self.location {
            write!(f, " (at {})", location)?;
        }
        Ok(())
    }
}

/// Ordered, append-only collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    entries: Vec<Entry>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry. No deduplication.
    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.add(Entry::error(message));
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.add(Entry::warning(message));
    }

    /// Append every entry of `other`, preserving its order.
    pub fn merge(&mut self, other: Report) {
        self.entries.extend(other.entries);
    }

    /// Fill in `location` on entries that have none yet.
    ///
    /// Meant for a sub-operation's own report before it is merged upward.
    pub fn at(mut self, location: &str) -> Self {
        for entry in &mut self.entries {
            if entry.location.is_none() {
                entry.location = Some(location.to_string());
            }
        }
        self
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when at least one error was recorded.
    pub fn is_fatal(&self) -> bool {
        self.count(EntryKind::Error) > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.count(EntryKind::Warning) > 0
    }

    pub fn count(&self, kind: EntryKind) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .count()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
