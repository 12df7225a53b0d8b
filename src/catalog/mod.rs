//! Path catalog wiring.
//!
//! A syntax dump declares every action path a tool understands. `PathCatalog`
//! holds the deduplicated, sorted entries; `CompiledMatcher` turns each hard
//! path into a reusable pattern; `SyntaxIndex` ties both to the executable
//! they came from and answers the lookups callers need.

pub mod index;
pub mod matcher;

pub use index::{IndexSnapshot, SyntaxIndex};
pub use matcher::CompiledMatcher;

use std::collections::BTreeSet;

/// Marks a wildcard segment, or, as a trailing character, a prefix with
/// dynamically named children.
pub const WILDCARD: char = '*';
pub const SEPARATOR: char = '/';

/// Deduplicated, lexicographically sorted set of declared paths.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathCatalog {
    entries: BTreeSet<String>,
}

impl PathCatalog {
    /// Build the catalog from the newline-delimited region of a syntax dump.
    pub fn parse(region: &str) -> Self {
        let entries = region
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in ascending order.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Entries that do not end in the wildcard marker, in catalog order.
    pub fn hard_paths(&self) -> impl Iterator<Item = &str> {
        self.entries().filter(|entry| is_hard_path(entry))
    }

    /// Whether any entry contains `<prefix>/*` anywhere inside it.
    pub fn has_star(&self, prefix: &str) -> bool {
        let needle = format!("{prefix}{SEPARATOR}{WILDCARD}");
        self.entries().any(|entry| entry.contains(&needle))
    }
}

pub fn is_hard_path(entry: &str) -> bool {
    !entry.is_empty() && !entry.ends_with(WILDCARD)
}
