//! Report types returned by listing and aggregation operations.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// A numbered listing of display lines, or an empty state.
///
/// Lines are numbered from 1 in iteration order: `"1. ..."`, `"2. ..."`.
/// When there is nothing to list, [`Listing::lines`] is empty and the
/// `Display` impl renders the empty-state message instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    lines: Vec<String>,
    empty_message: &'static str,
}

impl Listing {
    /// Number every item from 1.
    pub fn numbered<I, T>(items: I, empty_message: &'static str) -> Self
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        let lines = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| format!("{}. {}", index + 1, item))
            .collect();

        Self {
            lines,
            empty_message,
        }
    }

    /// The numbered lines; empty for an empty listing.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Message shown when there is nothing to list.
    pub fn empty_message(&self) -> &'static str {
        self.empty_message
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lines.is_empty() {
            return f.write_str(self.empty_message);
        }
        f.write_str(&self.lines.join("\n"))
    }
}

/// Counts per distinct value, in order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupCounts(Vec<(String, usize)>);

impl GroupCounts {
    /// Tally the given keys.
    pub fn tally<'a, I>(keys: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut groups: Vec<(String, usize)> = Vec::new();
        for key in keys {
            match groups.iter_mut().find(|(k, _)| k == key) {
                Some((_, count)) => *count += 1,
                None => groups.push((key.to_string(), 1)),
            }
        }
        Self(groups)
    }

    /// Count for `key`, or `None` if the key never occurred.
    pub fn get(&self, key: &str) -> Option<usize> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, c)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(k, c)| (k.as_str(), *c))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, c)| c).sum()
    }
}

impl fmt::Display for GroupCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.iter().map(|(k, c)| format!("{}: {}", k, c)).collect();
        f.write_str(&lines.join("\n"))
    }
}

// Serialized as a JSON object, keys in first-occurrence order
impl Serialize for GroupCounts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, count) in &self.0 {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}
