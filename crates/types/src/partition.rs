//! Classification outcome and the partition built from it

use crate::entry::Entry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Destination library tree for an orphan entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Architecture-specific tree; the entry is kept in place
    Lib64,
    /// Architecture-generic tree; the entry is moved
    Lib,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lib64 => write!(f, "lib64"),
            Self::Lib => write!(f, "lib"),
        }
    }
}

/// Two disjoint sets covering a classified candidate set
///
/// An entry is held by at most one set: classifying an entry again moves
/// it to the set of its latest classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    lib64: HashSet<Entry>,
    lib: HashSet<Entry>,
}

impl Partition {
    /// Build a partition by routing each entry to the set named by its
    /// classification
    pub fn from_classified<I>(classified: I) -> Self
    where
        I: IntoIterator<Item = (Entry, Classification)>,
    {
        let mut partition = Self::default();
        for (entry, class) in classified {
            partition.insert(entry, class);
        }
        partition
    }

    fn insert(&mut self, entry: Entry, class: Classification) {
        let (target, other) = match class {
            Classification::Lib64 => (&mut self.lib64, &mut self.lib),
            Classification::Lib => (&mut self.lib, &mut self.lib64),
        };
        other.remove(&entry);
        target.insert(entry);
    }

    /// Entries that stay in the 64-bit library tree
    #[must_use]
    pub fn lib64_set(&self) -> &HashSet<Entry> {
        &self.lib64
    }

    /// Entries that move to the generic library tree
    #[must_use]
    pub fn lib_set(&self) -> &HashSet<Entry> {
        &self.lib
    }

    /// Number of entries across both sets
    #[must_use]
    pub fn total(&self) -> usize {
        self.lib64.len() + self.lib.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Which set holds `entry`, if any
    #[must_use]
    pub fn classification_of(&self, entry: &[u8]) -> Option<Classification> {
        if self.lib64.contains(entry) {
            Some(Classification::Lib64)
        } else if self.lib.contains(entry) {
            Some(Classification::Lib)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_classified_routes_entries() {
        let partition = Partition::from_classified([
            (Entry::from("perl5"), Classification::Lib64),
            (Entry::from(".keep"), Classification::Lib),
            (Entry::from("perl5"), Classification::Lib64),
        ]);

        assert_eq!(partition.total(), 2);
        assert_eq!(
            partition.classification_of(b"perl5"),
            Some(Classification::Lib64)
        );
        assert_eq!(
            partition.classification_of(b".keep"),
            Some(Classification::Lib)
        );
        assert_eq!(partition.classification_of(b"locale"), None);
        assert!(partition.lib_set().contains(b".keep".as_slice()));
    }

    #[test]
    fn test_reclassified_entry_stays_in_one_set() {
        let partition = Partition::from_classified([
            (Entry::from("perl5"), Classification::Lib64),
            (Entry::from("perl5"), Classification::Lib),
        ]);

        assert_eq!(partition.total(), 1);
        assert!(partition.lib64_set().is_empty());
        assert_eq!(
            partition.classification_of(b"perl5"),
            Some(Classification::Lib)
        );
    }

    #[test]
    fn test_empty_partition() {
        let partition = Partition::default();
        assert!(partition.is_empty());
        assert!(partition.lib_set().is_empty());
        assert!(partition.lib64_set().is_empty());
    }

    #[test]
    fn test_classification_display_and_serde() {
        assert_eq!(Classification::Lib64.to_string(), "lib64");
        assert_eq!(Classification::Lib.to_string(), "lib");

        let json = serde_json::to_string(&Classification::Lib64).unwrap();
        assert_eq!(json, r#""lib64""#);
        let back: Classification = serde_json::from_str(r#""lib""#).unwrap();
        assert_eq!(back, Classification::Lib);
    }
}
