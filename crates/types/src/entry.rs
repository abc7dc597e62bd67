//! Orphan entry names and candidate sets

use bstr::ByteSlice;
use std::borrow::{Borrow, Cow};
use std::collections::hash_set;
use std::collections::HashSet;
use std::fmt::{self, Write as _};

/// Candidate names used when the caller supplies none
pub const FIXTURE_ENTRIES: [&[u8]; 2] = [b".keep", b"perl5"];

/// A filesystem basename found on disk but not owned by any package
///
/// Stored as raw bytes; no text encoding is assumed. Ordering is
/// byte-lexicographic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entry(Vec<u8>);

impl Entry {
    /// Create an entry from raw bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Text rendering of the entry with undecodable bytes escaped
    #[must_use]
    pub fn display(&self) -> Cow<'_, str> {
        decode_for_display(&self.0)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl AsRef<[u8]> for Entry {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for Entry {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Entry {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Entry {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Entry {
    fn from(bytes: &[u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&str> for Entry {
    fn from(name: &str) -> Self {
        Self(name.as_bytes().to_vec())
    }
}

impl From<String> for Entry {
    fn from(name: String) -> Self {
        Self(name.into_bytes())
    }
}

/// Final `/`-separated component of a name
#[must_use]
pub fn file_name(bytes: &[u8]) -> &[u8] {
    match bytes.rfind_byte(b'/') {
        Some(pos) => &bytes[pos + 1..],
        None => bytes,
    }
}

/// Decode raw bytes as UTF-8 for display
///
/// Valid input is borrowed unchanged. Every byte of an invalid sequence is
/// rendered as `\xNN` with lowercase hex digits, so decoding never fails.
#[must_use]
pub fn decode_for_display(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(bytes.len() + 8);
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
        for byte in chunk.invalid() {
            let _ = write!(out, "\\x{byte:02x}");
        }
    }
    Cow::Owned(out)
}

/// Set of unique orphan entries awaiting classification
///
/// Duplicates collapse on insert; iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    entries: HashSet<Entry>,
}

impl CandidateSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in fixture list: `.keep` and `perl5`
    #[must_use]
    pub fn fixture() -> Self {
        FIXTURE_ENTRIES.iter().copied().collect()
    }

    /// Insert an entry, returning `false` if it was already present
    pub fn insert(&mut self, entry: impl Into<Entry>) -> bool {
        self.entries.insert(entry.into())
    }

    #[must_use]
    pub fn contains(&self, entry: &[u8]) -> bool {
        self.entries.contains(entry)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Entry> {
        self.entries.iter()
    }
}

impl<T: Into<Entry>> FromIterator<T> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: Into<Entry>> Extend<T> for CandidateSet {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.entries.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for CandidateSet {
    type Item = Entry;
    type IntoIter = hash_set::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Entry;
    type IntoIter = hash_set::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
