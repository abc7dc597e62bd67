//! Orphaned entry classification logic

use bstr::ByteSlice;
use std::fmt;
use unsymlink_config::{constants, ClassifyConfig};
use unsymlink_types::{file_name, Classification};

/// Which lib64 rule matched an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedRule {
    /// Extension is a recognized library suffix
    Extension,
    /// Name contains the versioned shared-object marker
    VersionedMarker,
    /// Name equals a special-cased directory name
    ExactName,
}

impl fmt::Display for MatchedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extension => write!(f, "extension"),
            Self::VersionedMarker => write!(f, "versioned_marker"),
            Self::ExactName => write!(f, "exact_name"),
        }
    }
}

/// Rule set deciding whether an orphan entry stays in lib64
///
/// Rules are checked in a fixed order and the first match wins:
/// extension, versioned marker, exact name. Anything else goes to lib.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lib64Rules {
    extensions: Vec<Vec<u8>>,
    versioned_marker: Vec<u8>,
    names: Vec<Vec<u8>>,
}

impl Default for Lib64Rules {
    fn default() -> Self {
        Self {
            extensions: to_byte_list(constants::LIB64_EXTENSIONS),
            versioned_marker: constants::VERSIONED_MARKER.as_bytes().to_vec(),
            names: to_byte_list(constants::LIB64_NAMES),
        }
    }
}

impl Lib64Rules {
    /// Build rules from configuration
    #[must_use]
    pub fn from_config(config: &ClassifyConfig) -> Self {
        Self {
            extensions: to_byte_list(&config.lib64_extensions),
            versioned_marker: config.versioned_marker.as_bytes().to_vec(),
            names: to_byte_list(&config.lib64_names),
        }
    }

    /// Classify a single entry
    #[must_use]
    pub fn classify(&self, entry: &[u8]) -> Classification {
        match self.matched_rule(entry) {
            Some(_) => Classification::Lib64,
            None => Classification::Lib,
        }
    }

    /// The first rule matching `entry`, or `None` when it belongs in lib
    #[must_use]
    pub fn matched_rule(&self, entry: &[u8]) -> Option<MatchedRule> {
        let ext = extension(entry);
        if !ext.is_empty() && self.extensions.iter().any(|known| known == ext) {
            return Some(MatchedRule::Extension);
        }

        // An empty marker never matches
        if !self.versioned_marker.is_empty() && entry.contains_str(&self.versioned_marker) {
            return Some(MatchedRule::VersionedMarker);
        }

        if self.names.iter().any(|name| name == entry) {
            return Some(MatchedRule::ExactName);
        }

        None
    }
}

/// Classify an entry with the built-in rules
///
/// `.a`, `.chk`, `.la` and `.so` files, versioned shared objects
/// (`*.so.*`), and the `locale` and `perl5` directories stay in lib64.
#[must_use]
pub fn classify(entry: &[u8]) -> Classification {
    Lib64Rules::default().classify(entry)
}

/// Extension of the final path component, including the leading dot
///
/// Leading dots of the component do not start an extension, so `.keep`
/// and `.so` have none while `x.so` has `.so`.
#[must_use]
pub fn extension(entry: &[u8]) -> &[u8] {
    let name = file_name(entry);

    let Some(dot) = name.rfind_byte(b'.') else {
        return &[];
    };

    if name[..dot].iter().all(|&b| b == b'.') {
        return &[];
    }

    &name[dot..]
}

fn to_byte_list<S: AsRef<str>>(items: impl IntoIterator<Item = S>) -> Vec<Vec<u8>> {
    items
        .into_iter()
        .map(|item| item.as_ref().as_bytes().to_vec())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_rule() {
        for name in ["x.a", "x.chk", "x.la", "x.so", "libc.so", "dir/libz.a"] {
            assert_eq!(classify(name.as_bytes()), Classification::Lib64, "{name}");
        }
        assert_eq!(
            Lib64Rules::default().matched_rule(b"x.la"),
            Some(MatchedRule::Extension)
        );
    }

    #[test]
    fn test_versioned_marker_rule() {
        assert_eq!(classify(b"x.so.1.2"), Classification::Lib64);
        assert_eq!(classify(b"libfoo.so.6"), Classification::Lib64);
        assert_eq!(
            Lib64Rules::default().matched_rule(b"x.so.1.2"),
            Some(MatchedRule::VersionedMarker)
        );
    }

    #[test]
    fn test_exact_name_rule() {
        assert_eq!(classify(b"locale"), Classification::Lib64);
        assert_eq!(classify(b"perl5"), Classification::Lib64);
        assert_eq!(
            Lib64Rules::default().matched_rule(b"perl5"),
            Some(MatchedRule::ExactName)
        );
        // Exact match only
        assert_eq!(classify(b"perl5x"), Classification::Lib);
        assert_eq!(classify(b"Locale"), Classification::Lib);
        assert_eq!(classify(b"sub/perl5"), Classification::Lib);
    }

    #[test]
    fn test_unmatched_entries_go_to_lib() {
        for name in [".keep", "readme.txt", "python3.12", "x.so1", "x.A", ""] {
            assert_eq!(classify(name.as_bytes()), Classification::Lib, "{name}");
        }
    }

    #[test]
    fn test_hidden_names_have_no_extension() {
        assert_eq!(extension(b".keep"), b"");
        assert_eq!(extension(b".so"), b"");
        assert_eq!(extension(b"..a"), b"");
        assert_eq!(extension(b".x.a"), b".a");
        assert_eq!(extension(b"x."), b".");
        assert_eq!(extension(b"dir.d/file"), b"");
        assert_eq!(classify(b".so"), Classification::Lib);
        assert_eq!(classify(b".hidden.so"), Classification::Lib64);
    }

    #[test]
    fn test_extension_rule_wins_over_marker() {
        // Matches both the extension and marker rules
        assert_eq!(
            Lib64Rules::default().matched_rule(b"libfoo.so.1.so"),
            Some(MatchedRule::Extension)
        );
    }

    #[test]
    fn test_invalid_utf8_is_classified() {
        assert_eq!(classify(b"lib\xff.so"), Classification::Lib64);
        assert_eq!(classify(b"\xfe\xff"), Classification::Lib);
    }

    #[test]
    fn test_rules_see_raw_bytes_around_separators() {
        let rules = Lib64Rules::default();
        // Marker surrounded by invalid UTF-8
        assert_eq!(
            rules.matched_rule(b"\xfflib.so.\xfe"),
            Some(MatchedRule::VersionedMarker)
        );
        // Marker split across the final separator is still an infix
        assert_eq!(
            rules.matched_rule(b"x.so./y"),
            Some(MatchedRule::VersionedMarker)
        );
        // Extension taken from the last component only
        assert_eq!(extension(b"a.so/\xffb.la"), b".la");
        assert_eq!(extension(b"d\xff.a/b"), b"");
        assert_eq!(rules.matched_rule(b"lib.so"), Some(MatchedRule::Extension));
        assert_eq!(rules.matched_rule(b"so."), None);
    }

    #[test]
    fn test_rules_from_config() {
        let config = ClassifyConfig {
            lib64_extensions: vec![".dylib".to_string()],
            versioned_marker: ".so.".to_string(),
            lib64_names: vec!["locale".to_string(), "perl5".to_string(), "python3".to_string()],
        };
        let rules = Lib64Rules::from_config(&config);

        assert_eq!(rules.classify(b"python3"), Classification::Lib64);
        assert_eq!(rules.classify(b"libz.dylib"), Classification::Lib64);
        assert_eq!(rules.classify(b"libz.a"), Classification::Lib);
    }

    #[test]
    fn test_empty_marker_never_matches() {
        let config = ClassifyConfig {
            lib64_extensions: Vec::new(),
            versioned_marker: String::new(),
            lib64_names: Vec::new(),
        };
        let rules = Lib64Rules::from_config(&config);
        assert_eq!(rules.classify(b"libfoo.so.1"), Classification::Lib);
    }

    #[test]
    fn test_matched_rule_names() {
        assert_eq!(MatchedRule::Extension.to_string(), "extension");
        assert_eq!(MatchedRule::VersionedMarker.to_string(), "versioned_marker");
        assert_eq!(MatchedRule::ExactName.to_string(), "exact_name");
    }

    #[test]
    fn test_default_rules_match_default_config() {
        assert_eq!(
            Lib64Rules::default(),
            Lib64Rules::from_config(&ClassifyConfig::default())
        );
    }
}
