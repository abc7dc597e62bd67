//! Splitting a candidate set into lib64 and lib entries

use crate::categorization::Lib64Rules;
use tracing::{debug, trace};
use unsymlink_types::{CandidateSet, Classification, Partition};

/// Partition entries with the built-in rules
#[must_use]
pub fn partition(entries: CandidateSet) -> Partition {
    Lib64Rules::default().partition(entries)
}

impl Lib64Rules {
    /// Route every entry to the lib64 or lib set
    #[must_use]
    pub fn partition(&self, entries: CandidateSet) -> Partition {
        let candidates = entries.len();
        let partition = Partition::from_classified(entries.into_iter().map(|entry| {
            let rule = self.matched_rule(entry.as_bytes());
            let class = if rule.is_some() {
                Classification::Lib64
            } else {
                Classification::Lib
            };
            match rule {
                Some(rule) => {
                    trace!(entry = %entry, class = %class, rule = %rule, "Classified orphan entry");
                }
                None => trace!(entry = %entry, class = %class, "Classified orphan entry"),
            }
            (entry, class)
        }));

        debug!(
            candidates,
            lib64 = partition.lib64_set().len(),
            lib = partition.lib_set().len(),
            "Partitioned orphan entries"
        );
        partition
    }
}
