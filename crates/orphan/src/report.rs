//! Human-readable report of a partition

use std::collections::HashSet;
use std::io::{self, Write};
use unsymlink_types::{Entry, Partition};

pub const MOVED_HEADER: &str =
    "orphan dirs/files (not owned by any package) that will be moved... somewhere";
pub const KEPT_HEADER: &str =
    "orphan dirs/files (not owned by any package) that will be kept... somewhere";

/// Entry counts of an emitted report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub moved: usize,
    pub kept: usize,
}

/// Render the report for the given sets
///
/// Each non-empty set gets a blank line, its header, and one tab-indented
/// line per entry in byte order. Empty sets produce nothing.
#[must_use]
pub fn render_report(lib_set: &HashSet<Entry>, lib64_set: &HashSet<Entry>) -> String {
    let mut out = String::new();
    render_section(&mut out, MOVED_HEADER, lib_set);
    render_section(&mut out, KEPT_HEADER, lib64_set);
    out
}

fn render_section(out: &mut String, header: &str, set: &HashSet<Entry>) {
    if set.is_empty() {
        return;
    }

    let mut sorted: Vec<&Entry> = set.iter().collect();
    sorted.sort_unstable();

    out.push('\n');
    out.push_str(header);
    out.push('\n');
    for entry in sorted {
        out.push('\t');
        out.push_str(&entry.display());
        out.push('\n');
    }
}

/// Writes partition reports to a diagnostic sink
pub struct Reporter<W: Write> {
    writer: W,
}

impl<W: Write> Reporter<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the report for `lib_set` (moved) and `lib64_set` (kept)
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn report(
        &mut self,
        lib_set: &HashSet<Entry>,
        lib64_set: &HashSet<Entry>,
    ) -> io::Result<ReportSummary> {
        let text = render_report(lib_set, lib64_set);
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;

        Ok(ReportSummary {
            moved: lib_set.len(),
            kept: lib64_set.len(),
        })
    }

    /// Write the report for a whole partition
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn report_partition(&mut self, partition: &Partition) -> io::Result<ReportSummary> {
        self.report(partition.lib_set(), partition.lib64_set())
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&[u8]]) -> HashSet<Entry> {
        names.iter().map(|name| Entry::from(*name)).collect()
    }

    #[test]
    fn test_both_sections() {
        let text = render_report(&set(&[b".keep"]), &set(&[b"perl5"]));
        assert_eq!(
            text,
            format!("\n{MOVED_HEADER}\n\t.keep\n\n{KEPT_HEADER}\n\tperl5\n")
        );
    }

    #[test]
    fn test_empty_lib_set_omits_section() {
        let text = render_report(&HashSet::new(), &set(&[b"perl5"]));
        assert_eq!(text, format!("\n{KEPT_HEADER}\n\tperl5\n"));
    }

    #[test]
    fn test_empty_lib64_set_omits_section() {
        let text = render_report(&set(&[b".keep"]), &HashSet::new());
        assert_eq!(text, format!("\n{MOVED_HEADER}\n\t.keep\n"));
    }

    #[test]
    fn test_nothing_to_report() {
        assert!(render_report(&HashSet::new(), &HashSet::new()).is_empty());
    }

    #[test]
    fn test_entries_sorted_bytewise() {
        let text = render_report(&set(&[b"zeta", b"alpha", b"Beta"]), &HashSet::new());
        assert_eq!(text, format!("\n{MOVED_HEADER}\n\tBeta\n\talpha\n\tzeta\n"));
    }

    #[test]
    fn test_undecodable_entry_is_escaped() {
        let text = render_report(&HashSet::new(), &set(&[b"lib\xff.so"]));
        assert_eq!(text, format!("\n{KEPT_HEADER}\n\tlib\\xff.so\n"));
    }

    #[test]
    fn test_reporter_writes_and_summarizes() {
        let mut reporter = Reporter::new(Vec::new());
        let summary = reporter
            .report(&set(&[b".keep", b"share"]), &set(&[b"perl5"]))
            .unwrap();

        assert_eq!(summary, ReportSummary { moved: 2, kept: 1 });
        let written = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(written.starts_with(&format!("\n{MOVED_HEADER}\n\t.keep\n\tshare\n")));
    }
}
