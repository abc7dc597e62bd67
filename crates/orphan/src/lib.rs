#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Orphaned library entry handling
//!
//! Decides which entries not owned by any package stay in the 64-bit
//! library tree and which move to the generic one, then reports the split.

mod categorization;
mod partition;
mod report;

pub use categorization::{classify, extension, Lib64Rules, MatchedRule};
pub use partition::partition;
pub use report::{render_report, ReportSummary, Reporter, KEPT_HEADER, MOVED_HEADER};
