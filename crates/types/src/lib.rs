#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for unsymlink
//!
//! Orphan entries are raw byte names; a candidate set is classified into a
//! partition of entries kept in the 64-bit library tree and entries moved to
//! the generic one.

pub mod entry;
pub mod partition;

// Re-export commonly used types
pub use entry::{decode_for_display, file_name, CandidateSet, Entry, FIXTURE_ENTRIES};
pub use partition::{Classification, Partition};
