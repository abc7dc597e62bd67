//! Loading the candidate set from arguments, list files, or stdin

use std::ffi::OsString;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};
use unsymlink_errors::{InputError, Result};
use unsymlink_types::CandidateSet;

/// Where candidate names come from
pub struct CandidateSource<'a> {
    pub entries: &'a [OsString],
    pub list_file: Option<&'a Path>,
    pub null_separated: bool,
}

impl CandidateSource<'_> {
    /// Collect every candidate name into one set
    ///
    /// Falls back to the fixture list when no entries or list file are given.
    pub fn load(&self) -> Result<CandidateSet> {
        if self.entries.is_empty() && self.list_file.is_none() {
            info!("No candidates given, using the fixture list");
            return Ok(CandidateSet::fixture());
        }

        let mut candidates: CandidateSet = self
            .entries
            .iter()
            .map(|entry| entry.as_encoded_bytes().to_vec())
            .collect();

        if let Some(path) = self.list_file {
            let contents = read_list(path)?;
            let before = candidates.len();
            candidates.extend(split_entries(&contents, self.null_separated));
            debug!(
                path = %path.display(),
                added = candidates.len() - before,
                "Read candidate list"
            );
        }

        Ok(candidates)
    }
}

fn read_list(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut contents = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut contents)
            .map_err(|e| InputError::ReadFailed {
                origin: "<stdin>".to_string(),
                message: e.to_string(),
            })?;
        return Ok(contents);
    }

    std::fs::read(path).map_err(|e| {
        InputError::ReadFailed {
            origin: path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Split list contents into entry names, dropping empty records
fn split_entries(contents: &[u8], null_separated: bool) -> impl Iterator<Item = &[u8]> {
    let separator = if null_separated { b'\0' } else { b'\n' };
    contents
        .split(move |&b| b == separator)
        .filter(|record| !record.is_empty())
}
