//! Marker-delimited documentation file splicing
//!
//! The generated tables land between two literal marker lines in a
//! documentation file. Only the region strictly between the markers is
//! replaced; everything outside is preserved byte for byte.

use crate::infra::FileSystem;
use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;

/// Line opening the generated-tables region
pub const BEGIN_MARKER: &str = "[//]: # \"BEGIN TABLES\"";

/// Line closing the generated-tables region
pub const END_MARKER: &str = "[//]: # \"END TABLES\"";

/// Splice failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpliceError {
    /// A required marker line is missing from the target file
    #[error("marker not found in target file: {0}")]
    MarkerNotFound(&'static str),
}

/// Replace the region between the markers with `tables`.
///
/// The markers themselves are kept; the new content is set off from them by
/// blank lines.
pub fn splice_tables(contents: &str, tables: &str) -> Result<String, SpliceError> {
    let begin = contents
        .find(BEGIN_MARKER)
        .ok_or(SpliceError::MarkerNotFound(BEGIN_MARKER))?;
    let after_begin = begin + BEGIN_MARKER.len();
    let end = contents[after_begin..]
        .find(END_MARKER)
        .map(|rel| after_begin + rel)
        .ok_or(SpliceError::MarkerNotFound(END_MARKER))?;

    let mut out = String::with_capacity(contents.len() + tables.len());
    out.push_str(&contents[..after_begin]);
    out.push_str("\n\n");
    out.push_str(tables);
    out.push_str("\n\n");
    out.push_str(&contents[end..]);
    Ok(out)
}

/// Read `path`, splice `tables` into its marker region, and write it back.
pub fn update_file<FS: FileSystem>(fs: &FS, path: &Path, tables: &str) -> Result<()> {
    let contents = fs
        .read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let updated = splice_tables(&contents, tables)
        .with_context(|| format!("Failed to splice tables into {}", path.display()))?;
    fs.write(path, updated)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
