//! Header rendering and writing

use crate::Result;
use crate::models::Revision;
use std::path::Path;

/// Render the header text for `revision`.
///
/// The first line must end with the sha1: the cache reads it back from there.
#[must_use]
pub fn render_header(revision: &Revision) -> String {
    let Revision { sha1, commit_time } = revision;

    format!(
        "// Sha1: {sha1}\n\
         // CommitDate: {commit_time}\n\
         #ifndef __SHA1__\n\
         #define __SHA1__\n\
         #define BUILD_SHA1 \"{sha1}\"\n\
         #define BUILD_COMMIT_TIME \"{commit_time}\"\n\
         #endif\n"
    )
}

/// Create or truncate `path` and write the header for `revision`.
pub fn write_header<P: AsRef<Path>>(path: P, revision: &Revision) -> Result<()> {
    let file_path = path.as_ref();

    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(file_path, render_header(revision))?;
    Ok(())
}
