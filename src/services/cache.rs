//! Previously written header, read back as a cache of the last stamped revision

use crate::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Read the revision recorded on the first line of `path`.
///
/// Returns `None` when the file is missing, empty, or its first line holds no token.
pub fn read_cached_sha1<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No previous header at {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let mut first_line = Vec::new();
    BufReader::new(file).read_until(b'\n', &mut first_line)?;
    // A lone CR also ends the line.
    if let Some(end) = first_line.iter().position(|&b| b == b'\r') {
        first_line.truncate(end);
    }

    if first_line.is_empty() {
        log::debug!("Previous header {} has no first line", path.display());
        return Ok(None);
    }

    Ok(last_token(&String::from_utf8_lossy(&first_line)))
}

/// Whether `path` already records `sha1`.
pub fn sha1_matches<P: AsRef<Path>>(path: P, sha1: &str) -> Result<bool> {
    let cached = read_cached_sha1(path)?;
    log::trace!("Cached sha1 {cached:?}, current {sha1}");

    Ok(cached.as_deref() == Some(sha1))
}

/// Last whitespace-delimited token of `line` with stray `\r`, `\n` and spaces removed.
#[must_use]
pub fn last_token(line: &str) -> Option<String> {
    line.split_whitespace()
        .last()
        .map(|token| token.replace(['\r', '\n', ' '], ""))
}
