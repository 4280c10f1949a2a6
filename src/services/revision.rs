//! Git queries for the revision identifier and commit time

use super::runner::CommandRunner;
use crate::Result;
use crate::models::Revision;

/// Read the full commit hash of `reference`.
pub fn read_sha1<R: CommandRunner + ?Sized>(
    runner: &R,
    program: &str,
    reference: &str,
) -> Result<String> {
    let out = runner.run(program, &["show", "-s", "--pretty=format:%H", reference])?;
    Ok(chomp(&out).to_string())
}

/// Read the committer date of `reference` (`%ci`, e.g. `2024-05-01 12:34:56 +0200`).
pub fn read_commit_time<R: CommandRunner + ?Sized>(
    runner: &R,
    program: &str,
    reference: &str,
) -> Result<String> {
    let out = runner.run(program, &["show", "-s", "--pretty=format:%ci", reference])?;
    Ok(chomp(&out).to_string())
}

/// Read both values, hash first.
pub fn read_revision<R: CommandRunner + ?Sized>(
    runner: &R,
    program: &str,
    reference: &str,
) -> Result<Revision> {
    let sha1 = read_sha1(runner, program, reference)?;
    let commit_time = read_commit_time(runner, program, reference)?;
    log::trace!("Revision {sha1} committed {commit_time}");

    Ok(Revision { sha1, commit_time })
}

/// Strip a single trailing line terminator (`\n` or `\r\n`), if present.
///
/// Output without a trailing newline is returned whole.
#[must_use]
pub fn chomp(s: &str) -> &str {
    match s.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => s,
    }
}
