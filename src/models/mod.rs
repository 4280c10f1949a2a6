//! Data models for the revision being stamped and the run outcome

/// The revision read from git
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    pub sha1: String,
    pub commit_time: String, // git %ci format
}

impl Revision {
    #[must_use]
    pub fn new(sha1: impl Into<String>, commit_time: impl Into<String>) -> Self {
        Self {
            sha1: sha1.into(),
            commit_time: commit_time.into(),
        }
    }
}

/// What a stamping run did to the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampOutcome {
    /// The header already recorded the current revision; nothing was written.
    Unchanged,
    /// The header was created or overwritten.
    Written,
}
