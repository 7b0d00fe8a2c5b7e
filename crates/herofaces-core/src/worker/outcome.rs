use std::path::PathBuf;

/// What happened to one download job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// Image written to `path`.
    Saved { path: PathBuf },
    /// The resolver had no usable URL; nothing was requested.
    NotFound,
    /// Fetch, decode, encode or save failed.
    Failed { reason: String },
}

impl JobOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, JobOutcome::Saved { .. })
    }
}
