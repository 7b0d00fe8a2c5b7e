//! Errors from a batch lookup. They fail every job of the batch, never the run.

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("resolver returned {actual} result(s) for {expected} filename(s)")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("batch of {size} exceeds the limit of {max}")]
    BatchTooLarge { size: usize, max: usize },

    #[error("failed to run resolver script: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("resolver script exited with {status}: {stderr}")]
    Script { status: String, stderr: String },

    #[error("resolver output is not a JSON array: {0}")]
    Output(#[source] serde_json::Error),
}
