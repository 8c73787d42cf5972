use thiserror::Error;

/// Errors that can occur during checkpoint operations.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("{op} error: {reason}")]
    Io { op: &'static str, reason: String },

    #[error("short write: wrote {actual} of {expected} bytes")]
    ShortWrite { expected: usize, actual: usize },

    #[error("checkpoint log is closed")]
    Closed,
}

impl CheckpointError {
    /// Wrap an I/O failure with the operation that produced it.
    pub fn io(op: &'static str, err: std::io::Error) -> Self {
        CheckpointError::Io {
            op,
            reason: err.to_string(),
        }
    }
}
