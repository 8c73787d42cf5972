use thiserror::Error;

use fis_checkpoint::error::CheckpointError;

/// Errors that can occur while consuming the event stream.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("config error: {reason}")]
    Config { reason: String },

    #[error("checkpoint error: {0}")]
    Checkpoint(#[from] CheckpointError),

    #[error("invalid frame at height {height}: {reason}")]
    Frame { height: u64, reason: String },

    #[error("handler failed at height {height}: {reason}")]
    Handler { height: u64, reason: String },
}
