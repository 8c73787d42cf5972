use borsh::BorshDeserialize;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use fis_checkpoint::file::FileCheckpoint;
use fis_checkpoint::traits::CheckpointLog;
use fis_types::wire::MessageFrame;

use crate::config::StreamConfig;
use crate::error::StreamError;

/// One framed interop message observed at a given chain height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamEvent {
    pub height: u64,
    /// Borsh-encoded [`MessageFrame`].
    pub frame: Vec<u8>,
}

/// Pull-driven consumer: decodes frames, invokes the handler, and persists
/// the processed height after every event so a restart resumes exactly once
/// past the last fully handled height.
///
/// The handler returns a plain reason string on failure; the consumer
/// attaches the height and stops. There are no retries — callers that need
/// them wrap the handler.
pub struct Consumer<H>
where
    H: FnMut(u64, fis_types::wire::FisMessage) -> Result<(), String>,
{
    checkpoint: Box<dyn CheckpointLog + Send>,
    handler: H,
    last_height: u64,
}

impl<H> Consumer<H>
where
    H: FnMut(u64, fis_types::wire::FisMessage) -> Result<(), String>,
{
    /// Build a consumer over an already-opened checkpoint log. Resumes from
    /// the persisted height when one exists and it is past `start_height`.
    pub fn new(
        start_height: u64,
        mut checkpoint: Box<dyn CheckpointLog + Send>,
        handler: H,
    ) -> Result<Self, StreamError> {
        let mut last_height = start_height;
        let stored = checkpoint.read(0)?;
        if !stored.is_empty() {
            match decode_height(&stored) {
                Some(height) => {
                    if height > last_height {
                        last_height = height;
                    }
                    info!(height, "resuming from checkpoint");
                }
                None => {
                    warn!(
                        len = stored.len(),
                        "checkpoint payload is not a height; starting fresh"
                    );
                }
            }
        }
        Ok(Self {
            checkpoint,
            handler,
            last_height,
        })
    }

    /// Build a consumer with a file-backed checkpoint at the configured path.
    pub fn from_config(config: &StreamConfig, handler: H) -> Result<Self, StreamError> {
        let checkpoint = FileCheckpoint::open(&config.checkpoint_path)?;
        Self::new(config.start_height, Box::new(checkpoint), handler)
    }

    /// The last fully processed height. Events at or below it are skipped.
    pub fn last_height(&self) -> u64 {
        self.last_height
    }

    /// Consume events until the channel closes. Returns the number of
    /// events processed (skipped events do not count).
    pub async fn run(
        &mut self,
        mut events: mpsc::Receiver<StreamEvent>,
    ) -> Result<u64, StreamError> {
        let mut processed = 0u64;
        while let Some(event) = events.recv().await {
            if event.height <= self.last_height {
                debug!(height = event.height, "skipping already-processed height");
                continue;
            }
            let frame =
                MessageFrame::try_from_slice(&event.frame).map_err(|e| StreamError::Frame {
                    height: event.height,
                    reason: e.to_string(),
                })?;
            let Some(message) = frame.unwrap_message() else {
                warn!(
                    height = event.height,
                    message_type = frame.message_type,
                    "skipping frame with unknown message type"
                );
                continue;
            };
            (self.handler)(event.height, message).map_err(|reason| StreamError::Handler {
                height: event.height,
                reason,
            })?;
            self.checkpoint
                .write(event.height, &event.height.to_be_bytes())?;
            self.last_height = event.height;
            processed += 1;
            debug!(height = event.height, "checkpoint advanced");
        }
        self.checkpoint.close()?;
        info!(processed, "event stream closed");
        Ok(processed)
    }
}

fn decode_height(payload: &[u8]) -> Option<u64> {
    payload.try_into().ok().map(u64::from_be_bytes)
}
