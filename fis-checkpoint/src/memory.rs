use crate::error::CheckpointError;
use crate::traits::CheckpointLog;

/// In-memory checkpoint store with the same external contract as the
/// file-backed one. No persistence, no I/O error paths; exists purely for
/// test substitution.
pub struct MemoryCheckpoint {
    slot: Option<Vec<u8>>,
    closed: bool,
}

impl MemoryCheckpoint {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            slot: None,
            closed: false,
        }
    }

    fn ensure_open(&self) -> Result<(), CheckpointError> {
        if self.closed {
            return Err(CheckpointError::Closed);
        }
        Ok(())
    }
}

impl Default for MemoryCheckpoint {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckpointLog for MemoryCheckpoint {
    fn write(&mut self, _height: u64, payload: &[u8]) -> Result<(), CheckpointError> {
        self.ensure_open()?;
        self.slot = Some(payload.to_vec());
        Ok(())
    }

    fn read(&mut self, _height: u64) -> Result<Vec<u8>, CheckpointError> {
        self.ensure_open()?;
        Ok(self.slot.clone().unwrap_or_default())
    }

    fn prune(&mut self, _height: u64) -> Result<(), CheckpointError> {
        self.ensure_open()
    }

    fn close(&mut self) -> Result<(), CheckpointError> {
        self.closed = true;
        Ok(())
    }
}
