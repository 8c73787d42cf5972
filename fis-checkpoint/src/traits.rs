use crate::error::CheckpointError;

/// Durable single-slot checkpoint store.
///
/// The interface is height-keyed for symmetry with the event stream it
/// serves, but implementations hold exactly one slot: `write` replaces the
/// previous payload and `read` returns the latest payload regardless of the
/// height argument. Callers that need per-height history must layer it
/// externally.
///
/// No internal locking: the `&mut self` receivers make exclusive access a
/// compile-time property; concurrent callers sharing one log must serialize
/// externally.
pub trait CheckpointLog {
    /// Persist `payload` as the current checkpoint. Fully replaces any
    /// previously stored payload.
    fn write(&mut self, height: u64, payload: &[u8]) -> Result<(), CheckpointError>;

    /// Return the most recently written payload, or empty bytes if nothing
    /// has been written yet. The `height` argument does not select among
    /// historical checkpoints; only the latest slot exists.
    fn read(&mut self, height: u64) -> Result<Vec<u8>, CheckpointError>;

    /// Drop checkpoints at or below `height`. Overwrite semantics already
    /// discard history, so this is a no-op for both implementations.
    fn prune(&mut self, height: u64) -> Result<(), CheckpointError>;

    /// Flush and release the underlying resource. Subsequent operations
    /// fail with [`CheckpointError::Closed`].
    fn close(&mut self) -> Result<(), CheckpointError>;
}
