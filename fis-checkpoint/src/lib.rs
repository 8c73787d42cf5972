//! Checkpoint log for event-stream consumers.
//!
//! Provides a [`CheckpointLog`](traits::CheckpointLog) trait with a
//! file-backed store and an in-memory test double. Despite the height-keyed
//! interface, the store holds exactly one slot: every write fully replaces
//! the previous payload, trading replay capability for a trivially small,
//! corruption-resistant implementation.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;
