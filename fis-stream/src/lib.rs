//! Event-stream consumer for the Flux Interop System.
//!
//! Receives framed interop messages one per processed height, hands them to
//! a caller-supplied handler, and persists the last processed height through
//! a [`CheckpointLog`](fis_checkpoint::traits::CheckpointLog) so a restarted
//! consumer resumes where it left off.

pub mod config;
pub mod consumer;
pub mod error;
