use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::CheckpointError;
use crate::traits::CheckpointLog;

/// File-backed checkpoint store.
///
/// Owns one file handle for its lifetime. The file content is the raw
/// last-written payload bytes: no header, no length prefix, no checksum
/// beyond the filesystem's own durability guarantees. Each write seeks to
/// the start, truncates, writes the full payload, and syncs.
pub struct FileCheckpoint {
    file: Option<File>,
    path: PathBuf,
}

impl FileCheckpoint {
    /// Open (or create) the checkpoint file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CheckpointError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path.as_ref())
            .map_err(|e| CheckpointError::io("open", e))?;
        Ok(Self {
            file: Some(file),
            path: path.as_ref().to_path_buf(),
        })
    }

    /// The path this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn file_mut(&mut self) -> Result<&mut File, CheckpointError> {
        self.file.as_mut().ok_or(CheckpointError::Closed)
    }
}

/// Write `payload` into `sink` as a single write call, surfacing a
/// partially accepted write as a distinct error rather than success. A
/// crash mid-write shows up here as a byte-count mismatch.
fn write_slot<W: Write>(sink: &mut W, payload: &[u8]) -> Result<(), CheckpointError> {
    let written = sink.write(payload).map_err(|e| CheckpointError::io("write", e))?;
    if written != payload.len() {
        return Err(CheckpointError::ShortWrite {
            expected: payload.len(),
            actual: written,
        });
    }
    Ok(())
}

impl CheckpointLog for FileCheckpoint {
    fn write(&mut self, _height: u64, payload: &[u8]) -> Result<(), CheckpointError> {
        let file = self.file_mut()?;
        file.seek(SeekFrom::Start(0))
            .map_err(|e| CheckpointError::io("seek", e))?;
        file.set_len(0).map_err(|e| CheckpointError::io("truncate", e))?;
        write_slot(file, payload)?;
        file.sync_all().map_err(|e| CheckpointError::io("sync", e))?;
        Ok(())
    }

    fn read(&mut self, _height: u64) -> Result<Vec<u8>, CheckpointError> {
        let file = self.file_mut()?;
        file.seek(SeekFrom::Start(0))
            .map_err(|e| CheckpointError::io("seek", e))?;
        let mut payload = Vec::new();
        file.read_to_end(&mut payload)
            .map_err(|e| CheckpointError::io("read", e))?;
        Ok(payload)
    }

    fn prune(&mut self, _height: u64) -> Result<(), CheckpointError> {
        // Overwrite semantics already discarded everything older.
        self.file_mut().map(|_| ())
    }

    fn close(&mut self) -> Result<(), CheckpointError> {
        if let Some(file) = self.file.take() {
            file.sync_all().map_err(|e| CheckpointError::io("sync", e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_temp() -> (tempfile::TempDir, FileCheckpoint) {
        let dir = tempfile::tempdir().unwrap();
        let log = FileCheckpoint::open(dir.path().join("checkpoint.bin")).unwrap();
        (dir, log)
    }

    #[test]
    fn test_write_then_read() {
        let (_dir, mut log) = open_temp();
        log.write(1, b"payload").unwrap();
        assert_eq!(log.read(1).unwrap(), b"payload".to_vec());
    }

    #[test]
    fn test_overwrite_discards_previous_payload() {
        // Height is not a key: the second write fully replaces the first,
        // and read returns the latest slot for any height argument.
        let (_dir, mut log) = open_temp();
        log.write(10, b"abc").unwrap();
        log.write(10, b"xy").unwrap();
        assert_eq!(log.read(999).unwrap(), b"xy".to_vec());
    }

    #[test]
    fn test_shrinking_write_leaves_no_tail() {
        let (_dir, mut log) = open_temp();
        log.write(1, b"a long first payload").unwrap();
        log.write(2, b"x").unwrap();
        assert_eq!(log.read(2).unwrap(), b"x".to_vec());
    }

    #[test]
    fn test_read_before_any_write_is_empty() {
        let (_dir, mut log) = open_temp();
        assert!(log.read(0).unwrap().is_empty());
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checkpoint.bin");
        {
            let mut log = FileCheckpoint::open(&path).unwrap();
            log.write(7, b"survive").unwrap();
            log.close().unwrap();
        }
        let mut log = FileCheckpoint::open(&path).unwrap();
        assert_eq!(log.read(0).unwrap(), b"survive".to_vec());
    }

    #[test]
    fn test_prune_is_a_noop() {
        let (_dir, mut log) = open_temp();
        log.write(5, b"keep").unwrap();
        log.prune(5).unwrap();
        assert_eq!(log.read(5).unwrap(), b"keep".to_vec());
    }

    #[test]
    fn test_operations_after_close_fail() {
        let (_dir, mut log) = open_temp();
        log.close().unwrap();
        assert!(matches!(log.write(1, b"x"), Err(CheckpointError::Closed)));
        assert!(matches!(log.read(1), Err(CheckpointError::Closed)));
        assert!(matches!(log.prune(1), Err(CheckpointError::Closed)));
    }

    #[test]
    fn test_close_is_idempotent() {
        let (_dir, mut log) = open_temp();
        log.close().unwrap();
        log.close().unwrap();
    }

    /// Sink that accepts at most `cap` bytes per write call.
    struct CappedSink {
        cap: usize,
    }

    impl Write for CappedSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len().min(self.cap))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_short_write_is_an_error_not_success() {
        let mut sink = CappedSink { cap: 2 };
        let err = write_slot(&mut sink, b"abcdef").unwrap_err();
        match err {
            CheckpointError::ShortWrite { expected, actual } => {
                assert_eq!(expected, 6);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_full_write_through_slot_helper() {
        let mut sink = Vec::new();
        write_slot(&mut sink, b"abc").unwrap();
        assert_eq!(sink, b"abc".to_vec());
    }
}
