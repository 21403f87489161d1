//! Buffer-owning point store.

use crate::error::{Error, Result};
use crate::record::{self, Point, PointId, RECORD_SIZE};
use bytes::Bytes;
use std::fs;
use std::path::Path;
use std::sync::RwLock;
use tracing::info;

/// Default record file path.
pub const DEFAULT_DATA_PATH: &str = "data.bin";

/// Default number of points produced by the generator.
pub const DEFAULT_POINT_COUNT: usize = 5;

/// Flat-buffer store for encoded point records.
///
/// All records live back-to-back in one refcounted byte buffer, in
/// generation order. The buffer length is always an exact multiple of
/// [`RECORD_SIZE`]; `load` rejects any file that violates this rather than
/// silently dropping a trailing partial record.
///
/// # Concurrency
///
/// Single-writer/multi-reader: `generate` and `load` swap the whole buffer
/// under the write lock, `save` and [`snapshot`](PointStore::snapshot) clone
/// the handle under the read lock. Cloning `Bytes` only bumps a refcount, so
/// readers decode outside the lock from a consistent snapshot.
pub struct PointStore {
    buf: RwLock<Bytes>,
}

impl PointStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            buf: RwLock::new(Bytes::new()),
        }
    }

    /// Replaces the buffer with `count` generated records.
    ///
    /// Record `i` gets `x = y = i` (0-based, ascending) and a fresh random
    /// identifier. Any prior buffer is discarded.
    pub fn generate(&self, count: usize) {
        let mut buf = Vec::with_capacity(count * RECORD_SIZE);
        for index in 0..count {
            let point = Point::new(index as i32, index as i32, PointId::new());
            buf.extend_from_slice(&record::encode(&point));
        }

        *self.buf.write().unwrap() = Bytes::from(buf);
        info!(count, "Generated point records");
    }

    /// Writes the current buffer verbatim to `path`, truncating any existing
    /// file.
    ///
    /// Read-only with respect to the buffer: safe to run concurrently with
    /// reads, and the file write happens outside the lock.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let snapshot = self.snapshot();

        fs::write(path, &snapshot)?;

        info!(path = ?path, bytes = snapshot.len(), "Saved point records");
        Ok(())
    }

    /// Reads the entire file at `path` into the buffer, replacing any prior
    /// buffer wholesale.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the file cannot be read, [`Error::Corruption`] if
    /// its length is not a multiple of [`RECORD_SIZE`] (partial record at
    /// the tail). On any failure the prior buffer is left untouched.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let raw = fs::read(path)?;

        if raw.len() % RECORD_SIZE != 0 {
            return Err(Error::Corruption {
                len: raw.len() as u64,
                record_size: RECORD_SIZE,
            });
        }

        let count = raw.len() / RECORD_SIZE;
        *self.buf.write().unwrap() = Bytes::from(raw);

        info!(path = ?path, count, "Loaded point records");
        Ok(())
    }

    /// Returns a handle to the current buffer.
    ///
    /// The handle stays valid and unchanged even if the store swaps in a new
    /// buffer afterwards.
    pub fn snapshot(&self) -> Bytes {
        self.buf.read().unwrap().clone()
    }

    /// Number of records currently in the buffer.
    pub fn len(&self) -> usize {
        self.buf.read().unwrap().len() / RECORD_SIZE
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.buf.read().unwrap().is_empty()
    }
}

impl Default for PointStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("pointdb_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
        dir.join(name)
    }

    #[test]
    fn test_generate_replaces_buffer() {
        let store = PointStore::new();
        assert!(store.is_empty());

        store.generate(5);
        assert_eq!(store.len(), 5);
        assert_eq!(store.snapshot().len(), 5 * RECORD_SIZE);

        store.generate(2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_generated_coordinates_match_index() -> Result<()> {
        let store = PointStore::new();
        store.generate(4);

        let snapshot = store.snapshot();
        for index in 0..4 {
            let start = index * RECORD_SIZE;
            let point = record::decode(&snapshot[start..start + RECORD_SIZE])?;
            assert_eq!(point.x, index as i32);
            assert_eq!(point.y, index as i32);
        }
        Ok(())
    }

    #[test]
    fn test_save_load_roundtrip() -> Result<()> {
        let path = temp_file("roundtrip.bin");

        let store = PointStore::new();
        store.generate(5);
        store.save(&path)?;

        let fresh = PointStore::new();
        fresh.load(&path)?;

        assert_eq!(fresh.len(), 5);
        assert_eq!(fresh.snapshot(), store.snapshot());

        std::fs::remove_file(path).ok();
        Ok(())
    }

    #[test]
    fn test_load_rejects_partial_record() -> Result<()> {
        let path = temp_file("partial.bin");
        std::fs::write(&path, vec![0u8; 25]).expect("Failed to write test file");

        let store = PointStore::new();
        store.generate(3);

        let err = store.load(&path).unwrap_err();
        match err {
            Error::Corruption { len, record_size } => {
                assert_eq!(len, 25);
                assert_eq!(record_size, RECORD_SIZE);
            }
            other => panic!("Expected corruption error, got: {:?}", other),
        }

        // Prior buffer untouched
        assert_eq!(store.len(), 3);

        std::fs::remove_file(path).ok();
        Ok(())
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = temp_file("does_not_exist.bin");

        let store = PointStore::new();
        store.generate(1);

        assert!(matches!(store.load(&path), Err(Error::Io(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_snapshot_survives_buffer_swap() {
        let store = PointStore::new();
        store.generate(5);

        let snapshot = store.snapshot();
        store.generate(100);

        assert_eq!(snapshot.len(), 5 * RECORD_SIZE);
        assert_eq!(store.len(), 100);
    }

    #[test]
    fn test_save_empty_store() -> Result<()> {
        let path = temp_file("empty.bin");

        let store = PointStore::new();
        store.save(&path)?;

        let fresh = PointStore::new();
        fresh.load(&path)?;
        assert!(fresh.is_empty());

        std::fs::remove_file(path).ok();
        Ok(())
    }
}
