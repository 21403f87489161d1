//! Paginated, read-only access over a point store.

use crate::error::{Error, Result};
use crate::record::{self, Point, RECORD_SIZE};
use crate::store::buffer::PointStore;
use crate::store::engine::PointReader;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Window parameters for one paginated read.
///
/// `offset` is the 0-based record ordinal to start at. `limit = 0` means no
/// explicit cap: return everything from `offset` to the end.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ReadQuery {
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub limit: usize,
}

/// One decoded page of records.
///
/// `total` is always the full record count of the store, independent of the
/// window, so a caller can compute whether more pages remain. `offset` and
/// `limit` are pass-through copies of the request for response metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub points: Vec<Point>,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
}

/// Read-only paginated view over a [`PointStore`].
///
/// Each call takes one snapshot of the store's buffer and decodes only the
/// records inside the requested window, so a read costs O(limit) regardless
/// of store size and is never torn by a concurrent `generate` or `load`.
pub struct PaginatedReader {
    store: Arc<PointStore>,
}

impl PaginatedReader {
    /// Creates a reader over the given store.
    pub fn new(store: Arc<PointStore>) -> Self {
        Self { store }
    }

    /// Reads the window `[offset, offset + limit)` of decoded records.
    ///
    /// `limit = 0` returns everything from `offset` to the end; a positive
    /// `limit` is clamped to the remaining record count, so the page holds
    /// exactly `min(limit, total - offset)` records.
    ///
    /// # Errors
    ///
    /// [`Error::Range`] when `offset` is strictly past the end of the store.
    /// `offset == total` is valid and yields an empty page.
    pub fn read(&self, offset: usize, limit: usize) -> Result<Page> {
        let snapshot = self.store.snapshot();
        let total = snapshot.len() / RECORD_SIZE;

        if offset > total {
            return Err(Error::Range { offset, total });
        }

        let remaining = total - offset;
        let count = if limit == 0 {
            remaining
        } else {
            limit.min(remaining)
        };

        let mut points = Vec::with_capacity(count);
        for index in offset..offset + count {
            let start = index * RECORD_SIZE;
            points.push(record::decode(&snapshot[start..start + RECORD_SIZE])?);
        }

        debug!(offset, limit, returned = points.len(), total, "Read page");

        Ok(Page {
            points,
            total,
            offset,
            limit,
        })
    }

    /// Reads the window described by `query`.
    pub fn read_query(&self, query: &ReadQuery) -> Result<Page> {
        self.read(query.offset, query.limit)
    }
}

impl PointReader for PaginatedReader {
    fn read(&self, offset: usize, limit: usize) -> Result<Page> {
        PaginatedReader::read(self, offset, limit)
    }
}
