//! Read seam for external consumers.

use crate::error::Result;
use crate::store::reader::Page;

/// Narrow read interface a transport layer calls.
///
/// The transport owns routing, request validation, and error-to-protocol
/// mapping; the store side only answers windowed reads. Implementations must
/// be `Send + Sync` so concurrent request handlers can share one reader.
pub trait PointReader: Send + Sync {
    /// Reads the window `[offset, offset + limit)`; `limit = 0` means
    /// everything from `offset` to the end. The returned page always carries
    /// the total record count.
    fn read(&self, offset: usize, limit: usize) -> Result<Page>;
}
