//! Store layer
//!
//! # Architecture
//!
//! ```text
//! PointStore (RwLock<Bytes> buffer, the sole source of truth)
//!   └─→ PaginatedReader (per-call snapshot, windowed decode)
//!        └─→ PointReader trait (read seam for the transport layer)
//! ```
//!
//! The store never keeps a decoded record list alongside the buffer.
//! Decoding happens on demand per read, so store state is always exactly
//! "the bytes" and cannot drift from what `save` persists.
//!
//! `generate` and `load` are the only mutators. Both replace the buffer
//! wholesale under the write lock; readers clone the refcounted handle under
//! the read lock and decode from their own snapshot, so an in-flight read
//! always observes a fully formed buffer, old or new, never a partial write.

pub mod buffer;
pub mod engine;
pub mod reader;

pub use buffer::{PointStore, DEFAULT_DATA_PATH, DEFAULT_POINT_COUNT};
pub use engine::PointReader;
pub use reader::{Page, PaginatedReader, ReadQuery};
