// PointDB - Rust Implementation
// A paginated flat-file point record store

#![warn(rust_2018_idioms)]

pub mod record;
pub mod store;

// Re-exports for convenience
pub use record::{Point, PointId};
pub use store::{PaginatedReader, PointReader, PointStore};

/// PointDB error types
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum Error {
        #[error("Decode error: expected {expected} bytes, got {actual}")]
        Decode { expected: usize, actual: usize },

        #[error("Corrupt record file: {len} bytes is not a multiple of the {record_size}-byte record size")]
        Corruption { len: u64, record_size: usize },

        #[error("I/O error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Range error: offset {offset} is past the end of the store ({total} records)")]
        Range { offset: usize, total: usize },
    }

    pub type Result<T> = std::result::Result<T, Error>;
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
