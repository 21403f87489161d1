//! Fixed-width binary codec for point records.
//!
//! # Layout
//!
//! ```text
//! offset  0        4        8                       24
//!         [x: i32] [y: i32] [id: 16 raw UUID bytes]
//! ```
//!
//! Both coordinates are little-endian 32-bit signed integers at fixed
//! offsets, with no inter-field padding. The layout is part of the file
//! format contract and does not depend on the host's native integer width
//! or alignment rules.

use crate::error::{Error, Result};
use crate::record::{Point, PointId};

/// Encoded size of one point record in bytes (4 + 4 + 16).
pub const RECORD_SIZE: usize = 24;

/// Encodes a point into its fixed 24-byte representation.
///
/// Deterministic and total: encoding cannot fail on a valid point.
pub fn encode(point: &Point) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];
    buf[0..4].copy_from_slice(&point.x.to_le_bytes());
    buf[4..8].copy_from_slice(&point.y.to_le_bytes());
    buf[8..24].copy_from_slice(point.id.as_bytes());
    buf
}

/// Decodes a point from exactly [`RECORD_SIZE`] bytes.
///
/// Callers slice the store buffer at record boundaries; a mis-sized slice
/// here means an offset arithmetic bug upstream, not bad input data.
pub fn decode(bytes: &[u8]) -> Result<Point> {
    if bytes.len() != RECORD_SIZE {
        return Err(Error::Decode {
            expected: RECORD_SIZE,
            actual: bytes.len(),
        });
    }

    let x = i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let y = i32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);

    let mut id = [0u8; 16];
    id.copy_from_slice(&bytes[8..24]);

    Ok(Point::new(x, y, PointId::from_bytes(id)))
}
