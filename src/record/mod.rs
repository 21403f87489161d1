//! Point records and their fixed-width binary codec.
//!
//! # Architecture
//!
//! ```text
//! Point { x: i32, y: i32, id: PointId }
//!    |  encode
//!    v
//! [x LE: 4][y LE: 4][id raw: 16]   (RECORD_SIZE = 24 bytes, packed)
//!    |  decode
//!    v
//! Point
//! ```

pub mod codec;
pub mod point;

pub use codec::{decode, encode, RECORD_SIZE};
pub use point::{Point, PointId};
