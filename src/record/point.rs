//! Point entities and their identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A unique identifier for a point record.
///
/// PointId is a 128-bit UUID, generated randomly (UUIDv4) for every new
/// record. On disk it occupies the last 16 bytes of a record; everywhere
/// else it renders in the canonical hyphenated form.
///
/// # Examples
///
/// ```rust
/// use pointdb::record::PointId;
///
/// let id1 = PointId::new();
/// let id2 = PointId::new();
/// assert_ne!(id1, id2); // UUIDs are unique
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointId(Uuid);

impl PointId {
    /// Creates a new random point ID using UUIDv4.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a PointId from an existing UUID.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointdb::record::PointId;
    /// use uuid::Uuid;
    ///
    /// let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
    /// let id = PointId::from_uuid(uuid);
    /// assert_eq!(id.as_uuid(), uuid);
    /// ```
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Creates a PointId from its 16 raw bytes.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Returns the identifier as a 16-byte array.
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for PointId {
    fn default() -> Self {
        Self::new()
    }
}

/// A point in 2-dimensional space with a unique identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// The x-coordinate of the point.
    pub x: i32,
    /// The y-coordinate of the point.
    pub y: i32,
    /// The unique ID of the point.
    pub id: PointId,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: i32, y: i32, id: PointId) -> Self {
        Self { x, y, id }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(x={}, y={}, id={})", self.x, self.y, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_id() {
        let id1 = PointId::new();
        let id2 = PointId::new();
        assert_ne!(id1, id2);

        let uuid = Uuid::new_v4();
        let id3 = PointId::from_uuid(uuid);
        assert_eq!(id3.as_uuid(), uuid);
    }

    #[test]
    fn test_point_id_bytes_roundtrip() {
        let id = PointId::new();
        let bytes = *id.as_bytes();
        assert_eq!(PointId::from_bytes(bytes), id);
    }

    #[test]
    fn test_point_id_display_is_hyphenated() {
        let rendered = PointId::new().to_string();
        // Canonical 8-4-4-4-12 form
        assert_eq!(rendered.len(), 36);
        assert_eq!(rendered.matches('-').count(), 4);
    }

    #[test]
    fn test_point_serializes_id_as_canonical_text() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let point = Point::new(1, 2, PointId::from_uuid(uuid));

        let json = serde_json::to_value(point).unwrap();
        assert_eq!(json["x"], 1);
        assert_eq!(json["y"], 2);
        assert_eq!(json["id"], "550e8400-e29b-41d4-a716-446655440000");
    }
}
