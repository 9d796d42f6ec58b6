use geo::Point;
use serde::{Deserialize, Serialize};

/// A point stored in the index together with a caller-supplied payload.
///
/// The payload lets query results be mapped back to domain objects (a marker
/// id, a geographic coordinate) without the index knowing what they are.
///
/// # Examples
///
/// ```
/// use quadcluster_types::point::IndexedPoint;
/// use geo::Point;
///
/// let marker = IndexedPoint::new(Point::new(12.0, 30.5), "pin-7");
/// assert_eq!(marker.x(), 12.0);
/// assert_eq!(marker.data, "pin-7");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedPoint<T> {
    /// Position in the index's plane
    pub point: Point<f64>,
    /// Associated data
    pub data: T,
}

impl<T> IndexedPoint<T> {
    pub fn new(point: Point<f64>, data: T) -> Self {
        Self { point, data }
    }

    pub fn x(&self) -> f64 {
        self.point.x()
    }

    pub fn y(&self) -> f64 {
        self.point.y()
    }

    /// Drop the payload and keep the position.
    pub fn into_point(self) -> Point<f64> {
        self.point
    }
}

impl From<Point<f64>> for IndexedPoint<()> {
    fn from(point: Point<f64>) -> Self {
        Self { point, data: () }
    }
}
