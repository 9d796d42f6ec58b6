//! Conversion between a caller's coordinate space and the index plane.
//!
//! The index only sees flat `(x, y)` pairs. Whatever owns the domain data
//! (a map view, a canvas) supplies a [`CoordinateSpace`] that maps its own
//! coordinates into that plane and back.

use geo::Point;
use quadcluster_types::bbox::Rect;

pub trait CoordinateSpace {
    /// Map a domain coordinate into the index plane.
    fn to_plane(&self, domain: Point) -> Point;

    /// Map a plane coordinate back into the domain.
    fn from_plane(&self, plane: Point) -> Point;
}

/// Domain and plane are the same space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl CoordinateSpace for Identity {
    fn to_plane(&self, domain: Point) -> Point {
        domain
    }

    fn from_plane(&self, plane: Point) -> Point {
        plane
    }
}

/// Affine map stretching a domain rectangle onto a plane rectangle.
///
/// A typical use is mapping the visible region of a map, in projected map
/// units, onto a view-local rectangle with its origin at `(0, 0)`.
///
/// ```rust
/// use quadcluster::{CoordinateSpace, LinearSpace, Point, Rect};
///
/// let space = LinearSpace::new(
///     Rect::new(-122.5, 37.7, 0.2, 0.1),
///     Rect::new(0.0, 0.0, 400.0, 200.0),
/// );
/// let plane = space.to_plane(Point::new(-122.4, 37.75));
/// assert!((plane.x() - 200.0).abs() < 1e-9);
/// assert!((plane.y() - 100.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSpace {
    domain: Rect,
    plane: Rect,
}

impl LinearSpace {
    pub fn new(domain: Rect, plane: Rect) -> Self {
        Self { domain, plane }
    }

    pub fn domain(&self) -> Rect {
        self.domain
    }

    pub fn plane(&self) -> Rect {
        self.plane
    }
}

fn remap(value: f64, from_min: f64, from_extent: f64, to_min: f64, to_extent: f64) -> f64 {
    to_min + (value - from_min) / from_extent * to_extent
}

impl CoordinateSpace for LinearSpace {
    fn to_plane(&self, domain: Point) -> Point {
        let (d, p) = (&self.domain, &self.plane);
        Point::new(
            remap(domain.x(), d.min_x(), d.width(), p.min_x(), p.width()),
            remap(domain.y(), d.min_y(), d.height(), p.min_y(), p.height()),
        )
    }

    fn from_plane(&self, plane: Point) -> Point {
        let (d, p) = (&self.domain, &self.plane);
        Point::new(
            remap(plane.x(), p.min_x(), p.width(), d.min_x(), d.width()),
            remap(plane.y(), p.min_y(), p.height(), d.min_y(), d.height()),
        )
    }
}
