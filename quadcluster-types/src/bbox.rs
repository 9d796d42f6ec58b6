use geo::{Point, coord};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with half-open point containment.
///
/// A rectangle is described by its origin (`min_x`, `min_y`) and its size
/// (`width`, `height`). Points on the minimum edges are inside, points on the
/// maximum edges are not. The corners are kept as a `geo::Rect` so that
/// quadrant splits reuse the parent's exact edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// The underlying geometric rectangle
    pub rect: geo::Rect<f64>,
}

impl Rect {
    /// Create a rectangle from its origin and size.
    ///
    /// # Arguments
    ///
    /// * `x` - Minimum x coordinate
    /// * `y` - Minimum y coordinate
    /// * `width` - Extent along x
    /// * `height` - Extent along y
    ///
    /// A negative size is normalised by `geo::Rect`, so the resulting
    /// rectangle spans `[x + width, x]` instead of being inverted.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadcluster_types::bbox::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 10.0, 5.0);
    /// assert_eq!(rect.max_x(), 10.0);
    /// assert_eq!(rect.height(), 5.0);
    /// ```
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_corners(x, y, x + width, y + height)
    }

    /// Create a rectangle from its minimum and maximum corners.
    pub fn from_corners(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            rect: geo::Rect::new(coord! { x: min_x, y: min_y }, coord! { x: max_x, y: max_y }),
        }
    }

    /// Create a rectangle from a `geo::Rect`.
    pub fn from_rect(rect: geo::Rect<f64>) -> Self {
        Self { rect }
    }

    pub fn min_x(&self) -> f64 {
        self.rect.min().x
    }

    pub fn min_y(&self) -> f64 {
        self.rect.min().y
    }

    pub fn max_x(&self) -> f64 {
        self.rect.max().x
    }

    pub fn max_y(&self) -> f64 {
        self.rect.max().y
    }

    pub fn width(&self) -> f64 {
        self.max_x() - self.min_x()
    }

    pub fn height(&self) -> f64 {
        self.max_y() - self.min_y()
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Get the center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// True when the rectangle has no interior, so no point can be contained.
    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    /// True when every corner coordinate is finite.
    pub fn is_finite(&self) -> bool {
        [self.min_x(), self.min_y(), self.max_x(), self.max_y()]
            .iter()
            .all(|v| v.is_finite())
    }

    /// True when any corner coordinate is NaN. Such a rectangle contains
    /// nothing and intersects nothing.
    pub fn has_nan(&self) -> bool {
        [self.min_x(), self.min_y(), self.max_x(), self.max_y()]
            .iter()
            .any(|v| v.is_nan())
    }

    /// Half-open containment: `min <= p < max` on both axes.
    ///
    /// ```
    /// use quadcluster_types::bbox::Rect;
    /// use geo::Point;
    ///
    /// let rect = Rect::new(0.0, 0.0, 2.0, 2.0);
    /// assert!(rect.contains(&Point::new(0.0, 0.0)));
    /// assert!(rect.contains(&Point::new(1.9, 1.9)));
    /// assert!(!rect.contains(&Point::new(2.0, 2.0)));
    /// ```
    pub fn contains(&self, point: &Point) -> bool {
        let (x, y) = (point.x(), point.y());
        x >= self.min_x() && x < self.max_x() && y >= self.min_y() && y < self.max_y()
    }

    /// Closed-interval overlap. Rectangles sharing only an edge intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x() <= other.max_x()
            && other.min_x() <= self.max_x()
            && self.min_y() <= other.max_y()
            && other.min_y() <= self.max_y()
    }

    pub fn top_left(&self) -> Rect {
        Rect::from_corners(self.min_x(), self.min_y(), self.mid_x(), self.mid_y())
    }

    pub fn top_right(&self) -> Rect {
        Rect::from_corners(self.mid_x(), self.min_y(), self.max_x(), self.mid_y())
    }

    pub fn bottom_left(&self) -> Rect {
        Rect::from_corners(self.min_x(), self.mid_y(), self.mid_x(), self.max_y())
    }

    pub fn bottom_right(&self) -> Rect {
        Rect::from_corners(self.mid_x(), self.mid_y(), self.max_x(), self.max_y())
    }

    /// The four quadrants in top-left, top-right, bottom-left, bottom-right order.
    ///
    /// Adjacent quadrants share their split edge exactly, so every point
    /// contained by `self` is contained by exactly one quadrant.
    pub fn quadrants(&self) -> [Rect; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_left(),
            self.bottom_right(),
        ]
    }

    fn mid_x(&self) -> f64 {
        midpoint(self.min_x(), self.max_x())
    }

    fn mid_y(&self) -> f64 {
        midpoint(self.min_y(), self.max_y())
    }
}

/// Halfway between `min` and `max`, finite whenever both ends are.
///
/// `max - min` overflows for spans wider than `f64::MAX`; halving each end
/// first keeps the split inside the rectangle.
fn midpoint(min: f64, max: f64) -> f64 {
    let mid = min + (max - min) / 2.0;
    if mid.is_finite() {
        mid
    } else {
        min / 2.0 + max / 2.0
    }
}

impl From<geo::Rect<f64>> for Rect {
    fn from(rect: geo::Rect<f64>) -> Self {
        Self::from_rect(rect)
    }
}

impl From<Rect> for geo::Rect<f64> {
    fn from(rect: Rect) -> Self {
        rect.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_open_containment() {
        let rect = Rect::new(0.0, 0.0, 2.0, 2.0);

        assert!(rect.contains(&Point::new(1.0, 1.0)));
        assert!(rect.contains(&Point::new(0.0, 1.0)));
        assert!(!rect.contains(&Point::new(2.0, 2.0)));
        assert!(!rect.contains(&Point::new(2.0, 1.0)));
        assert!(!rect.contains(&Point::new(1.0, 2.0)));
        assert!(!rect.contains(&Point::new(-0.1, 1.0)));
    }

    #[test]
    fn test_nan_is_never_contained() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!rect.contains(&Point::new(f64::NAN, 1.0)));
        assert!(!rect.contains(&Point::new(1.0, f64::NAN)));
    }

    #[test]
    fn test_zero_area_contains_nothing() {
        let rect = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert!(rect.is_empty());
        assert!(!rect.contains(&Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_negative_size_is_normalised() {
        let rect = Rect::new(10.0, 10.0, -4.0, -2.0);
        assert_eq!(rect.min_x(), 6.0);
        assert_eq!(rect.min_y(), 8.0);
        assert_eq!(rect.max_x(), 10.0);
        assert_eq!(rect.max_y(), 10.0);
    }

    #[test]
    fn test_intersects_is_closed() {
        let a = Rect::new(0.0, 0.0, 5.0, 5.0);
        let touching = Rect::new(5.0, 0.0, 5.0, 5.0);
        let apart = Rect::new(5.1, 0.0, 5.0, 5.0);

        assert!(a.intersects(&touching));
        assert!(touching.intersects(&a));
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn test_quadrants_partition_parent() {
        let rect = Rect::new(0.0, 0.0, 10.0, 6.0);
        let [tl, tr, bl, br] = rect.quadrants();

        assert_eq!(tl, Rect::new(0.0, 0.0, 5.0, 3.0));
        assert_eq!(tr, Rect::new(5.0, 0.0, 5.0, 3.0));
        assert_eq!(bl, Rect::new(0.0, 3.0, 5.0, 3.0));
        assert_eq!(br, Rect::new(5.0, 3.0, 5.0, 3.0));

        for point in [
            Point::new(0.0, 0.0),
            Point::new(5.0, 3.0),
            Point::new(4.999, 2.999),
            Point::new(9.999, 5.999),
        ] {
            let owners = rect.quadrants().iter().filter(|q| q.contains(&point)).count();
            assert_eq!(owners, 1, "point {:?} must land in exactly one quadrant", point);
        }
    }

    #[test]
    fn test_quadrants_split_bounds_wider_than_f64_max() {
        let rect = Rect::from_corners(-1.5e308, -1.5e308, 1.5e308, 1.5e308);
        let [tl, tr, bl, br] = rect.quadrants();

        assert_eq!(rect.center(), Point::new(0.0, 0.0));
        assert_eq!(tl, Rect::from_corners(-1.5e308, -1.5e308, 0.0, 0.0));
        assert_eq!(br, Rect::from_corners(0.0, 0.0, 1.5e308, 1.5e308));
        assert_eq!(tr.min_x(), 0.0);
        assert_eq!(bl.min_y(), 0.0);

        let point = Point::new(1.0, -1.0);
        let owners = rect.quadrants().iter().filter(|q| q.contains(&point)).count();
        assert_eq!(owners, 1);
        assert!(tr.contains(&point));
    }

    #[test]
    fn test_nan_corner_intersects_nothing() {
        let rect = Rect::from_corners(f64::NAN, 0.0, 5.0, 5.0);
        assert!(rect.has_nan());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).has_nan());
        assert!(!rect.intersects(&Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(!rect.contains(&Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_quadrants_share_edges_with_awkward_bounds() {
        let rect = Rect::new(0.1, 0.7, 0.3, 0.9);
        let [tl, tr, bl, br] = rect.quadrants();

        assert_eq!(tl.max_x(), tr.min_x());
        assert_eq!(tr.max_x(), rect.max_x());
        assert_eq!(bl.max_y(), rect.max_y());
        assert_eq!(br.max_x(), rect.max_x());
        assert_eq!(br.max_y(), rect.max_y());
    }
}
