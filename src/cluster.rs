//! Grid clustering of indexed points.
//!
//! The viewport is cut into a `columns x rows` lattice. Each cell is one
//! range query against the quadtree, and the points it returns collapse into
//! a single [`Cluster`] at their mean position. Empty cells produce nothing.
//!
//! ```rust
//! use quadcluster::{GridClusterer, Point, QuadTree, Rect};
//!
//! let viewport = Rect::new(0.0, 0.0, 400.0, 400.0);
//! let mut tree: QuadTree = QuadTree::new(viewport);
//! tree.insert_all([
//!     Point::new(10.0, 10.0),
//!     Point::new(30.0, 20.0),
//!     Point::new(350.0, 390.0),
//! ]);
//!
//! let clusters = GridClusterer::default().cluster(&tree, &viewport);
//! assert_eq!(clusters.len(), 2);
//! assert_eq!(clusters[0].count, 2);
//! assert_eq!(clusters[0].coordinate, Point::new(20.0, 15.0));
//! ```

use crate::config::GridConfig;
use crate::error::Result;
use crate::index::QuadTree;
use crate::space::{CoordinateSpace, Identity};
use geo::{Centroid, MultiPoint, Point};
use quadcluster_types::bbox::Rect;
use quadcluster_types::cluster::Cluster;

/// Cluster every point of `index` inside `viewport` on a `columns x rows` grid.
///
/// A grid without columns or rows yields no clusters.
pub fn cluster<T>(
    index: &QuadTree<T>,
    viewport: &Rect,
    columns: usize,
    rows: usize,
) -> Vec<Cluster> {
    match GridClusterer::new(columns, rows) {
        Ok(clusterer) => clusterer.cluster(index, viewport),
        Err(e) => {
            log::debug!("Skipping clustering: {}", e);
            Vec::new()
        }
    }
}

/// Reduces a populated quadtree to one weighted centroid per grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridClusterer {
    columns: usize,
    rows: usize,
}

impl GridClusterer {
    pub fn new(columns: usize, rows: usize) -> Result<Self> {
        Self::from_config(&GridConfig::new(columns, rows))
    }

    pub fn from_config(config: &GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            columns: config.columns,
            rows: config.rows,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The lattice over `viewport`, row by row from the top-left cell.
    ///
    /// Always exactly `columns * rows` cells for a viewport with area, none
    /// otherwise. Neighbouring cells share their edge and the outer cells
    /// end on the viewport's own edges, so under half-open containment
    /// every point of the viewport falls in exactly one cell.
    pub fn cells(&self, viewport: &Rect) -> Vec<Rect> {
        if !viewport.is_finite() {
            log::warn!("Rejecting clustering viewport with non-finite coordinates");
            return Vec::new();
        }
        if viewport.is_empty() {
            return Vec::new();
        }

        let xs = edges(viewport.min_x(), viewport.max_x(), self.columns);
        let ys = edges(viewport.min_y(), viewport.max_y(), self.rows);

        let mut cells = Vec::with_capacity(self.columns * self.rows);
        for row in ys.windows(2) {
            for col in xs.windows(2) {
                cells.push(Rect::from_corners(col[0], row[0], col[1], row[1]));
            }
        }
        cells
    }

    /// Cluster in the index plane.
    pub fn cluster<T>(&self, index: &QuadTree<T>, viewport: &Rect) -> Vec<Cluster> {
        self.cluster_in(index, viewport, &Identity)
    }

    /// Cluster, averaging member positions in the domain of `space`.
    ///
    /// Every point found in a cell is mapped back through
    /// [`CoordinateSpace::from_plane`] before the mean is taken, so cluster
    /// coordinates come out in domain units. Cells stay in plane units.
    pub fn cluster_in<T, S>(&self, index: &QuadTree<T>, viewport: &Rect, space: &S) -> Vec<Cluster>
    where
        S: CoordinateSpace + ?Sized,
    {
        let cells = self.cells(viewport);
        let mut clusters = Vec::new();
        let mut folded = 0;

        for cell in &cells {
            let members: Vec<Point> = index
                .query_items(cell)
                .into_iter()
                .map(|item| space.from_plane(item.point))
                .collect();

            let count = members.len();
            let coordinate = match count {
                0 => continue,
                1 => members[0],
                _ => match MultiPoint::new(members).centroid() {
                    Some(centroid) => centroid,
                    None => {
                        // A multipoint with members always has a centroid.
                        debug_assert!(false, "no centroid for {} points in {:?}", count, cell);
                        log::error!("No centroid for {} points in {:?}; cell skipped", count, cell);
                        continue;
                    }
                },
            };

            folded += count;
            clusters.push(Cluster::new(coordinate, count, *cell));
        }

        log::debug!(
            "Clustered {} points into {} clusters over {} cells",
            folded,
            clusters.len(),
            cells.len()
        );
        clusters
    }
}

impl Default for GridClusterer {
    fn default() -> Self {
        let config = GridConfig::default();
        Self {
            columns: config.columns,
            rows: config.rows,
        }
    }
}

/// `n + 1` split positions from `min` to `max`, with both ends exact.
///
/// Spans wider than `f64::MAX` step by half the extent twice so no
/// intermediate overflows.
fn edges(min: f64, max: f64, n: usize) -> Vec<f64> {
    let extent = max - min;
    (0..=n)
        .map(|i| {
            let t = i as f64 / n as f64;
            if i == 0 {
                min
            } else if i == n {
                max
            } else if extent.is_finite() {
                min + extent * t
            } else {
                let step = (max / 2.0 - min / 2.0) * t;
                min + step + step
            }
        })
        .collect()
}
