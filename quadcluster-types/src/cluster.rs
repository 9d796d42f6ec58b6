use crate::bbox::Rect;
use geo::Point;
use serde::{Deserialize, Serialize};

/// A group of nearby points folded into one weighted representative.
///
/// Clusters carry no identity; every clustering run produces a fresh list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Mean position of the folded points
    pub coordinate: Point<f64>,
    /// Number of points folded into this cluster
    pub count: usize,
    /// Grid cell the points were collected from
    pub cell: Rect,
}

impl Cluster {
    pub fn new(coordinate: Point<f64>, count: usize, cell: Rect) -> Self {
        Self {
            coordinate,
            count,
            cell,
        }
    }

    /// True for a cluster standing in for exactly one point.
    pub fn is_single(&self) -> bool {
        self.count == 1
    }
}
