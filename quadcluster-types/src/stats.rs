use serde::{Deserialize, Serialize};

/// Shape of a quadtree at the time the snapshot was taken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of points stored anywhere in the tree
    pub points: usize,
    /// Number of nodes, root included
    pub nodes: usize,
    /// Deepest node depth (root is 0)
    pub depth: usize,
    /// Points stored past capacity at depth-capped leaves
    pub overflow_points: usize,
    /// Insertions refused because the point was outside the bounds
    pub rejected: usize,
}

impl IndexStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_node(&mut self, depth: usize, points: usize, overflow: usize) {
        self.nodes += 1;
        self.points += points;
        self.overflow_points += overflow;
        self.depth = self.depth.max(depth);
    }

    pub fn record_rejected(&mut self, count: usize) {
        self.rejected += count;
    }
}
