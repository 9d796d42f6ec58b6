//! Quadtree builder for flexible configuration
//!
//! Collects bounds and shape settings, validates them together, and then
//! creates an empty [`QuadTree`].

use crate::config::{Config, IndexConfig};
use crate::error::{QuadError, Result};
use crate::index::QuadTree;
use crate::validation::validate_rect;
use quadcluster_types::bbox::Rect;

/// Builder for quadtrees with custom bounds, capacity and depth limit.
///
/// ```rust
/// use quadcluster::{Point, QuadTreeBuilder, Rect};
///
/// let mut tree = QuadTreeBuilder::new()
///     .bounds(Rect::new(0.0, 0.0, 1024.0, 768.0))
///     .capacity(8)
///     .max_depth(12)
///     .build::<()>()?;
/// assert!(tree.insert(Point::new(512.0, 384.0)));
/// # Ok::<(), quadcluster::QuadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct QuadTreeBuilder {
    bounds: Option<Rect>,
    config: IndexConfig,
}

impl QuadTreeBuilder {
    /// Create a new builder with the default index configuration.
    pub fn new() -> Self {
        Self {
            bounds: None,
            config: IndexConfig::default(),
        }
    }

    /// Start from the index section of a full configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            bounds: None,
            config: config.index,
        }
    }

    /// Set the region the tree covers.
    pub fn bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn config(mut self, config: IndexConfig) -> Self {
        self.config = config;
        self
    }

    /// Points a node holds before it subdivides.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Depth at which nodes stop subdividing.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Build the quadtree.
    ///
    /// Fails when no bounds were given, when the bounds are non-finite or
    /// have no area, or when the configuration is invalid.
    pub fn build<T>(self) -> Result<QuadTree<T>> {
        let bounds = self
            .bounds
            .ok_or_else(|| QuadError::InvalidConfig("Quadtree bounds are required".to_string()))?;
        validate_rect(&bounds)?;
        QuadTree::with_config(bounds, self.config)
    }
}

impl Default for QuadTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use geo::Point;

    #[test]
    fn test_builder_default() {
        let builder = QuadTreeBuilder::new();
        assert!(builder.bounds.is_none());
        assert_eq!(builder.config, IndexConfig::default());
    }

    #[test]
    fn test_builder_requires_bounds() {
        let err = QuadTreeBuilder::new().build::<()>().unwrap_err();
        assert!(matches!(err, QuadError::InvalidConfig(_)));
    }

    #[test]
    fn test_builder_rejects_degenerate_bounds() {
        let result = QuadTreeBuilder::new()
            .bounds(Rect::new(0.0, 0.0, 0.0, 10.0))
            .build::<()>();
        assert!(matches!(result, Err(QuadError::InvalidInput(_))));
    }

    #[test]
    fn test_builder_rejects_zero_capacity() {
        let result = QuadTreeBuilder::new()
            .bounds(Rect::new(0.0, 0.0, 10.0, 10.0))
            .capacity(0)
            .build::<()>();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_applies_shape() {
        let mut tree = QuadTreeBuilder::new()
            .bounds(Rect::new(0.0, 0.0, 10.0, 10.0))
            .capacity(2)
            .max_depth(1)
            .build::<()>()
            .unwrap();

        for i in 0..9 {
            tree.insert(Point::new(1.0 + i as f64 * 0.1, 1.0));
        }

        let stats = tree.stats();
        assert_eq!(stats.depth, 1);
        assert_eq!(stats.overflow_points, 5);
    }

    #[test]
    fn test_builder_from_config() {
        let config = Config::default()
            .with_index(IndexConfig::default().with_capacity(16))
            .with_grid(GridConfig::new(2, 2));

        let tree: QuadTree<u8> = QuadTreeBuilder::from_config(&config)
            .bounds(Rect::new(0.0, 0.0, 1.0, 1.0))
            .build()
            .unwrap();
        assert_eq!(tree.config().capacity, 16);
    }
}
