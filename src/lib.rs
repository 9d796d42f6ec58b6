//! Point quadtree with half-open range queries and grid clustering.
//!
//! ## Features
//! - **Range queries**: rectangular queries pruned by quadrant, with half-open
//!   containment (points on a rectangle's right or bottom edge are outside)
//! - **Bounded depth**: nodes past a configurable depth overflow instead of
//!   splitting, so duplicate coordinates cannot grow the tree without limit
//! - **Grid clustering**: one weighted centroid per non-empty cell of a
//!   viewport lattice, for drawing markers at low zoom
//! - **Payloads**: attach an id or source coordinate to every point
//!
//! ```rust
//! use quadcluster::{GridClusterer, Point, QuadTree, Rect};
//!
//! let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let mut tree: QuadTree = QuadTree::new(viewport);
//! for i in 0..10 {
//!     tree.insert(Point::new(5.0 + i as f64, 5.0));
//! }
//!
//! let nearby = tree.query(&Rect::new(0.0, 0.0, 10.0, 10.0));
//! assert_eq!(nearby.len(), 5);
//!
//! let clusters = GridClusterer::default().cluster(&tree, &viewport);
//! assert_eq!(clusters.len(), 1);
//! assert_eq!(clusters[0].count, 10);
//! ```

pub mod builder;
pub mod cluster;
pub mod config;
pub mod error;
pub mod index;
pub mod space;
pub mod validation;

pub use builder::QuadTreeBuilder;
pub use cluster::{GridClusterer, cluster};
pub use config::{Config, GridConfig, IndexConfig};
pub use error::{QuadError, Result};
pub use index::QuadTree;
pub use space::{CoordinateSpace, Identity, LinearSpace};

pub use geo::Point;
pub use quadcluster_types::bbox::Rect;
pub use quadcluster_types::cluster::Cluster;
pub use quadcluster_types::point::IndexedPoint;
pub use quadcluster_types::stats::IndexStats;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{QuadError, QuadTree, QuadTreeBuilder, Result};

    pub use crate::{Cluster, GridClusterer, cluster};

    pub use crate::{IndexedPoint, Point, Rect};

    pub use crate::{Config, GridConfig, IndexConfig};

    pub use crate::{CoordinateSpace, Identity, LinearSpace};
}
