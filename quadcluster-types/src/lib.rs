//! # quadcluster-types
//!
//! Core geometry and result types for the quadcluster spatial index.
//!
//! - **Rectangles**: `Rect`, with half-open point containment
//! - **Points**: `IndexedPoint`, a position with a caller payload
//! - **Results**: `Cluster`, `IndexStats`
//!
//! All types are serializable with Serde and built on top of the `geo` crate's
//! geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use quadcluster_types::bbox::Rect;
//! use geo::Point;
//!
//! let viewport = Rect::new(0.0, 0.0, 320.0, 480.0);
//! assert!(viewport.contains(&Point::new(0.0, 0.0)));
//! assert!(!viewport.contains(&Point::new(320.0, 10.0)));
//! ```

pub mod bbox;
pub mod cluster;
pub mod point;
pub mod stats;
