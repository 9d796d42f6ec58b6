//! Point quadtree with half-open rectangular range queries.
//!
//! Each node covers a fixed rectangle and stores up to `capacity` points of
//! its own. The first insertion past capacity splits the node into four
//! quadrants; later points descend into exactly one of them while the points
//! already held stay where they are. Nodes at `max_depth` never split and
//! keep accepting points instead, which bounds the tree height even when
//! many identical coordinates are inserted.
//!
//! # Example
//!
//! ```rust
//! use quadcluster::{Point, QuadTree, Rect};
//!
//! let mut tree: QuadTree = QuadTree::new(Rect::new(0.0, 0.0, 10.0, 10.0));
//! assert!(tree.insert(Point::new(1.0, 1.0)));
//! assert!(tree.insert(Point::new(2.0, 2.0)));
//! assert!(!tree.insert(Point::new(10.0, 3.0)));
//!
//! // (2, 2) sits on the excluded edges of the query rectangle
//! let hits = tree.query(&Rect::new(0.0, 0.0, 2.0, 2.0));
//! assert_eq!(hits, vec![Point::new(1.0, 1.0)]);
//! ```

use crate::config::{DEFAULT_CAPACITY, IndexConfig};
use crate::error::Result;
use crate::space::CoordinateSpace;
use geo::Point;
use quadcluster_types::bbox::Rect;
use quadcluster_types::point::IndexedPoint;
use quadcluster_types::stats::IndexStats;
use smallvec::SmallVec;

type Children<T> = Box<[Node<T>; 4]>;

#[derive(Debug, Clone)]
struct Node<T> {
    bounds: Rect,
    depth: usize,
    items: SmallVec<[IndexedPoint<T>; DEFAULT_CAPACITY]>,
    /// Top-left, top-right, bottom-left, bottom-right.
    children: Option<Children<T>>,
}

impl<T> Node<T> {
    fn new(bounds: Rect, depth: usize) -> Self {
        Self {
            bounds,
            depth,
            items: SmallVec::new(),
            children: None,
        }
    }

    fn subdivide(bounds: Rect, depth: usize) -> Children<T> {
        log::trace!("Subdividing node at depth {} covering {:?}", depth, bounds);
        let [tl, tr, bl, br] = bounds.quadrants();
        Box::new([
            Node::new(tl, depth + 1),
            Node::new(tr, depth + 1),
            Node::new(bl, depth + 1),
            Node::new(br, depth + 1),
        ])
    }

    fn push_children<'a>(&'a self, stack: &mut Vec<&'a Node<T>>) {
        if let Some(children) = &self.children {
            stack.extend(children.iter().rev());
        }
    }
}

/// A quadtree over a fixed bounding rectangle.
///
/// `T` is an optional payload stored next to each point; the plain
/// `insert`/`query` API uses `T = ()`.
#[derive(Debug, Clone)]
pub struct QuadTree<T = ()> {
    root: Node<T>,
    config: IndexConfig,
    len: usize,
    rejected: usize,
}

impl<T> QuadTree<T> {
    /// Create an empty tree over `bounds` with the default configuration.
    pub fn new(bounds: Rect) -> Self {
        Self::build(bounds, IndexConfig::default())
    }

    /// Create an empty tree with a custom capacity and depth cap.
    pub fn with_config(bounds: Rect, config: IndexConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(bounds, config))
    }

    fn build(bounds: Rect, config: IndexConfig) -> Self {
        if bounds.is_empty() {
            log::debug!("Creating quadtree over empty bounds {:?}", bounds);
        }

        Self {
            root: Node::new(bounds, 0),
            config,
            len: 0,
            rejected: 0,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.root.bounds
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Number of points stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the root node has split into quadrants.
    pub fn is_subdivided(&self) -> bool {
        self.root.children.is_some()
    }

    /// Insert a point with an attached payload.
    ///
    /// Returns `false`, leaving the tree untouched, when the point lies
    /// outside the tree's bounds under half-open containment.
    pub fn insert_with(&mut self, point: Point, data: T) -> bool {
        if !self.root.bounds.contains(&point) {
            self.rejected += 1;
            log::trace!(
                "Rejecting point ({}, {}) outside {:?}",
                point.x(),
                point.y(),
                self.root.bounds
            );
            return false;
        }

        let capacity = self.config.capacity;
        let max_depth = self.config.max_depth;
        let mut node = &mut self.root;

        loop {
            if node.items.len() < capacity {
                node.items.push(IndexedPoint::new(point, data));
                break;
            }

            if node.depth >= max_depth {
                if node.items.len() == capacity {
                    log::warn!(
                        "Depth limit {} reached at {:?}; storing points past capacity",
                        max_depth,
                        node.bounds
                    );
                }
                node.items.push(IndexedPoint::new(point, data));
                break;
            }

            let (bounds, depth) = (node.bounds, node.depth);
            let children = node
                .children
                .get_or_insert_with(|| Node::subdivide(bounds, depth));

            match children.iter().position(|child| child.bounds.contains(&point)) {
                Some(quadrant) => node = &mut children[quadrant],
                None => {
                    // The quadrants share exact edges with their parent, so a
                    // point inside the parent always lands in one of them.
                    debug_assert!(false, "no quadrant of {:?} contains {:?}", bounds, point);
                    log::error!(
                        "No quadrant of {:?} accepted point ({}, {}); point dropped",
                        bounds,
                        point.x(),
                        point.y()
                    );
                    return true;
                }
            }
        }

        self.len += 1;
        true
    }

    /// Map a domain coordinate into the tree's plane, then insert it.
    pub fn insert_projected_with<S>(&mut self, space: &S, domain: Point, data: T) -> bool
    where
        S: CoordinateSpace + ?Sized,
    {
        self.insert_with(space.to_plane(domain), data)
    }

    /// All stored items whose point lies in `range` (half-open).
    ///
    /// Items held by a node come before those of its quadrants, and
    /// quadrants are visited top-left, top-right, bottom-left, bottom-right.
    /// Callers should rely only on the returned set, not its order.
    pub fn query_items(&self, range: &Rect) -> Vec<&IndexedPoint<T>> {
        let mut results = Vec::new();
        self.visit(range, |item| results.push(item));
        results
    }

    /// Positions of all stored points that lie in `range`.
    pub fn query(&self, range: &Rect) -> Vec<Point> {
        let mut results = Vec::new();
        self.visit(range, |item| results.push(item.point));
        results
    }

    /// Number of stored points that lie in `range`.
    pub fn count(&self, range: &Rect) -> usize {
        let mut count = 0;
        self.visit(range, |_| count += 1);
        count
    }

    fn visit<'a, F>(&'a self, range: &Rect, mut f: F)
    where
        F: FnMut(&'a IndexedPoint<T>),
    {
        if range.has_nan() {
            log::warn!("Rejecting range query with NaN coordinates");
            return;
        }

        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if !node.bounds.intersects(range) {
                continue;
            }

            node.items
                .iter()
                .filter(|item| range.contains(&item.point))
                .for_each(&mut f);

            node.push_children(&mut stack);
        }
    }

    /// Rectangles of every node, parents before their quadrants.
    ///
    /// Useful for drawing how the plane has been partitioned.
    pub fn node_bounds(&self) -> Vec<Rect> {
        let mut bounds = Vec::new();
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            bounds.push(node.bounds);
            node.push_children(&mut stack);
        }
        bounds
    }

    /// Iterate over every stored item in traversal order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: vec![&self.root],
            current: Default::default(),
        }
    }

    pub fn stats(&self) -> IndexStats {
        let capacity = self.config.capacity;
        let mut stats = IndexStats::new();
        let mut stack = vec![&self.root];

        while let Some(node) = stack.pop() {
            let held = node.items.len();
            stats.record_node(node.depth, held, held.saturating_sub(capacity));
            node.push_children(&mut stack);
        }

        stats.record_rejected(self.rejected);
        stats
    }
}

impl QuadTree<()> {
    /// Insert a bare point. See [`QuadTree::insert_with`].
    pub fn insert(&mut self, point: Point) -> bool {
        self.insert_with(point, ())
    }

    /// Insert every point, returning how many were inside the bounds.
    pub fn insert_all<I>(&mut self, points: I) -> usize
    where
        I: IntoIterator<Item = Point>,
    {
        points.into_iter().filter(|p| self.insert(*p)).count()
    }

    pub fn insert_projected<S>(&mut self, space: &S, domain: Point) -> bool
    where
        S: CoordinateSpace + ?Sized,
    {
        self.insert_projected_with(space, domain, ())
    }
}

impl<T> Extend<IndexedPoint<T>> for QuadTree<T> {
    fn extend<I: IntoIterator<Item = IndexedPoint<T>>>(&mut self, iter: I) {
        for item in iter {
            self.insert_with(item.point, item.data);
        }
    }
}

impl<'a, T> IntoIterator for &'a QuadTree<T> {
    type Item = &'a IndexedPoint<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over all items of a [`QuadTree`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    current: std::slice::Iter<'a, IndexedPoint<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a IndexedPoint<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.next() {
                return Some(item);
            }
            let node = self.stack.pop()?;
            node.push_children(&mut self.stack);
            self.current = node.items.iter();
        }
    }
}
