use quadcluster::{GridClusterer, IndexConfig, Point, QuadTree, Rect, cluster};

/// Test 1: Large dataset stress test
#[test]
fn test_large_dataset_insertion() {
    let bounds = Rect::new(0.0, 0.0, 1_000.0, 1_000.0);
    let mut tree: QuadTree = QuadTree::new(bounds);

    for i in 0..10_000 {
        let x = (i % 100) as f64 * 10.0 + 0.5;
        let y = (i / 100) as f64 * 10.0 + 0.5;
        assert!(tree.insert(Point::new(x, y)), "Failed to insert point {}", i);
    }

    assert_eq!(tree.len(), 10_000);
    assert_eq!(tree.count(&bounds), 10_000);
    assert_eq!(tree.count(&Rect::new(0.0, 0.0, 100.0, 100.0)), 100);
}

/// Test 2: Many copies of one coordinate must terminate
#[test]
fn test_duplicate_coordinates_terminate() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut tree: QuadTree = QuadTree::new(Rect::new(0.0, 0.0, 1.0, 1.0));
    for _ in 0..5_000 {
        assert!(tree.insert(Point::new(0.25, 0.75)));
    }

    let stats = tree.stats();
    assert_eq!(stats.points, 5_000);
    assert!(stats.depth <= IndexConfig::default().max_depth);
    assert!(stats.overflow_points > 0);
    assert_eq!(tree.query(&Rect::new(0.2, 0.7, 0.1, 0.1)).len(), 5_000);
}

/// Test 3: Extreme coordinate values
#[test]
fn test_extreme_coordinates() {
    let bounds = Rect::new(-1e300, -1e300, 2e300, 2e300);
    let mut tree: QuadTree = QuadTree::new(bounds);

    assert!(tree.insert(Point::new(-1e300, -1e300)));
    assert!(tree.insert(Point::new(0.0, 0.0)));
    assert!(tree.insert(Point::new(9e299, -9e299)));
    assert!(!tree.insert(Point::new(1e300, 0.0)));

    assert_eq!(tree.count(&bounds), 3);
}

/// Test 4: Tiny bounds near float resolution
#[test]
fn test_tiny_bounds() {
    let bounds = Rect::new(1.0, 1.0, 1e-12, 1e-12);
    let mut tree: QuadTree = QuadTree::new(bounds);

    for i in 0..100 {
        let offset = (i % 10) as f64 * 1e-13;
        assert!(tree.insert(Point::new(1.0 + offset, 1.0 + offset)));
    }
    assert_eq!(tree.count(&bounds), 100);
}

/// Test 5: Empty queries
#[test]
fn test_empty_tree_queries() {
    let tree: QuadTree = QuadTree::new(Rect::new(0.0, 0.0, 10.0, 10.0));

    assert!(tree.query(&Rect::new(0.0, 0.0, 10.0, 10.0)).is_empty());
    assert!(tree.query(&Rect::new(-5.0, -5.0, 100.0, 100.0)).is_empty());
    assert!(cluster(&tree, &tree.bounds(), 4, 4).is_empty());
}

/// Test 6: Zero-area query rectangles hold nothing
#[test]
fn test_zero_area_query() {
    let mut tree: QuadTree = QuadTree::new(Rect::new(0.0, 0.0, 10.0, 10.0));
    tree.insert(Point::new(5.0, 5.0));

    assert!(tree.query(&Rect::new(5.0, 5.0, 0.0, 0.0)).is_empty());
    assert!(tree.query(&Rect::new(5.0, 0.0, 0.0, 10.0)).is_empty());
}

/// Test 7: Points exactly on the tree's split lines
#[test]
fn test_points_on_split_lines() {
    let bounds = Rect::new(0.0, 0.0, 8.0, 8.0);
    let mut tree: QuadTree = QuadTree::new(bounds);

    let on_lines: Vec<Point> = [0.0, 2.0, 4.0, 6.0]
        .iter()
        .flat_map(|&x| [0.0, 2.0, 4.0, 6.0].map(|y| Point::new(x, y)))
        .collect();
    for p in &on_lines {
        assert!(tree.insert(*p));
    }

    for p in &on_lines {
        let cell = Rect::new(p.x(), p.y(), 2.0, 2.0);
        assert_eq!(tree.query(&cell), vec![*p], "cell at {:?}", p);
    }
}

/// Test 8: Clustering a viewport larger than the tree
#[test]
fn test_cluster_viewport_larger_than_bounds() {
    let mut tree: QuadTree = QuadTree::new(Rect::new(0.0, 0.0, 10.0, 10.0));
    tree.insert_all([Point::new(1.0, 1.0), Point::new(9.0, 9.0)]);

    let clusters = GridClusterer::new(2, 2)
        .unwrap()
        .cluster(&tree, &Rect::new(-10.0, -10.0, 40.0, 40.0));
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].count, 2);
    assert_eq!(clusters[0].coordinate, Point::new(5.0, 5.0));
}
