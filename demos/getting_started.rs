use quadcluster::{
    Config, CoordinateSpace, GridClusterer, LinearSpace, Point, QuadTreeBuilder, Rect,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug to see detailed logs)
    env_logger::init();

    println!("=== quadcluster - Getting Started ===\n");

    // The visible map region (lon/lat) shown on a 390x844 view
    let region = Rect::new(-122.45, 37.75, 0.07, 0.06);
    let view = Rect::new(0.0, 0.0, 390.0, 844.0);
    let space = LinearSpace::new(region, view);

    let config = Config::from_json(r#"{ "grid": { "columns": 4, "rows": 6 } }"#)?;
    let mut tree = QuadTreeBuilder::from_config(&config)
        .bounds(view)
        .build::<&str>()?;

    // === INSERTION ===
    println!("1. Inserting markers");
    println!("--------------------");

    let markers = [
        ("Ferry Building", Point::new(-122.3937, 37.7955)),
        ("Coit Tower", Point::new(-122.4058, 37.8024)),
        ("Union Square", Point::new(-122.4075, 37.7880)),
        ("Civic Center", Point::new(-122.4177, 37.7793)),
        ("City Hall", Point::new(-122.4192, 37.7793)),
        ("Dolores Park", Point::new(-122.4270, 37.7596)),
        ("Golden Gate Bridge", Point::new(-122.4783, 37.8199)),
    ];

    for (name, coordinate) in markers {
        if tree.insert_projected_with(&space, coordinate, name) {
            println!("   + {}", name);
        } else {
            println!("   - {} is outside the visible region", name);
        }
    }
    println!();

    // === RANGE QUERY ===
    println!("2. Range query around the pointer");
    println!("---------------------------------");

    let pointer = space.to_plane(Point::new(-122.418, 37.779));
    let query = Rect::new(pointer.x() - 50.0, pointer.y() - 50.0, 100.0, 100.0);
    for item in tree.query_items(&query) {
        println!("   {}", item.data);
    }
    println!();

    // === CLUSTERING ===
    println!("3. Clusters");
    println!("-----------");

    let clusterer = GridClusterer::from_config(&config.grid)?;
    for cluster in clusterer.cluster_in(&tree, &view, &space) {
        println!(
            "   {:>2} marker(s) at ({:.4}, {:.4})",
            cluster.count,
            cluster.coordinate.x(),
            cluster.coordinate.y()
        );
    }
    println!();

    let stats = tree.stats();
    println!(
        "Index: {} points in {} nodes, depth {}",
        stats.points, stats.nodes, stats.depth
    );

    Ok(())
}
