use linepath_core::{Algorithm, LineScale, SearchConfig, compare_targets};

fn main() {
    // Distances grow by 10x so the BFS/A* gap is easy to read
    let targets = [10, -100, 1_000, -10_000, 50_000];
    let config = SearchConfig::default();

    println!("🚀 Running BFS vs A* on the integer line...");
    println!("Node limit: {}\n", config.node_limit);

    let rows = compare_targets(&targets, &LineScale::default(), &config);

    for pair in rows.chunks(2) {
        let [bfs, a_star] = pair else { continue };
        debug_assert_eq!(bfs.algorithm, Algorithm::Bfs);

        println!("k = {}:", bfs.target);
        for row in [bfs, a_star] {
            println!(
                "  {:<4} visited {:>7}, opened {:>7} in {:.3}ms",
                row.algorithm.label(),
                row.visited,
                row.opened,
                row.duration_ms
            );
        }

        if a_star.visited > 0 {
            println!(
                "  → BFS visited {:.2}x the states A* did",
                bfs.visited as f64 / a_star.visited as f64
            );
        }
    }

    println!("\n✅ Benchmark completed!");
}
