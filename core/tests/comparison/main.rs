use linepath_core::comparison::visited_savings;
use linepath_core::{
    Algorithm, DEFAULT_CASES, ExpansionOrder, LineScale, SearchConfig, compare_target,
    compare_targets,
};

#[test]
fn test_compare_target_runs_bfs_then_a_star() {
    let rows = compare_target(6, &LineScale::default(), &SearchConfig::default());

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].algorithm, Algorithm::Bfs);
    assert_eq!(rows[1].algorithm, Algorithm::AStar);

    for row in &rows {
        assert_eq!(row.target, 6);
        assert_eq!(row.target_position, 10.7);
        assert!(row.path_found);
        assert_eq!(row.path_length, 7);
    }

    assert_eq!((rows[0].opened, rows[0].visited), (12, 11));
    assert_eq!((rows[1].opened, rows[1].visited), (7, 7));
}

#[test]
fn test_reference_table() {
    let rows = compare_targets(&DEFAULT_CASES, &LineScale::default(), &SearchConfig::default());

    let summary: Vec<_> = rows
        .iter()
        .map(|row| {
            (
                row.target,
                row.target_position,
                row.algorithm.label(),
                row.path_length,
                row.opened,
                row.visited,
            )
        })
        .collect();

    assert_eq!(
        summary,
        vec![
            (3, 9.95, "BFS", 4, 6, 5),
            (3, 9.95, "A*", 4, 4, 4),
            (6, 10.7, "BFS", 7, 12, 11),
            (6, 10.7, "A*", 7, 7, 7),
            (-4, 8.2, "BFS", 5, 9, 8),
            (-4, 8.2, "A*", 5, 5, 5),
            (12, 12.2, "BFS", 13, 24, 23),
            (12, 12.2, "A*", 13, 13, 13),
            (-15, 5.45, "BFS", 16, 31, 30),
            (-15, 5.45, "A*", 16, 16, 16),
        ]
    );
}

#[test]
fn test_backward_order_only_changes_bfs_rows() {
    let config = SearchConfig::default().with_expansion_order(ExpansionOrder::Backward);
    let rows = compare_target(-4, &LineScale::default(), &config);

    assert_eq!((rows[0].opened, rows[0].visited), (8, 7));
    assert_eq!((rows[1].opened, rows[1].visited), (5, 5));
}

#[test]
fn test_limit_exhaustion_is_reported_per_row() {
    let config = SearchConfig::default().with_node_limit(3);
    let rows = compare_target(6, &LineScale::default(), &config);

    for row in &rows {
        assert!(!row.path_found);
        assert_eq!(row.path_length, 0);
        assert_eq!(row.path, None);
        assert_eq!(row.visited, 3);
    }
    assert!(visited_savings(&rows).is_empty());
}

#[test]
fn test_visited_savings_for_reference_cases() {
    let rows = compare_targets(&DEFAULT_CASES, &LineScale::default(), &SearchConfig::default());

    assert_eq!(
        visited_savings(&rows),
        vec![(3, 5, 4), (6, 11, 7), (-4, 8, 5), (12, 23, 13), (-15, 30, 16)]
    );
}

#[test]
fn test_rows_serialize_without_timing() {
    let rows = compare_target(1, &LineScale::default(), &SearchConfig::default());
    let json = serde_json::to_value(&rows[1]).unwrap();

    assert_eq!(json["algorithm"], "astar");
    assert_eq!(json["target_position"], 9.45);
    assert_eq!(json["path"], serde_json::json!([0, 1]));
    assert!(json.get("duration_ms").is_none());
}
