use super::assert_connected;
use linepath_core::{ExpansionOrder, SearchConfig, bfs_find_path};

fn forward() -> SearchConfig {
    SearchConfig::default()
}

fn backward() -> SearchConfig {
    SearchConfig::default().with_expansion_order(ExpansionOrder::Backward)
}

#[test]
fn test_bfs_target_at_origin() {
    let (path, opened, visited) = bfs_find_path(0, &forward());

    assert_eq!(path, Some(vec![0]));
    assert_eq!(opened, 0);
    assert_eq!(visited, 1);
}

#[test]
fn test_bfs_reference_example_forward() {
    let (path, opened, visited) = bfs_find_path(6, &forward());

    assert_eq!(path, Some(vec![0, 1, 2, 3, 4, 5, 6]));
    assert_eq!(opened, 12);
    assert_eq!(visited, 11);
}

#[test]
fn test_bfs_negative_target_backward_first() {
    let (path, opened, visited) = bfs_find_path(-4, &backward());

    assert_eq!(path, Some(vec![0, -1, -2, -3, -4]));
    assert_eq!(opened, 8);
    assert_eq!(visited, 7);
}

#[test]
fn test_bfs_reference_table_counts() {
    let expected = [
        (1, 2, 2),
        (-1, 3, 2),
        (2, 4, 3),
        (3, 6, 5),
        (-4, 9, 8),
        (12, 24, 23),
        (-15, 31, 30),
    ];

    for (target, expected_opened, expected_visited) in expected {
        let (path, opened, visited) = bfs_find_path(target, &forward());
        assert_connected(&path.unwrap(), target);
        assert_eq!((opened, visited), (expected_opened, expected_visited), "k = {}", target);
    }
}

#[test]
fn test_bfs_expansion_order_changes_counts_not_path() {
    let (forward_path, forward_opened, forward_visited) = bfs_find_path(6, &forward());
    let (backward_path, backward_opened, backward_visited) = bfs_find_path(6, &backward());

    assert_eq!(forward_path, backward_path);
    assert_eq!((forward_opened, forward_visited), (12, 11));
    assert_eq!((backward_opened, backward_visited), (13, 12));
}

#[test]
fn test_bfs_node_limit_exhausted() {
    let config = forward().with_node_limit(3);
    let (path, opened, visited) = bfs_find_path(6, &config);

    assert!(path.is_none());
    assert_eq!(opened, 5);
    assert_eq!(visited, 3);
}

#[test]
fn test_bfs_zero_limit_visits_nothing() {
    let config = forward().with_node_limit(0);
    let (path, opened, visited) = bfs_find_path(5, &config);

    assert!(path.is_none());
    assert_eq!(opened, 1); // the start state is counted as opened up front
    assert_eq!(visited, 0);
}

#[test]
fn test_bfs_origin_ignores_limit() {
    let config = forward().with_node_limit(0);
    assert_eq!(bfs_find_path(0, &config), (Some(vec![0]), 0, 1));
}
