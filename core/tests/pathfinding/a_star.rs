use super::assert_connected;
use linepath_core::{ExpansionOrder, SearchConfig, a_star_find_path};

#[test]
fn test_a_star_target_at_origin() {
    let (path, opened, visited) = a_star_find_path(0, &SearchConfig::default());

    assert_eq!(path, Some(vec![0]));
    assert_eq!(opened, 0);
    assert_eq!(visited, 1);
}

#[test]
fn test_a_star_reference_example() {
    let (path, opened, visited) = a_star_find_path(6, &SearchConfig::default());

    assert_eq!(path, Some(vec![0, 1, 2, 3, 4, 5, 6]));
    assert_eq!(opened, 7);
    assert_eq!(visited, 7);
}

#[test]
fn test_a_star_reference_table_counts() {
    let expected = [
        (1, 2, 2),
        (-1, 2, 2),
        (2, 3, 3),
        (3, 4, 4),
        (-4, 5, 5),
        (12, 13, 13),
        (-15, 16, 16),
    ];

    for (target, expected_opened, expected_visited) in expected {
        let (path, opened, visited) = a_star_find_path(target, &SearchConfig::default());
        assert_connected(&path.unwrap(), target);
        assert_eq!((opened, visited), (expected_opened, expected_visited), "k = {}", target);
    }
}

#[test]
fn test_a_star_ignores_expansion_order() {
    let forward = SearchConfig::default();
    let backward = forward.with_expansion_order(ExpansionOrder::Backward);

    assert_eq!(a_star_find_path(-4, &forward), a_star_find_path(-4, &backward));
}

#[test]
fn test_a_star_node_limit_exhausted() {
    let config = SearchConfig::default().with_node_limit(3);
    let (path, opened, visited) = a_star_find_path(6, &config);

    assert!(path.is_none());
    assert_eq!(opened, 4);
    assert_eq!(visited, 3);
}

#[test]
fn test_a_star_negative_limit_case() {
    let config = SearchConfig::default().with_node_limit(2);
    let (path, opened, visited) = a_star_find_path(-4, &config);

    assert!(path.is_none());
    assert_eq!(opened, 3);
    assert_eq!(visited, 2);
}

#[test]
fn test_a_star_large_target_stays_linear() {
    let (path, opened, visited) = a_star_find_path(-5_000, &SearchConfig::default());

    assert_eq!(path.map(|p| p.len()), Some(5_001));
    assert_eq!(opened, 5_001);
    assert_eq!(visited, 5_001);
}
