use crate::search_config::ExpansionOrder;
use rustc_hash::FxHashMap;

/// A state on the unbounded integer line
pub type LineIndex = i64;

/// `(path, opened, visited)`; `path` is `None` when the node limit ran out first
pub type PathResult = (Option<Vec<LineIndex>>, usize, usize);

/// Every search starts here
pub const START: LineIndex = 0;

/// Both engines answer a start == target query the same way.
pub fn trivial_result() -> PathResult {
    (Some(vec![START]), 0, 1)
}

pub fn successors(index: LineIndex, order: ExpansionOrder) -> [LineIndex; 2] {
    match order {
        ExpansionOrder::Forward => [index + 1, index - 1],
        ExpansionOrder::Backward => [index - 1, index + 1],
    }
}

/// Exact remaining cost on a unit-cost line, which makes it admissible and consistent.
pub fn manhattan_distance(index: LineIndex, target: LineIndex) -> usize {
    target.abs_diff(index) as usize
}

/// Walks parent links back from `target` to `start` and returns the path in travel order.
///
/// `start` has no entry in `parent_map`.
pub fn reconstruct_path(
    parent_map: &FxHashMap<LineIndex, LineIndex>,
    start: LineIndex,
    target: LineIndex,
) -> Vec<LineIndex> {
    let mut path = Vec::new();
    let mut current_node = target;

    while current_node != start {
        path.push(current_node);
        current_node = parent_map[&current_node];
    }

    path.push(start);
    path.reverse();
    path
}
