mod state;

use super::utils::{LineIndex, PathResult, START, trivial_result};
use crate::search_config::SearchConfig;
use state::BfsState;
use tracing::debug;

/// Breadth-first search from [`START`] to `target`.
///
/// Returns `(path, opened, visited)`. The path is `None` only when `config.node_limit`
/// states were visited before the target was discovered; every index is reachable.
pub fn bfs_find_path(target: LineIndex, config: &SearchConfig) -> PathResult {
    if target == START {
        return trivial_result();
    }

    let mut bfs_state = BfsState::new(START);
    let (path, opened, visited) = bfs_state.find_path_to_target(target, config);

    debug!(
        target_index = target,
        order = %config.expansion_order,
        found = path.is_some(),
        opened,
        visited,
        "bfs finished"
    );
    (path, opened, visited)
}
