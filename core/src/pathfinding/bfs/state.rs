use super::super::utils::{LineIndex, PathResult, reconstruct_path, successors};
use crate::search_config::SearchConfig;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use tracing::trace;

pub struct BfsState {
    start: LineIndex,
    queue: VecDeque<LineIndex>,
    seen: FxHashSet<LineIndex>,
    parent_map: FxHashMap<LineIndex, LineIndex>,
    opened: usize,
    visited: usize,
}

impl BfsState {
    pub fn new(start: LineIndex) -> Self {
        let mut queue = VecDeque::new();
        let mut seen = FxHashSet::default();

        queue.push_back(start);
        seen.insert(start);

        Self {
            start,
            queue,
            seen,
            parent_map: FxHashMap::default(),
            // the start state is already on the frontier
            opened: 1,
            visited: 0,
        }
    }

    /// Runs level-order expansion until `target` is discovered or the node limit is hit.
    ///
    /// The goal test happens when a successor is generated, and that discovery counts as
    /// one extra opened and one extra visited state in the returned counters.
    pub fn find_path_to_target(&mut self, target: LineIndex, config: &SearchConfig) -> PathResult {
        while self.visited < config.node_limit {
            let Some(current) = self.queue.pop_front() else {
                break;
            };
            self.visited += 1;
            trace!(current, visited = self.visited, "bfs expand");

            for neighbor in successors(current, config.expansion_order) {
                if self.seen.contains(&neighbor) {
                    continue;
                }
                self.parent_map.insert(neighbor, current);

                if neighbor == target {
                    let path = reconstruct_path(&self.parent_map, self.start, target);
                    return (Some(path), self.opened + 1, self.visited + 1);
                }

                self.queue.push_back(neighbor);
                self.seen.insert(neighbor);
                self.opened += 1;
            }
        }

        (None, self.opened, self.visited)
    }
}
