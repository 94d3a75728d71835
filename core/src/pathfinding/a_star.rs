use super::utils::{
    LineIndex, PathResult, START, manhattan_distance, reconstruct_path, successors, trivial_result,
};
use crate::search_config::{ExpansionOrder, SearchConfig};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{cmp::Ordering, collections::BinaryHeap};
use tracing::{debug, trace};

/// Frontier entry, ordered by `(f, g, index)` ascending.
///
/// Ties on `f` fall through to `g` and then to the index itself, which keeps the pop
/// order (and therefore the opened/visited counters) fully deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct AStarNode {
    estimated_total: usize,
    cost: usize,
    index: LineIndex,
}

impl AStarNode {
    fn key(&self) -> (usize, usize, LineIndex) {
        (self.estimated_total, self.cost, self.index)
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default)
        other.key().cmp(&self.key())
    }
}

struct AStarState {
    target: LineIndex,
    heap: BinaryHeap<AStarNode>,
    costs: FxHashMap<LineIndex, usize>,
    parent_map: FxHashMap<LineIndex, LineIndex>,
    closed: FxHashSet<LineIndex>,
    opened: usize,
    visited: usize,
}

impl AStarState {
    fn new(start: LineIndex, target: LineIndex) -> Self {
        let mut heap = BinaryHeap::new();
        let mut costs = FxHashMap::default();

        heap.push(AStarNode {
            estimated_total: manhattan_distance(start, target),
            cost: 0,
            index: start,
        });
        costs.insert(start, 0);

        Self {
            target,
            heap,
            costs,
            parent_map: FxHashMap::default(),
            closed: FxHashSet::default(),
            opened: 0,
            visited: 0,
        }
    }

    /// Records `neighbor` if reaching it through `current` is strictly cheaper than
    /// anything seen so far. Stale heap entries are left in place and skipped on pop.
    fn visit_neighbor(&mut self, neighbor: LineIndex, current: LineIndex, current_cost: usize) {
        let new_cost = current_cost + 1;

        if let Some(&existing_cost) = self.costs.get(&neighbor) {
            if new_cost >= existing_cost {
                return;
            }
        }

        self.costs.insert(neighbor, new_cost);
        self.parent_map.insert(neighbor, current);
        self.heap.push(AStarNode {
            estimated_total: new_cost + manhattan_distance(neighbor, self.target),
            cost: new_cost,
            index: neighbor,
        });
        self.opened += 1;
    }

    fn find_path_to_target(&mut self, start: LineIndex, node_limit: usize) -> Option<Vec<LineIndex>> {
        while self.visited < node_limit {
            let Some(AStarNode {
                cost,
                index: current,
                ..
            }) = self.heap.pop()
            else {
                break;
            };

            if !self.closed.insert(current) {
                continue;
            }
            self.visited += 1;
            trace!(current, cost, visited = self.visited, "a* expand");

            if current == self.target {
                return Some(reconstruct_path(&self.parent_map, start, self.target));
            }

            for neighbor in successors(current, ExpansionOrder::Forward) {
                self.visit_neighbor(neighbor, current, cost);
            }
        }

        None
    }
}

/// A* search from [`START`] to `target` with `h(i) = |target - i|`.
///
/// Returns `(path, opened, visited)`. The goal test happens when a state is popped, so
/// the counters are reported as accumulated. `config.expansion_order` is not used.
pub fn a_star_find_path(target: LineIndex, config: &SearchConfig) -> PathResult {
    if target == START {
        return trivial_result();
    }

    let mut a_star_state = AStarState::new(START, target);
    let path = a_star_state.find_path_to_target(START, config.node_limit);

    debug!(
        target_index = target,
        found = path.is_some(),
        opened = a_star_state.opened,
        visited = a_star_state.visited,
        "a* finished"
    );
    (path, a_star_state.opened, a_star_state.visited)
}
