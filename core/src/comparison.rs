use crate::algorithm::{Algorithm, find_path};
use crate::line_scale::LineScale;
use crate::pathfinding::{LineIndex, PathResult};
use crate::search_config::SearchConfig;
use serde::Serialize;
use std::time::Instant;
use tracing::info;

/// Targets of the reference comparison table
pub const DEFAULT_CASES: [LineIndex; 5] = [3, 6, -4, 12, -15];

/// One line of the comparison report: one engine run against one target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub target: LineIndex,
    pub target_position: f64,
    pub algorithm: Algorithm,
    pub path_found: bool,
    /// Number of states on the path, start included; 0 when no path was found
    pub path_length: usize,
    pub path: Option<Vec<LineIndex>>,
    pub opened: usize,
    pub visited: usize,
    #[serde(skip)]
    pub duration_ms: f64,
}

impl From<(LineIndex, &LineScale, Algorithm, PathResult, f64)> for ComparisonRow {
    fn from(
        (target, scale, algorithm, (path, opened, visited), duration_ms): (
            LineIndex,
            &LineScale,
            Algorithm,
            PathResult,
            f64,
        ),
    ) -> Self {
        Self {
            target,
            target_position: scale.position(target),
            algorithm,
            path_found: path.is_some(),
            path_length: path.as_ref().map(|p| p.len()).unwrap_or(0),
            path,
            opened,
            visited,
            duration_ms,
        }
    }
}

/// Runs BFS and then A* against `target` with the same configuration.
pub fn compare_target(target: LineIndex, scale: &LineScale, config: &SearchConfig) -> Vec<ComparisonRow> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let search_timer = Instant::now();
            let result = find_path(algorithm, target, config);
            let duration_ms = search_timer.elapsed().as_secs_f64() * 1000.0;
            ComparisonRow::from((target, scale, algorithm, result, duration_ms))
        })
        .collect()
}

pub fn compare_targets(
    targets: &[LineIndex],
    scale: &LineScale,
    config: &SearchConfig,
) -> Vec<ComparisonRow> {
    info!(
        targets = targets.len(),
        node_limit = config.node_limit,
        "running comparison"
    );
    targets
        .iter()
        .flat_map(|&target| compare_target(target, scale, config))
        .collect()
}

/// `(target, bfs_visited, a_star_visited)` for every target where both engines found a path.
///
/// Targets keep the order in which they first appear in `rows`.
pub fn visited_savings(rows: &[ComparisonRow]) -> Vec<(LineIndex, usize, usize)> {
    let mut savings = Vec::new();

    for bfs_row in rows
        .iter()
        .filter(|row| row.algorithm == Algorithm::Bfs && row.path_found)
    {
        let a_star_row = rows.iter().find(|row| {
            row.algorithm == Algorithm::AStar && row.target == bfs_row.target && row.path_found
        });

        if let Some(a_star_row) = a_star_row {
            if savings.iter().any(|&(target, _, _)| target == bfs_row.target) {
                continue;
            }
            savings.push((bfs_row.target, bfs_row.visited, a_star_row.visited));
        }
    }

    savings
}
