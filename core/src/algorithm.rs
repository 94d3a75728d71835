use crate::pathfinding::{LineIndex, PathResult, a_star_find_path, bfs_find_path};
use crate::search_config::SearchConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bfs,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Bfs, Algorithm::AStar];

    /// Human readable name used in report tables
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::AStar => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Runs the engine selected by `algorithm`.
pub fn find_path(algorithm: Algorithm, target: LineIndex, config: &SearchConfig) -> PathResult {
    match algorithm {
        Algorithm::Bfs => bfs_find_path(target, config),
        Algorithm::AStar => a_star_find_path(target, config),
    }
}
