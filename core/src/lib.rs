pub mod algorithm;
pub mod comparison;
pub mod line_scale;
pub mod pathfinding;
pub mod search_config;

// Re-export commonly used items
pub use algorithm::{Algorithm, find_path};
pub use comparison::{ComparisonRow, DEFAULT_CASES, compare_target, compare_targets, visited_savings};
pub use line_scale::LineScale;
pub use pathfinding::{LineIndex, PathResult, START, a_star_find_path, bfs_find_path};
pub use search_config::{ExpansionOrder, SearchConfig};
