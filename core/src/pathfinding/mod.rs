pub mod a_star;
pub mod bfs;
pub mod utils;

// Re-export the public functions
pub use a_star::a_star_find_path;
pub use bfs::bfs_find_path;
pub use utils::{LineIndex, PathResult, START, reconstruct_path};
