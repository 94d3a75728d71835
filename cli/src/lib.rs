pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod error;
pub mod export;
pub mod json_output;
pub mod logging;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use args::Args;
pub use error::ReportError;
pub use utils::{format_number, format_path_length, format_positions};
