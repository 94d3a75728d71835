use clap::{Args as ClapArgs, Parser, Subcommand};
use linepath_core::LineIndex;
use linepath_core::search_config::{DEFAULT_NODE_LIMIT, ExpansionOrder};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "linepath")]
#[command(about = "Compare BFS and A* searches on an unbounded integer line")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Physical position of index 0
    #[arg(
        long,
        global = true,
        value_name = "POSITION",
        default_value_t = 9.2,
        allow_negative_numbers = true
    )]
    pub origin: f64,

    /// Physical distance between neighbouring indices
    #[arg(
        long,
        global = true,
        value_name = "DISTANCE",
        default_value_t = 0.25,
        allow_negative_numbers = true
    )]
    pub step: f64,

    /// Unit label printed next to positions
    #[arg(long, global = true, default_value = "cm")]
    pub unit: String,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose mode - show timings and debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run breadth-first search (defaults to the k=6 and k=-4 examples)
    Bfs(BfsArgs),
    /// Run A* search (defaults to the k=6 example)
    #[command(name = "astar", alias = "a-star")]
    AStar(AStarArgs),
    /// Run both searches over several targets and print a comparison table
    Compare(CompareArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct BfsArgs {
    /// Target index (steps away from the origin)
    #[arg(short = 'k', long, value_name = "INDEX", allow_negative_numbers = true)]
    pub target: Option<LineIndex>,

    /// Successor order: forward (+1 first) or backward (-1 first)
    #[arg(short, long, value_name = "ORDER")]
    pub expand_first: Option<ExpansionOrder>,

    /// Give up after visiting this many states
    #[arg(short, long, value_name = "COUNT", default_value_t = DEFAULT_NODE_LIMIT)]
    pub limit: usize,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct AStarArgs {
    /// Target index (steps away from the origin)
    #[arg(short = 'k', long, value_name = "INDEX", allow_negative_numbers = true)]
    pub target: Option<LineIndex>,

    /// Give up after visiting this many states
    #[arg(short, long, value_name = "COUNT", default_value_t = DEFAULT_NODE_LIMIT)]
    pub limit: usize,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CompareArgs {
    /// Target indices (defaults to 3 6 -4 12 -15)
    #[arg(value_name = "INDEX", allow_negative_numbers = true)]
    pub targets: Vec<LineIndex>,

    /// Successor order used by BFS
    #[arg(short, long, value_name = "ORDER", default_value = "forward")]
    pub expand_first: ExpansionOrder,

    /// Give up after visiting this many states
    #[arg(short, long, value_name = "COUNT", default_value_t = DEFAULT_NODE_LIMIT)]
    pub limit: usize,

    /// Also write the table as CSV to this file
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Print results as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
