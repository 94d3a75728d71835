use linepath_core::{Algorithm, ExpansionOrder, LineIndex, SearchConfig, find_path};
use std::time::Instant;

use crate::args::{AStarArgs, BfsArgs};

/// Target shown by the demonstration subcommands when none is given
pub const DEMO_TARGET: LineIndex = 6;
/// Second BFS demonstration: a target behind the origin, searched backward first
pub const DEMO_BACKWARD_TARGET: LineIndex = -4;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub algorithm: Algorithm,
    pub target: LineIndex,
    pub config: SearchConfig,
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub request: SearchRequest,
    pub path: Option<Vec<LineIndex>>,
    pub opened: usize,
    pub visited: usize,
    pub search_duration: f64,
}

pub fn create_bfs_requests(args: &BfsArgs) -> Vec<SearchRequest> {
    let request = |target, expansion_order| SearchRequest {
        algorithm: Algorithm::Bfs,
        target,
        config: SearchConfig::new(args.limit, expansion_order),
    };

    match args.target {
        Some(target) => vec![request(target, args.expand_first.unwrap_or_default())],
        None => vec![
            request(DEMO_TARGET, args.expand_first.unwrap_or_default()),
            request(DEMO_BACKWARD_TARGET, ExpansionOrder::Backward),
        ],
    }
}

pub fn create_a_star_request(args: &AStarArgs) -> SearchRequest {
    SearchRequest {
        algorithm: Algorithm::AStar,
        target: args.target.unwrap_or(DEMO_TARGET),
        config: SearchConfig::default().with_node_limit(args.limit),
    }
}

pub fn execute_search(request: SearchRequest) -> SearchResult {
    let search_timer = Instant::now();
    let (path, opened, visited) = find_path(request.algorithm, request.target, &request.config);
    let search_duration = search_timer.elapsed().as_secs_f64();

    SearchResult {
        request,
        path,
        opened,
        visited,
        search_duration,
    }
}
