use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Node-visit cap used when the caller does not pick one
pub const DEFAULT_NODE_LIMIT: usize = 200_000;

/// Order in which BFS generates the two successors of a state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpansionOrder {
    /// `i + 1` before `i - 1`
    #[default]
    Forward,
    /// `i - 1` before `i + 1`
    Backward,
}

impl ExpansionOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpansionOrder::Forward => "forward",
            ExpansionOrder::Backward => "backward",
        }
    }
}

impl FromStr for ExpansionOrder {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "forward" | "right" | "+" => Ok(ExpansionOrder::Forward),
            "backward" | "left" | "-" => Ok(ExpansionOrder::Backward),
            other => Err(format!(
                "Unknown expansion order '{}' (expected 'forward' or 'backward')",
                other
            )),
        }
    }
}

impl fmt::Display for ExpansionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration shared by both search engines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Stop once this many states have been visited
    pub node_limit: usize,
    /// Successor order for BFS (A* always expands `+1` then `-1`)
    pub expansion_order: ExpansionOrder,
}

impl SearchConfig {
    pub fn new(node_limit: usize, expansion_order: ExpansionOrder) -> Self {
        Self {
            node_limit,
            expansion_order,
        }
    }

    pub fn with_node_limit(self, node_limit: usize) -> Self {
        Self { node_limit, ..self }
    }

    pub fn with_expansion_order(self, expansion_order: ExpansionOrder) -> Self {
        Self {
            expansion_order,
            ..self
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            node_limit: DEFAULT_NODE_LIMIT,
            expansion_order: ExpansionOrder::Forward,
        }
    }
}
