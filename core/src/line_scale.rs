use crate::pathfinding::LineIndex;
use serde::{Deserialize, Serialize};

/// Maps line indices to physical positions: `origin + index * step`
///
/// Positions are rounded to 4 decimal digits so that table output stays stable
/// (`9.2 + 3 * 0.25` prints as `9.95`, not `9.950000000000001`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineScale {
    pub origin: f64,
    pub step: f64,
}

impl LineScale {
    pub fn new(origin: f64, step: f64) -> Self {
        Self { origin, step }
    }

    pub fn position(&self, index: LineIndex) -> f64 {
        round_to_4_decimals(self.origin + index as f64 * self.step)
    }

    pub fn positions(&self, path: &[LineIndex]) -> Vec<f64> {
        path.iter().map(|&index| self.position(index)).collect()
    }
}

impl Default for LineScale {
    fn default() -> Self {
        Self {
            origin: 9.2,
            step: 0.25,
        }
    }
}

fn round_to_4_decimals(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
