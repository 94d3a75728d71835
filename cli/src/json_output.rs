use linepath_core::{ComparisonRow, ExpansionOrder, LineIndex, LineScale};
use serde::Serialize;

use crate::error::ReportError;

#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub query: JsonQuery<'a>,
    pub results: &'a [ComparisonRow],
    pub stats: JsonStats,
}

#[derive(Serialize)]
pub struct JsonQuery<'a> {
    pub targets: &'a [LineIndex],
    pub options: JsonOptions<'a>,
}

#[derive(Serialize)]
pub struct JsonOptions<'a> {
    pub node_limit: usize,
    pub expansion_order: ExpansionOrder,
    pub origin: f64,
    pub step: f64,
    pub unit: &'a str,
}

#[derive(Serialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub nodes_visited: usize,
    pub nodes_opened: usize,
}

pub fn create_json_output<'a>(
    targets: &'a [LineIndex],
    rows: &'a [ComparisonRow],
    node_limit: usize,
    expansion_order: ExpansionOrder,
    scale: &LineScale,
    unit: &'a str,
) -> JsonOutput<'a> {
    let search_time_ms: f64 = rows.iter().map(|row| row.duration_ms).sum();

    JsonOutput {
        query: JsonQuery {
            targets,
            options: JsonOptions {
                node_limit,
                expansion_order,
                origin: scale.origin,
                step: scale.step,
                unit,
            },
        },
        results: rows,
        stats: JsonStats {
            search_time_ms: search_time_ms as u64,
            nodes_visited: rows.iter().map(|row| row.visited).sum(),
            nodes_opened: rows.iter().map(|row| row.opened).sum(),
        },
    }
}

pub fn print_json_output(json_output: &JsonOutput) -> Result<(), ReportError> {
    let json_string = serde_json::to_string_pretty(json_output)?;
    println!("{}", json_string);
    Ok(())
}
