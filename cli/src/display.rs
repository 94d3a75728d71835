use linepath_core::comparison::visited_savings;
use linepath_core::ComparisonRow;

use crate::app::LinePathApp;
use crate::colors::ColorScheme;
use crate::search::SearchResult;
use crate::utils::{format_number, format_path_length, format_positions};

pub fn display_search_result(
    result: &SearchResult,
    app: &LinePathApp,
    colors: &ColorScheme,
    verbose: bool,
) {
    let request = &result.request;
    let unit = &app.unit;

    println!(
        "[{}] origin={} {}, step={} {}, target={} {} (k={})",
        colors.algorithm(request.algorithm.label()),
        app.scale.origin,
        unit,
        app.scale.step,
        unit,
        colors.position(&app.scale.position(request.target).to_string()),
        unit,
        colors.index(&request.target.to_string())
    );

    match &result.path {
        Some(path) => {
            println!(
                "Path ({}): {}",
                unit,
                colors.position(&format_positions(&app.scale.positions(path)))
            );
        }
        None => {
            println!(
                "Path ({}): {}",
                unit,
                colors.error(&format!(
                    "none (node limit {} reached)",
                    format_number(request.config.node_limit)
                ))
            );
        }
    }

    println!(
        "Opened nodes: {}, visited nodes: {}",
        colors.count(&result.opened.to_string()),
        colors.count(&result.visited.to_string())
    );

    if verbose {
        display_search_statistics(result, colors);
    }
}

fn display_search_statistics(result: &SearchResult, colors: &ColorScheme) {
    println!(
        "{} Expanded {} states ({} order, limit {}) in {} sec",
        colors.marker("📊"),
        colors.count(&format_number(result.visited)),
        result.request.config.expansion_order,
        format_number(result.request.config.node_limit),
        colors.count(&format!("{:.6}", result.search_duration))
    );
}

pub fn display_comparison_table(rows: &[ComparisonRow], app: &LinePathApp, colors: &ColorScheme) {
    println!(
        "Using origin={} {}, step={} {}\n",
        app.scale.origin, app.unit, app.scale.step, app.unit
    );
    println!(
        "{}",
        colors.header(&format!(
            "| k (steps) | target ({}) | method | path length | opened | visited |",
            app.unit
        ))
    );
    println!(
        "|----------:|{}:|:------:|------------:|-------:|--------:|",
        "-".repeat(app.unit.len() + 10)
    );

    for row in rows {
        println!("{}", format_table_row(row, &app.unit, colors));
    }
}

pub fn format_table_row(row: &ComparisonRow, unit: &str, colors: &ColorScheme) -> String {
    let position_width = unit.len() + 9;
    let path_length = format_path_length(row);

    format!(
        "| {} | {} | {} | {} | {} | {} |",
        colors.index(&format!("{:>9}", row.target)),
        colors.position(&format!(
            "{:>width$}",
            row.target_position,
            width = position_width
        )),
        colors.algorithm(&format!("{:^6}", row.algorithm.label())),
        colors.count(&format!("{:>11}", path_length)),
        colors.count(&format!("{:>6}", row.opened)),
        colors.count(&format!("{:>7}", row.visited))
    )
}

pub fn display_savings(rows: &[ComparisonRow], colors: &ColorScheme) {
    let savings = visited_savings(rows);
    if savings.is_empty() {
        println!(
            "\n{}",
            colors.error("❌ No target was reached by both searches within the node limit")
        );
        return;
    }

    println!();
    for (target, bfs_visited, a_star_visited) in savings {
        let reduction = if bfs_visited > 0 {
            (bfs_visited - a_star_visited.min(bfs_visited)) as f64 / bfs_visited as f64 * 100.0
        } else {
            0.0
        };

        println!(
            "{} k={}: A* visited {} states, BFS visited {} ({}% fewer)",
            colors.marker("📉"),
            colors.index(&target.to_string()),
            colors.count(&format_number(a_star_visited)),
            colors.count(&format_number(bfs_visited)),
            colors.count(&format!("{:.1}", reduction))
        );
    }
}
