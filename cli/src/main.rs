use clap::Parser;
use linepath::app::LinePathApp;
use linepath::args::{Command, CompareArgs};
use linepath::colors::ColorScheme;
use linepath::display::{display_comparison_table, display_savings, display_search_result};
use linepath::export::save_csv;
use linepath::json_output::{create_json_output, print_json_output};
use linepath::logging::init_tracing;
use linepath::search::{create_a_star_request, create_bfs_requests, execute_search};
use linepath::{Args, ReportError};
use linepath_core::{DEFAULT_CASES, SearchConfig, compare_targets};

fn main() {
    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color);
    init_tracing(args.verbose);

    let app = match LinePathApp::new(&args) {
        Ok(app) => app,
        Err(error_message) => {
            eprintln!("{}", colors.error(&format!("❌ Error: {}", error_message)));
            std::process::exit(1);
        }
    };

    let outcome = match &args.command {
        Command::Bfs(bfs_args) => {
            let requests = create_bfs_requests(bfs_args);
            for (i, request) in requests.into_iter().enumerate() {
                if i > 0 {
                    println!();
                }
                let result = execute_search(request);
                display_search_result(&result, &app, &colors, args.verbose);
            }
            Ok(())
        }
        Command::AStar(a_star_args) => {
            let result = execute_search(create_a_star_request(a_star_args));
            display_search_result(&result, &app, &colors, args.verbose);
            Ok(())
        }
        Command::Compare(compare_args) => run_comparison(compare_args, &app, &colors),
    };

    if let Err(error) = outcome {
        eprintln!("{}", colors.error(&format!("❌ Error: {}", error)));
        std::process::exit(1);
    }
}

fn run_comparison(
    compare_args: &CompareArgs,
    app: &LinePathApp,
    colors: &ColorScheme,
) -> Result<(), ReportError> {
    let targets = if compare_args.targets.is_empty() {
        DEFAULT_CASES.to_vec()
    } else {
        compare_args.targets.clone()
    };
    let config = SearchConfig::new(compare_args.limit, compare_args.expand_first);
    let rows = compare_targets(&targets, &app.scale, &config);

    if compare_args.json {
        let json_output = create_json_output(
            &targets,
            &rows,
            config.node_limit,
            config.expansion_order,
            &app.scale,
            &app.unit,
        );
        print_json_output(&json_output)?;
    } else {
        display_comparison_table(&rows, app, colors);
        display_savings(&rows, colors);
    }

    if let Some(csv_path) = &compare_args.csv {
        save_csv(csv_path, &rows)?;
        if !compare_args.json {
            println!(
                "\n{} Saved CSV report to {}",
                colors.success("✅"),
                csv_path.display()
            );
        }
    }

    Ok(())
}
