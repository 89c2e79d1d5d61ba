use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, Command};
use manifold_engine::harness::{run_simulator, SimulatorConfig};
use manifold_engine::{count_divisions, count_timelines_with, Strategy};
use manifold_grid::{Grid, Position};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Serialize)]
struct TimelineReport {
    rows: usize,
    cols: usize,
    start: Position,
    strategy: &'static str,
    total: u64,
}

#[derive(Serialize)]
struct DivisionsReport {
    rows: usize,
    cols: usize,
    start: Position,
    divisions: u64,
}

#[derive(Serialize)]
struct InspectReport {
    rows: usize,
    cols: usize,
    start: Option<Position>,
    splitters: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Command::new("manifold")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tachyon manifold timeline counter")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("timelines")
                .about("Count timelines reaching the bottom of the grid")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .required(true)
                        .help("Path to the grid file"),
                )
                .arg(
                    Arg::new("strategy")
                        .long("strategy")
                        .default_value("dense")
                        .value_parser(["dense", "sparse"])
                        .help("Counting strategy"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("divisions")
                .about("Count beam divisions on the way down")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .required(true)
                        .help("Path to the grid file"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Report grid dimensions, start marker and splitter population")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .required(true)
                        .help("Path to the grid file"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("simulate")
                .about("Cross-check the engine on random grids")
                .arg(
                    Arg::new("grids")
                        .long("grids")
                        .default_value("100")
                        .value_parser(value_parser!(usize))
                        .help("Number of grids to generate"),
                )
                .arg(
                    Arg::new("rows")
                        .long("rows")
                        .default_value("32")
                        .value_parser(value_parser!(usize))
                        .help("Rows per grid"),
                )
                .arg(
                    Arg::new("cols")
                        .long("cols")
                        .default_value("32")
                        .value_parser(value_parser!(usize))
                        .help("Columns per grid"),
                )
                .arg(
                    Arg::new("density")
                        .long("density")
                        .default_value("0.25")
                        .value_parser(value_parser!(f64))
                        .help("Probability that a cell is a splitter"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .default_value("42")
                        .value_parser(value_parser!(u64))
                        .help("Random seed for reproducibility"),
                )
                .arg(
                    Arg::new("stop-on-violation")
                        .long("stop-on-violation")
                        .action(ArgAction::SetTrue)
                        .help("Stop simulation on first violation"),
                ),
        );

    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("timelines", args)) => {
            let input = args.get_one::<String>("input").unwrap();
            let strategy: Strategy = args.get_one::<String>("strategy").unwrap().parse()?;
            let json = args.get_flag("json");

            let grid = Grid::from_path(input)
                .with_context(|| format!("failed to load grid from {input}"))?;
            let total = count_timelines_with(&grid, strategy)?;
            tracing::info!(total, strategy = %strategy, "count complete");

            if json {
                let (rows, cols) = grid.dimensions();
                let report = TimelineReport {
                    rows,
                    cols,
                    start: grid.find_start()?,
                    strategy: strategy.name(),
                    total,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Total timelines: {total}");
            }
        }
        Some(("divisions", args)) => {
            let input = args.get_one::<String>("input").unwrap();
            let json = args.get_flag("json");

            let grid = Grid::from_path(input)
                .with_context(|| format!("failed to load grid from {input}"))?;
            let divisions = count_divisions(&grid)?;
            tracing::info!(divisions, "division count complete");

            if json {
                let (rows, cols) = grid.dimensions();
                let report = DivisionsReport {
                    rows,
                    cols,
                    start: grid.find_start()?,
                    divisions,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Total divisions: {divisions}");
            }
        }
        Some(("inspect", args)) => {
            let input = args.get_one::<String>("input").unwrap();
            let json = args.get_flag("json");

            let grid = Grid::from_path(input)
                .with_context(|| format!("failed to load grid from {input}"))?;
            let (rows, cols) = grid.dimensions();
            // Inspection is the diagnostic surface; a missing start marker
            // is reported, not fatal.
            let start = grid.find_start().ok();
            let splitters = grid.splitter_count();

            if json {
                let report = InspectReport {
                    rows,
                    cols,
                    start,
                    splitters,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Grid: {rows}x{cols}");
                match start {
                    Some(pos) => println!("Start: {pos}"),
                    None => println!("Start: none"),
                }
                println!("Splitters: {splitters}");
            }
        }
        Some(("simulate", args)) => {
            let grids = *args.get_one::<usize>("grids").unwrap();
            let rows = *args.get_one::<usize>("rows").unwrap();
            let cols = *args.get_one::<usize>("cols").unwrap();
            let density = *args.get_one::<f64>("density").unwrap();
            let seed = *args.get_one::<u64>("seed").unwrap();
            let stop_on_violation = args.get_flag("stop-on-violation");

            println!("Running manifold simulator...");
            println!("Grids: {grids} ({rows}x{cols}, density {density})");
            println!("Seed: {seed}");
            println!();

            let config = SimulatorConfig {
                seed,
                grids,
                rows,
                cols,
                splitter_density: density,
                stop_on_first_violation: stop_on_violation,
            };

            let report = run_simulator(config);

            println!("{}", report.generate_text());

            std::process::exit(if report.passed() { 0 } else { 1 });
        }
        _ => {}
    }

    Ok(())
}
