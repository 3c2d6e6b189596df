//! Report entry point — CLI wiring, parameter resolution and output selection.

use std::path::Path;
use std::process;

use solar_report::config::EstimationParams;
use solar_report::data;
use solar_report::engine::EstimateReport;
use solar_report::io::export::export_csv;
use solar_report::report::{format_report, sizing_summary};

/// Data file consulted when `--data` is not given.
const DEFAULT_DATA_PATH: &str = "data/consumption.json";

/// Parsed CLI arguments.
struct CliArgs {
    data_path: Option<String>,
    params_path: Option<String>,
    cost_per_kwh: Option<f64>,
    coverage_pct: Option<f64>,
    peak_sun_hours: Option<f64>,
    panel_wp: Option<u32>,
    ma_window: Option<usize>,
    export_path: Option<String>,
    table: bool,
    #[cfg(feature = "tui")]
    tui: bool,
}

fn print_help() {
    eprintln!("solar-report — monthly electricity consumption report with PV sizing");
    eprintln!();
    eprintln!("Usage: solar-report [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --data <path>            Consumption JSON (default: data/consumption.json)");
    eprintln!("  --params <path>          Load parameters from a TOML config file");
    eprintln!("  --cost-per-kwh <f64>     Electricity price for the savings projection");
    eprintln!("  --coverage <f64>         Coverage target in percent (10-100, steps of 5)");
    eprintln!("  --hsp <f64>              Peak sun hours per day (3.0-6.0, steps of 0.5)");
    eprintln!("  --panel-wp <u32>         Panel rating in Wp (330, 370, 400, 450, 500)");
    eprintln!("  --window <usize>         Moving-average window in months (2-6)");
    eprintln!("  --export <path>          Write the series to a CSV file");
    eprintln!("  --table                  Print the month-by-month table");
    #[cfg(feature = "tui")]
    eprintln!("  --tui                    Launch the interactive dashboard");
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("Flags override --params values; out-of-range parameters are clamped.");
    eprintln!("A missing data file falls back to a built-in sample series.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        data_path: None,
        params_path: None,
        cost_per_kwh: None,
        coverage_pct: None,
        peak_sun_hours: None,
        panel_wp: None,
        ma_window: None,
        export_path: None,
        table: false,
        #[cfg(feature = "tui")]
        tui: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--data" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --data requires a path argument");
                    process::exit(1);
                }
                cli.data_path = Some(args[i].clone());
            }
            "--params" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --params requires a path argument");
                    process::exit(1);
                }
                cli.params_path = Some(args[i].clone());
            }
            "--cost-per-kwh" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --cost-per-kwh requires an f64 argument");
                    process::exit(1);
                }
                if let Ok(v) = args[i].parse::<f64>() {
                    cli.cost_per_kwh = Some(v);
                } else {
                    eprintln!(
                        "error: --cost-per-kwh value \"{}\" is not a valid f64",
                        args[i]
                    );
                    process::exit(1);
                }
            }
            "--coverage" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --coverage requires an f64 argument");
                    process::exit(1);
                }
                if let Ok(v) = args[i].parse::<f64>() {
                    cli.coverage_pct = Some(v);
                } else {
                    eprintln!("error: --coverage value \"{}\" is not a valid f64", args[i]);
                    process::exit(1);
                }
            }
            "--hsp" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --hsp requires an f64 argument");
                    process::exit(1);
                }
                if let Ok(v) = args[i].parse::<f64>() {
                    cli.peak_sun_hours = Some(v);
                } else {
                    eprintln!("error: --hsp value \"{}\" is not a valid f64", args[i]);
                    process::exit(1);
                }
            }
            "--panel-wp" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --panel-wp requires a u32 argument");
                    process::exit(1);
                }
                if let Ok(v) = args[i].parse::<u32>() {
                    cli.panel_wp = Some(v);
                } else {
                    eprintln!("error: --panel-wp value \"{}\" is not a valid u32", args[i]);
                    process::exit(1);
                }
            }
            "--window" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --window requires a usize argument");
                    process::exit(1);
                }
                if let Ok(v) = args[i].parse::<usize>() {
                    cli.ma_window = Some(v);
                } else {
                    eprintln!("error: --window value \"{}\" is not a valid usize", args[i]);
                    process::exit(1);
                }
            }
            "--export" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --export requires a path argument");
                    process::exit(1);
                }
                cli.export_path = Some(args[i].clone());
            }
            "--table" => {
                cli.table = true;
            }
            #[cfg(feature = "tui")]
            "--tui" => {
                cli.tui = true;
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Resolves the parameter set: TOML file first, then flag overrides.
fn resolve_params(cli: &CliArgs) -> EstimationParams {
    let mut params = if let Some(ref path) = cli.params_path {
        match EstimationParams::from_toml_file(Path::new(path)) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        EstimationParams::default()
    };

    if let Some(v) = cli.cost_per_kwh {
        params.cost_per_kwh = v;
    }
    if let Some(v) = cli.coverage_pct {
        params.coverage_pct = v;
    }
    if let Some(v) = cli.peak_sun_hours {
        params.peak_sun_hours = v;
    }
    if let Some(v) = cli.panel_wp {
        params.panel_wp = v;
    }
    if let Some(v) = cli.ma_window {
        params.ma_window = v;
    }

    // Off-grid values are clamped by the engine; surface them anyway.
    for e in params.validate() {
        eprintln!("warning: {}: {}; clamping", e.field, e.message);
    }

    params
}

fn main() {
    let cli = parse_args();
    let params = resolve_params(&cli);

    let data_path = cli.data_path.as_deref().unwrap_or(DEFAULT_DATA_PATH);

    #[cfg(feature = "tui")]
    if cli.tui {
        solar_report::tui::run(Path::new(data_path), params);
        return;
    }

    // Load: absent file falls back to the sample, a broken file is fatal
    let loaded = match data::load(Path::new(data_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let report = EstimateReport::compute(&loaded.series, &params);

    if cli.table {
        print!("{}", format_report(&loaded, &report));
    } else {
        println!("Source: {}", loaded.source);
        println!();
        println!("{report}");
        println!("{}", sizing_summary(&report));
    }

    // Export CSV if requested
    if let Some(ref path) = cli.export_path {
        if let Err(e) = export_csv(&loaded.series, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Series written to {path}");
    }
}
