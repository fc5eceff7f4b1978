//! District thermal network sizing entry point: CLI wiring.

use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use thermalnetwork::VERSION;
use thermalnetwork::runner::run_sizer_from_cli_worker;

/// Parsed CLI arguments.
struct CliArgs {
    geojson_file: Option<String>,
    scenario_directory: Option<String>,
    output_directory: Option<String>,
}

fn print_help() {
    eprintln!("thermalnetwork - district thermal network GHE sizing");
    eprintln!();
    eprintln!("Usage: thermalnetwork [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -f, --geojson <path>        Path to district GeoJSON file");
    eprintln!("  -s, --scenario-dir <path>   Path to scenario directory");
    eprintln!("  -o, --output-dir <path>     Path to output directory");
    eprintln!("      --version               Show version information");
    eprintln!("  -h, --help                  Show this help message");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        geojson_file: None,
        scenario_directory: None,
        output_directory: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--version" => {
                eprintln!("thermalnetwork {} (schema v{})", env!("CARGO_PKG_VERSION"), VERSION);
                process::exit(0);
            }
            "--geojson" | "-f" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --geojson requires a path argument");
                    process::exit(1);
                }
                cli.geojson_file = Some(args[i].clone());
            }
            "--scenario-dir" | "-s" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario-dir requires a path argument");
                    process::exit(1);
                }
                cli.scenario_directory = Some(args[i].clone());
            }
            "--output-dir" | "-o" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --output-dir requires a path argument");
                    process::exit(1);
                }
                cli.output_directory = Some(args[i].clone());
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

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("thermalnetwork=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

fn required(value: Option<String>, flag: &str) -> PathBuf {
    match value {
        Some(v) => PathBuf::from(v),
        None => {
            eprintln!("error: {flag} is required");
            print_help();
            process::exit(1);
        }
    }
}

fn main() {
    init_logging();
    let cli = parse_args();

    let geojson_file = required(cli.geojson_file, "--geojson");
    let scenario_directory = required(cli.scenario_directory, "--scenario-dir");
    let output_directory = required(cli.output_directory, "--output-dir");

    if let Err(e) =
        run_sizer_from_cli_worker(&geojson_file, &scenario_directory, &output_directory)
    {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
