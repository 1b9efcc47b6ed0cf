mod cmd;
mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dotscan_lib::settings::AnalysisSettings;

use crate::cmd::{DepsArgs, ReportArgs, TestsArgs};
use crate::output::{OutputFormat, print_error};

/// dotscan - Run .NET analysis tools and map their reports
#[derive(Parser)]
#[command(name = "dotscan")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Settings file (default: ./dotscan.json, then the user config directory)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t)]
  output: OutputFormat,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Analyze the dependencies of a built project with NDeps
  Deps(DepsArgs),

  /// Run the test assemblies of one or more projects with Gallio
  Tests(TestsArgs),

  /// Print the test results of a Gallio XML report
  Report(ReportArgs),

  /// Show version, platform and settings information
  Info,
}

fn init_logging(verbose: bool) {
  let default = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn load_settings(path: Option<&Path>) -> Result<AnalysisSettings> {
  AnalysisSettings::load(path).context("Failed to load settings")
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let config = cli.config.as_deref();
  let result = match cli.command {
    Commands::Deps(args) => load_settings(config).and_then(|settings| cmd::cmd_deps(args, &settings, cli.output)),
    Commands::Tests(args) => load_settings(config).and_then(|settings| cmd::cmd_tests(args, &settings, cli.output)),
    Commands::Report(args) => cmd::cmd_report(args, cli.output),
    Commands::Info => cmd::cmd_info(config, cli.output),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}
