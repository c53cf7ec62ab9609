mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod stats;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::input::{ConfigOverrides, load_config};
use crate::pipeline::stage2_compare::build_comparison_report;
use crate::pipeline::stage3_report::{ReportMode, write_reports};
use crate::report::json::ToolMeta;

#[derive(Debug, Parser)]
#[command(name = "mmlu-scorecmp")]
#[command(version)]
#[command(about = "Compare benchmark accuracy scores with Wilson intervals and z-tests", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build the comparison report and write it to the output directory
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Score file (.json comparison config or .tsv score table)
    #[arg(long, value_name = "FILE")]
    input: PathBuf,

    /// Output directory
    #[arg(long, value_name = "DIR")]
    out: PathBuf,

    /// Items evaluated per score; required for .tsv input
    #[arg(long)]
    n: Option<u32>,

    /// Normal quantile of the interval (1.96 for 95%)
    #[arg(long = "z", value_name = "Z")]
    confidence_z: Option<f64>,

    /// Clip interval bounds to [0, 1] in chart output
    #[arg(long)]
    clamp_intervals: bool,

    /// Which tabular artifacts to write
    #[arg(long, value_enum, default_value = "all")]
    mode: ReportMode,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Run(args) => run_compare(&args),
    }
}

fn run_compare(args: &RunArgs) -> Result<(), String> {
    logging::init_tracing(args.verbose);

    let overrides = ConfigOverrides {
        n: args.n,
        confidence_z: args.confidence_z,
    };
    let config = load_config(&args.input, &overrides).map_err(|e| e.to_string())?;
    let report = build_comparison_report(&config).map_err(|e| e.to_string())?;

    if !args.clamp_intervals {
        let outside = report
            .variants
            .iter()
            .flat_map(|v| v.entries.iter())
            .filter(|e| !e.interval.is_within_unit())
            .count();
        if outside > 0 {
            tracing::warn!(
                "{} interval(s) extend outside [0, 1]; pass --clamp-intervals to clip them for display",
                outside
            );
        }
    }

    let meta = ToolMeta {
        name: "mmlu-scorecmp".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        git_hash: read_git_hash(&PathBuf::from(".")),
    };
    write_reports(&report, &meta, &args.out, args.mode, args.clamp_intervals)
        .map_err(|e| e.to_string())?;

    Ok(())
}

fn read_git_hash(repo_root: &Path) -> Option<String> {
    let head = repo_root.join(".git/HEAD");
    let content = std::fs::read_to_string(head).ok()?;
    if let Some(ref_line) = content.strip_prefix("ref: ") {
        let ref_path = repo_root.join(".git").join(ref_line.trim());
        return std::fs::read_to_string(ref_path)
            .ok()
            .map(|s| s.trim().to_string());
    }
    Some(content.trim().to_string())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
