//! Plot mean branch coverage over time for groups of repeated runs.
//!
//! ```text
//! drawcov -f afl-1.csv -n afl -f afl-2.csv -n afl -f lf-1.csv -n libfuzzer -o cov.png
//! ```

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use covplot::aggregate::aggregate;
use covplot::chart::{self, ChartSpec, COVERAGE_TITLE};
use covplot::cli::PlotArgs;
use covplot::compare::{compare, CompareOutcome, DEFAULT_TOP_GAPS};
use covplot::loader::{load_coverage, load_groups};
use covplot::{logging, Error};

#[derive(Parser, Debug)]
#[command(name = "drawcov", version, about = "Coverage analysis chart across repeated runs")]
struct Cli {
    #[command(flatten)]
    plot: PlotArgs,

    /// Title of the plot
    #[arg(long, default_value = COVERAGE_TITLE)]
    title: String,

    /// Print final values and largest gaps when exactly two groups are given
    #[arg(long)]
    compare: bool,

    /// Number of gap rows in the comparison
    #[arg(long, default_value_t = DEFAULT_TOP_GAPS)]
    top: usize,

    /// Also write the comparison as JSON to this path
    #[arg(long, value_name = "PATH", requires = "compare")]
    compare_json: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.plot.verbosity());

    let inputs = match cli.plot.inputs() {
        Ok(inputs) => inputs,
        Err(err) => Cli::command()
            .error(ErrorKind::WrongNumberOfValues, err)
            .exit(),
    };

    let report = load_groups(&inputs, |path| load_coverage(path));
    let aggregation = match aggregate(report.groups()) {
        Ok(aggregation) => aggregation,
        Err(Error::NoRuns) => {
            println!("No valid data files were loaded. Exiting.");
            process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    let output = &cli.plot.output;
    chart::render(&ChartSpec::coverage(&cli.title, &aggregation), output)
        .with_context(|| format!("failed to write chart to {}", output.display()))?;
    println!("Plot saved to {}", output.display());

    if cli.compare {
        let outcome = compare(&aggregation, cli.top);
        print!("\n{outcome}");
        if let (CompareOutcome::Compared(comparison), Some(path)) = (&outcome, &cli.compare_json) {
            let json = serde_json::to_string_pretty(comparison).map_err(Error::from)?;
            fs::write(path, json)
                .with_context(|| format!("failed to write comparison to {}", path.display()))?;
        }
    }

    Ok(())
}
