//! Plot valid packet counts per row for one or more validation logs.
//!
//! ```text
//! drawvalid -f run-a.log -n A -f run-b.log -n B --limit 1000 -o valid.png
//! ```

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use covplot::chart::{self, ChartSpec, VALIDATION_TITLE};
use covplot::cli::PlotArgs;
use covplot::loader::load_validation;
use covplot::logging;

#[derive(Parser, Debug)]
#[command(name = "drawvalid", version, about = "Valid packets chart for validation logs")]
struct Cli {
    #[command(flatten)]
    plot: PlotArgs,

    /// Title of the plot
    #[arg(long, default_value = VALIDATION_TITLE)]
    title: String,

    /// Limit number of data points read from each file (0 reads all)
    #[arg(long)]
    limit: Option<usize>,
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

    // Validation logs come from a single trusted writer: any bad file is fatal.
    let runs = inputs
        .iter()
        .map(|input| {
            load_validation(input.path(), cli.limit)
                .with_context(|| format!("failed to load {}", input.path().display()))
                .map(|run| (input.name(), run))
        })
        .collect::<Result<Vec<_>>>()?;

    let spec = ChartSpec::validation(&cli.title, runs.iter().map(|(name, run)| (*name, run)));
    let output = &cli.plot.output;
    chart::render(&spec, output)
        .with_context(|| format!("failed to write chart to {}", output.display()))?;
    println!("Plot saved to {}", output.display());
    Ok(())
}
