//! Command-line arguments shared by `drawcov` and `drawvalid`

use std::path::PathBuf;

use clap::Args;

use crate::loader::InputFile;
use crate::logging::Verbosity;
use crate::{Error, Result};

/// Input, output and verbosity flags common to both tools.
#[derive(Args, Debug, Clone)]
pub struct PlotArgs {
    /// Log file to read (repeat once per --name)
    #[arg(short = 'f', long = "file", required = true)]
    pub files: Vec<PathBuf>,

    /// Group name for the matching --file (repeat once per --file)
    #[arg(short = 'n', long = "name", required = true)]
    pub names: Vec<String>,

    /// Output image path (.svg for vector output)
    #[arg(short, long)]
    pub output: PathBuf,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors; skipped files are not mentioned
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl PlotArgs {
    /// Pair each `--file` with its `--name`, in command-line order.
    ///
    /// # Errors
    ///
    /// Returns `Error::ArgumentMismatch` when the counts differ.
    pub fn inputs(&self) -> Result<Vec<InputFile>> {
        pair_inputs(&self.files, &self.names)
    }

    /// Verbosity selected by `-v` / `-q`.
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }
}

/// Zip paths with names.
///
/// # Errors
///
/// Returns `Error::ArgumentMismatch` when the slices differ in length.
pub fn pair_inputs(files: &[PathBuf], names: &[String]) -> Result<Vec<InputFile>> {
    if files.len() != names.len() {
        return Err(Error::ArgumentMismatch {
            files: files.len(),
            names: names.len(),
        });
    }
    Ok(files
        .iter()
        .zip(names)
        .map(|(path, name)| InputFile::new(path.clone(), name.clone()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        plot: PlotArgs,
    }

    #[test]
    fn test_pairs_in_order() {
        let cli = TestCli::parse_from(["t", "-f", "a.csv", "-n", "A", "-f", "b.csv", "-n", "B", "-o", "out.png"]);
        let inputs = cli.plot.inputs().unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[1].path(), std::path::Path::new("b.csv"));
        assert_eq!(inputs[1].name(), "B");
        assert_eq!(cli.plot.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_mismatch_is_rejected() {
        let cli = TestCli::parse_from(["t", "-f", "a.csv", "-n", "X", "-f", "b.csv", "-o", "out.png"]);
        let err = cli.plot.inputs().unwrap_err();
        assert!(matches!(err, Error::ArgumentMismatch { files: 2, names: 1 }));
    }

    #[test]
    fn test_output_is_required() {
        assert!(TestCli::try_parse_from(["t", "-f", "a.csv", "-n", "A"]).is_err());
    }

    #[test]
    fn test_verbose_count() {
        let cli = TestCli::parse_from(["t", "-f", "a", "-n", "A", "-o", "o.png", "-vv"]);
        assert_eq!(cli.plot.verbosity(), Verbosity::Debug);
    }
}
