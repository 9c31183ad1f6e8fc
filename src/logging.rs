//! Logging setup for the command-line tools
//!
//! Diagnostics go to stderr through `tracing`. `RUST_LOG` takes precedence
//! over the command-line verbosity.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// How much the tools report on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only; skipped files go unreported
    Quiet,
    /// Warnings, including skipped files
    #[default]
    Normal,
    /// Progress information
    Verbose,
    /// Per-file and per-group detail
    Debug,
}

impl Verbosity {
    /// Derive verbosity from `-v` count and `-q`. `-q` wins.
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// `EnvFilter` directive for this verbosity.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Install the global stderr subscriber. Later calls are no-ops.
pub fn init(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
