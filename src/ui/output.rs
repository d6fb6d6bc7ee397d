//! How much the CLI says besides the forecast itself.

/// Chosen by the global `--verbose` and `--quiet` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Coordinates, timezone and cache age on top of the report.
    Verbose,
    #[default]
    Normal,
    /// Report only. No spinners, headers, hints or success lines.
    Quiet,
}

impl OutputMode {
    /// `--quiet` wins when both flags are given.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (_, true) => Self::Quiet,
            (true, false) => Self::Verbose,
            (false, false) => Self::Normal,
        }
    }

    pub fn shows_details(self) -> bool {
        self == Self::Verbose
    }

    pub fn shows_status(self) -> bool {
        self != Self::Quiet
    }

    pub fn shows_spinners(self) -> bool {
        self.shows_status()
    }
}
