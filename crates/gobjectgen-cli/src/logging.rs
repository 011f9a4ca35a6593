// Logging and verbosity control

/// Verbosity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Quiet mode - errors only
    Quiet = 0,
    /// Normal mode - standard output
    Normal = 1,
    /// Verbose mode - debug diagnostics on stderr
    Verbose = 2,
}

impl VerbosityLevel {
    /// Resolve the level from CLI flags; quiet wins over verbose
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            VerbosityLevel::Quiet
        } else if verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }

    /// Maximum tracing level emitted at this verbosity
    pub fn tracing_level(&self) -> tracing::Level {
        match self {
            VerbosityLevel::Quiet => tracing::Level::ERROR,
            VerbosityLevel::Normal => tracing::Level::WARN,
            VerbosityLevel::Verbose => tracing::Level::DEBUG,
        }
    }

    /// Check if output at `level` should be shown under this verbosity
    pub fn should_output(&self, level: VerbosityLevel) -> bool {
        level <= *self
    }
}

/// Initialize logging based on CLI flags
///
/// Installs a stderr `tracing` subscriber. A subscriber that is already
/// installed is left in place.
pub fn init_logging(verbose: bool, quiet: bool) -> VerbosityLevel {
    use tracing_subscriber::fmt;

    let level = VerbosityLevel::from_flags(verbose, quiet);
    let detailed = level == VerbosityLevel::Verbose;

    let _ = fmt()
        .with_max_level(level.tracing_level())
        .with_target(detailed)
        .with_file(detailed)
        .with_line_number(detailed)
        .with_writer(std::io::stderr)
        .try_init();

    level
}
