//! Error types for the stepper.
//!
//! Every fallible operation in this crate returns [`LifeError`] through the
//! [`Result`] alias below.

/// Errors that can occur while editing or stepping a board.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    /// A coordinate lies outside the visible window.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} window")]
    OutOfRange {
        /// Row of the offending cell.
        row: i32,
        /// Column of the offending cell.
        col: i32,
        /// Visible rows.
        rows: usize,
        /// Visible columns.
        cols: usize,
    },

    /// A window dimension cannot be addressed by an `i32` coordinate.
    #[error("a {rows}x{cols} window exceeds the coordinate range")]
    WindowTooLarge {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// A periodic stepper was asked to tick with no delay.
    #[error("tick interval must be positive")]
    ZeroInterval,

    /// A fill density was not a probability.
    #[error("fill density {0} is not within [0, 1]")]
    InvalidDensity(f64),

    /// A pattern does not fit at the requested origin.
    #[error("pattern {name} does not fit at ({row}, {col})")]
    PatternOutOfRange {
        /// Pattern name.
        name: &'static str,
        /// Origin row.
        row: i32,
        /// Origin column.
        col: i32,
    },

    /// Another thread panicked while holding the board.
    #[error("board lock poisoned")]
    Poisoned,

    /// The classification thread pool could not be built.
    #[error("failed to build thread pool: {source}")]
    ThreadPool {
        /// The underlying rayon error.
        #[from]
        source: rayon::ThreadPoolBuildError,
    },

    /// Failed to read a configuration file.
    #[error("failed to read config file: {source}")]
    ConfigIo {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse configuration YAML.
    #[error("failed to parse config YAML: {source}")]
    ConfigYaml {
        /// The underlying YAML error.
        #[from]
        source: serde_yml::Error,
    },

    /// A configuration value is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LifeError>;
