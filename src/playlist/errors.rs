use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can end a run
#[derive(Error, Debug)]
pub enum Error {
    /// Input file does not exist
    #[error("File not found: {0}")]
    InputNotFound(PathBuf),

    /// Input file exists but could not be read
    #[error("Error reading input file {path}: {source}")]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV
    #[error("Error reading CSV file: {0}")]
    Csv(#[from] csv::Error),

    /// An output file could not be written
    #[error("Could not write {path}: {source}")]
    Write {
        /// File being written
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// Playlist info could not be serialized
    #[error("Failed to serialize playlist info: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A required external tool is missing
    #[error("{tool} not found. Please install manually:\n{hint}")]
    MissingDependency {
        /// Tool name
        tool: &'static str,
        /// How to install it
        hint: String,
    },

    /// The source yielded no songs
    #[error("No songs found!")]
    EmptyPlaylist,

    /// Bad or missing arguments
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Any other IO failure (prompting, probing tools)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
