//! Error types for the Nomenclator CLI.
//!
//! Every variant means the check could not run; naming violations are not
//! errors and are reported through the batch report instead.

use camino::Utf8PathBuf;
use nomenclator::ConfigError;
use pattern_validator::PatternError;
use thiserror::Error;

/// Errors that stop a command from completing.
#[derive(Debug, Error)]
pub enum CliError {
    /// The configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The asset manifest could not be read.
    #[error("failed to read asset manifest at {path}")]
    ManifestRead {
        /// Path of the manifest.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The asset manifest is not valid.
    #[error("invalid asset manifest at {origin}")]
    ManifestParse {
        /// Path of the manifest, or `<inline>` for in-memory sources.
        origin: String,
        /// The underlying parse failure.
        #[source]
        source: toml::de::Error,
    },

    /// An asset requested on the command line is not in the manifest.
    #[error("asset {object_path} not found in the manifest")]
    AssetNotFound {
        /// The requested object path.
        object_path: String,
    },

    /// A validator could not be built from its configuration.
    #[error(transparent)]
    Validator(#[from] PatternError),

    /// Output could not be serialised.
    #[error("failed to serialise output")]
    Serialise {
        /// The underlying serialisation failure.
        #[source]
        source: serde_json::Error,
    },

    /// Output could not be written.
    #[error("failed to write output")]
    WriteFailed {
        /// The underlying error that caused the write to fail.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
