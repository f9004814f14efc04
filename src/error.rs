//! Error types for configuration loading.
//!
//! Per-asset problems never surface here: they degrade to a
//! [`Verdict`](common::Verdict). Only failures to obtain the configuration the
//! engine is built from are reported as errors.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while reading or decoding a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration at {path}")]
    Read {
        /// Path of the file that could not be read.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML.
    #[error("invalid configuration at {origin}")]
    Parse {
        /// Path of the file, or `<inline>` for in-memory sources.
        origin: String,
        /// The underlying parse failure.
        #[source]
        source: toml::de::Error,
    },

    /// A configuration table does not match the schema of its consumer.
    #[error("invalid [{section}] configuration")]
    Section {
        /// Name of the offending table.
        section: String,
        /// The underlying decoding failure.
        #[source]
        source: toml::de::Error,
    },
}

/// Convenience alias for configuration results.
pub type Result<T> = std::result::Result<T, ConfigError>;
