//! Nomenclator command-line library.
//!
//! This crate backs the `nomenclator` binary, a batch checker that loads a
//! configuration file and an asset manifest, validates every asset under a
//! content root, and reports the result with automation-friendly exit codes.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - Error types for failures to run a check
//! - [`manifest`] - The TOML asset manifest standing in for an asset index
//! - [`output`] - Human-readable and JSON rendering
//! - [`run`] - Command orchestration and exit codes

pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod run;
