//! CLI argument definitions for the Nomenclator checker.
//!
//! This module defines the command-line interface using clap. It is separated
//! from the entrypoint so argument parsing can be tested without running a
//! check.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// Content root validated when `--root` is not given.
pub const DEFAULT_ROOT: &str = "/Game";

/// Check content asset names against a project's naming convention.
#[derive(Parser, Debug)]
#[command(name = "nomenclator")]
#[command(version, about)]
#[command(long_about = concat!(
    "Check content asset names against a project's naming convention.\n\n",
    "Assets are read from a TOML manifest listing the class hierarchy and the ",
    "assets to validate. Naming rules, exclusions and validator settings are ",
    "read from an optional configuration file.",
))]
#[command(after_help = concat!(
    "EXIT STATUS:\n",
    "  0  every checked asset follows the convention\n",
    "  1  the check could not run\n",
    "  2  at least one asset violates the convention\n\n",
    "EXAMPLES:\n",
    "  Check everything under /Game:\n",
    "    $ nomenclator check --manifest assets.toml --config nomenclator.toml\n\n",
    "  Check a single asset and print JSON:\n",
    "    $ nomenclator check -m assets.toml --asset /Game/Props/M_Rock.M_Rock --json\n\n",
    "  Show the effective rule table:\n",
    "    $ nomenclator rules --config nomenclator.toml",
))]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (repeatable: -v, -vv, -vvv). Also lists skipped
    /// assets in the report.
    #[arg(
        short,
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        conflicts_with = "quiet"
    )]
    pub verbosity: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Validate the assets listed in a manifest.
    Check(CheckArgs),

    /// Print the sorted rule table.
    Rules(RulesArgs),
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Configuration file with `[naming]` and validator tables.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// Asset manifest to validate.
    #[arg(short, long, value_name = "FILE")]
    pub manifest: Utf8PathBuf,

    /// Only validate assets whose package lives under this path.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_ROOT)]
    pub root: String,

    /// Validate only the given object path (can be repeated).
    #[arg(short, long, value_name = "OBJECT_PATH")]
    pub asset: Vec<String>,

    /// Skip pluggable validators and use the rule table only.
    #[arg(long)]
    pub no_validators: bool,

    /// Output the report in JSON format for scripting.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the rules command.
#[derive(Parser, Debug, Clone)]
pub struct RulesArgs {
    /// Configuration file with a `[naming]` table.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// Asset manifest whose class hierarchy rules are bound against.
    #[arg(short, long, value_name = "FILE")]
    pub manifest: Option<Utf8PathBuf>,

    /// Output the rules in JSON format for scripting.
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    /// Creates arguments checking every asset of `manifest` with defaults
    /// for everything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use nomenclator_cli::cli::{CheckArgs, DEFAULT_ROOT};
    ///
    /// let args = CheckArgs::for_manifest("assets.toml".into());
    /// assert_eq!(args.root, DEFAULT_ROOT);
    /// assert!(args.asset.is_empty());
    /// assert!(!args.json);
    /// ```
    #[must_use]
    pub fn for_manifest(manifest: Utf8PathBuf) -> Self {
        Self {
            config: None,
            manifest,
            root: DEFAULT_ROOT.to_owned(),
            asset: Vec::new(),
            no_validators: false,
            json: false,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
