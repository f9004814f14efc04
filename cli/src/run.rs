//! Command orchestration and exit codes.
//!
//! Automation needs to tell "ran and found violations" apart from "could not
//! run", so the two map to distinct non-zero exit codes.

use std::io::Write;
use std::sync::Arc;

use camino::Utf8Path;
use common::{AssetIdentity, ClassHierarchy, ClassTree};
use log::debug;
use nomenclator::{ConfigFile, NamingPipeline, NamingSettings, RuleTable};
use pattern_validator::{PatternValidator, PatternValidatorConfig};

use crate::cli::{CheckArgs, Cli, Command, RulesArgs};
use crate::error::{CliError, Result};
use crate::manifest::AssetManifest;
use crate::output::{
    ReportStyle, format_report_human, format_report_json, format_rules_human, format_rules_json,
};

const LOG_TARGET: &str = "nomenclator_cli";

/// Every checked asset follows the convention.
pub const EXIT_SUCCESS: i32 = 0;

/// The command could not run.
pub const EXIT_FAILURE: i32 = 1;

/// At least one asset violates the convention.
pub const EXIT_VIOLATIONS: i32 = 2;

/// How a command that ran to completion ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to report.
    Clean,
    /// At least one asset is invalid.
    Violations,
}

impl Outcome {
    /// Process exit code for the outcome.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Clean => EXIT_SUCCESS,
            Self::Violations => EXIT_VIOLATIONS,
        }
    }
}

/// Runs the parsed command, writing its output to `stdout`.
///
/// # Errors
///
/// Returns a [`CliError`] when configuration or the manifest cannot be
/// loaded, a validator cannot be built, or output cannot be written.
pub fn run(cli: &Cli, stdout: &mut dyn Write) -> Result<Outcome> {
    match &cli.command {
        Command::Check(args) => run_check(args, cli.verbosity > 0, stdout),
        Command::Rules(args) => run_rules(args, stdout),
    }
}

/// Maps a run result to a process exit code, reporting errors on `stderr`.
#[must_use]
pub fn exit_code_for(result: Result<Outcome>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            write_stderr_line(stderr, format_error_chain(&err));
            EXIT_FAILURE
        }
    }
}

fn run_check(args: &CheckArgs, verbose: bool, stdout: &mut dyn Write) -> Result<Outcome> {
    let config = load_config(args.config.as_deref())?;
    let mut settings: NamingSettings = config.section(NamingSettings::SECTION)?;
    if args.no_validators {
        settings.use_validators = false;
    }

    let manifest = AssetManifest::load(&args.manifest)?;
    let hierarchy = Arc::new(manifest.hierarchy());
    let mut pipeline = NamingPipeline::new(&settings, Arc::clone(&hierarchy));
    if settings.use_validators {
        register_validators(&mut pipeline, &config, &hierarchy)?;
    }

    let assets = select_assets(&manifest, args)?;
    debug!(
        target: LOG_TARGET,
        "validating {} asset(s) under {}",
        assets.len(),
        args.root
    );
    let report = pipeline.validate_batch(&assets);

    let rendered = if args.json {
        format_report_json(&report)?
    } else {
        let style = ReportStyle {
            warn_on_unknown: settings.warn_on_unknown,
            verbose,
        };
        format_report_human(&report, style)
    };
    write_output(stdout, rendered.trim_end())?;

    Ok(if report.failed() {
        Outcome::Violations
    } else {
        Outcome::Clean
    })
}

fn run_rules(args: &RulesArgs, stdout: &mut dyn Write) -> Result<Outcome> {
    let config = load_config(args.config.as_deref())?;
    let settings: NamingSettings = config.section(NamingSettings::SECTION)?;

    let mut table = RuleTable::from_settings(&settings.rule_settings());
    if let Some(path) = &args.manifest {
        table.bind(&AssetManifest::load(path)?.hierarchy());
    }

    let rendered = if args.json {
        format_rules_json(&table)?
    } else {
        format_rules_human(&table)
    };
    write_output(stdout, rendered.trim_end())?;
    Ok(Outcome::Clean)
}

fn load_config(path: Option<&Utf8Path>) -> Result<ConfigFile> {
    match path {
        Some(path) => Ok(ConfigFile::load(path)?),
        None => Ok(ConfigFile::default()),
    }
}

fn register_validators(
    pipeline: &mut NamingPipeline<Arc<ClassTree>>,
    config: &ConfigFile,
    hierarchy: &Arc<ClassTree>,
) -> Result<()> {
    let patterns: PatternValidatorConfig = config.section(PatternValidatorConfig::SECTION)?;
    if patterns.patterns.is_empty() {
        return Ok(());
    }

    let shared: Arc<dyn ClassHierarchy + Send + Sync> = hierarchy.clone();
    pipeline
        .registry_mut()
        .register(PatternValidator::new(&patterns, shared)?);
    Ok(())
}

fn select_assets(manifest: &AssetManifest, args: &CheckArgs) -> Result<Vec<AssetIdentity>> {
    if args.asset.is_empty() {
        return Ok(manifest.assets_under(&args.root).cloned().collect());
    }

    args.asset
        .iter()
        .map(|object_path| {
            manifest
                .asset_identity(object_path)
                .cloned()
                .ok_or_else(|| CliError::AssetNotFound {
                    object_path: object_path.clone(),
                })
        })
        .collect()
}

fn write_output(stdout: &mut dyn Write, text: &str) -> Result<()> {
    writeln!(stdout, "{text}").map_err(|source| CliError::WriteFailed { source })
}

fn format_error_chain(err: &dyn std::error::Error) -> String {
    let mut message = format!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!("\n  caused by: {cause}"));
        source = cause.source();
    }
    message
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
