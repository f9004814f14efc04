//! Output formatting for reports and rule listings.
//!
//! Invalid and unknown assets are always listed. Unknown assets are rendered
//! as warnings when the configuration asks for it and as notes otherwise.
//! Skipped assets are only listed in verbose mode.

use common::Verdict;
use nomenclator::{AssetDiagnostic, BatchReport, NamingRule, RuleTable};
use serde::Serialize;

use crate::error::{CliError, Result};

/// Rendering switches for human-readable reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportStyle {
    /// Render unknown assets as warnings instead of notes.
    pub warn_on_unknown: bool,
    /// List skipped assets.
    pub verbose: bool,
}

/// Format a batch report for human-readable output.
///
/// # Examples
///
/// ```
/// use nomenclator::BatchReport;
/// use nomenclator_cli::output::{ReportStyle, format_report_human};
///
/// let output = format_report_human(&BatchReport::new(), ReportStyle::default());
/// assert!(output.starts_with("Naming convention validation SUCCEEDED."));
/// ```
#[must_use]
pub fn format_report_human(report: &BatchReport, style: ReportStyle) -> String {
    let mut output = String::new();

    for diagnostic in report.diagnostics() {
        if let Some(line) = diagnostic_line(diagnostic, style) {
            output.push_str(&line);
            output.push('\n');
        }
    }

    output.push_str(&report.summary());
    output.push('\n');
    output
}

fn diagnostic_line(diagnostic: &AssetDiagnostic, style: ReportStyle) -> Option<String> {
    let path = &diagnostic.object_path;
    match &diagnostic.verdict {
        Verdict::Valid => None,
        Verdict::Invalid(reason) => Some(format!("error: {path}: {reason}")),
        Verdict::Excluded(reason) => style
            .verbose
            .then(|| format!("skipped: {path}: {reason}")),
        Verdict::Unknown(reason) => {
            let severity = if style.warn_on_unknown { "warning" } else { "note" };
            let reason = reason.as_deref().unwrap_or("no known naming convention");
            Some(format!("{severity}: {path}: {reason}"))
        }
    }
}

/// Format a batch report as JSON.
///
/// # Errors
///
/// Returns [`CliError::Serialise`] when the report cannot be serialised.
pub fn format_report_json(report: &BatchReport) -> Result<String> {
    let json = ReportJson {
        failed: report.failed(),
        summary: report.summary(),
        report,
    };
    to_pretty_json(&json)
}

/// JSON-serialisable representation of a batch report.
#[derive(Debug, Serialize)]
struct ReportJson<'a> {
    failed: bool,
    summary: String,
    #[serde(flatten)]
    report: &'a BatchReport,
}

/// Format the rule table for human-readable output.
///
/// # Examples
///
/// ```
/// use nomenclator::{NamingRule, RuleTable};
/// use nomenclator_cli::output::format_rules_human;
///
/// let mut table = RuleTable::new();
/// table.add_rule(NamingRule::new("/Script/Engine.Material").with_prefix("M_"));
///
/// let output = format_rules_human(&table);
/// assert!(output.contains("/Script/Engine.Material"));
/// assert!(output.contains("prefix M_"));
/// ```
#[must_use]
pub fn format_rules_human(table: &RuleTable) -> String {
    if table.is_empty() {
        return String::from("No naming rules configured.\n");
    }

    let mut output = format!("Naming rules ({}):\n", table.len());
    for rule in table.sorted_rules() {
        output.push_str(&format!("  {}\n", rule_line(rule)));
    }
    output
}

fn rule_line(rule: &NamingRule) -> String {
    let mut affixes = Vec::new();
    if !rule.prefix().is_empty() {
        affixes.push(format!("prefix {}", rule.prefix()));
    }
    if !rule.suffix().is_empty() {
        affixes.push(format!("suffix {}", rule.suffix()));
    }
    if affixes.is_empty() {
        affixes.push(String::from("any name"));
    }

    let class = if rule.target_class().is_empty() {
        "<unset>"
    } else {
        rule.target_class().as_str()
    };
    let unresolved = if rule.is_resolvable() {
        ""
    } else {
        " (unresolved)"
    };

    format!(
        "[{:>3}] {class}: {}{unresolved}",
        rule.priority(),
        affixes.join(", ")
    )
}

/// Format the rule table as JSON.
///
/// # Errors
///
/// Returns [`CliError::Serialise`] when the rules cannot be serialised.
pub fn format_rules_json(table: &RuleTable) -> Result<String> {
    to_pretty_json(&RulesJson {
        rules: table.sorted_rules(),
    })
}

/// JSON-serialisable representation of the rule table.
#[derive(Debug, Serialize)]
struct RulesJson<'a> {
    rules: &'a [NamingRule],
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|source| CliError::Serialise { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AssetIdentity;
    use rstest::{fixture, rstest};

    fn identity(name: &str) -> AssetIdentity {
        AssetIdentity::new(name, "/Script/Engine.Material", format!("/Game/Props/{name}"))
    }

    #[fixture]
    fn report() -> BatchReport {
        let mut report = BatchReport::new();
        report.record(&identity("M_Rock"), Verdict::Valid);
        report.record(
            &identity("Rock"),
            Verdict::Invalid("needs M_".to_owned()),
        );
        report.record(&identity("Stone"), Verdict::unknown());
        report.record(
            &identity("M_Old"),
            Verdict::Excluded("excluded directory".to_owned()),
        );
        report
    }

    #[rstest]
    fn invalid_assets_are_errors(report: BatchReport) {
        let output = format_report_human(&report, ReportStyle::default());

        assert!(output.contains("error: /Game/Props/Rock.Rock: needs M_\n"));
        assert!(!output.contains("M_Rock"));
    }

    #[rstest]
    #[case::notes_by_default(false, "note: /Game/Props/Stone.Stone")]
    #[case::warnings_on_request(true, "warning: /Game/Props/Stone.Stone")]
    fn unknown_assets_are_always_listed(
        report: BatchReport,
        #[case] warn_on_unknown: bool,
        #[case] expected: &str,
    ) {
        let style = ReportStyle {
            warn_on_unknown,
            verbose: false,
        };

        let output = format_report_human(&report, style);

        assert!(output.contains(expected));
    }

    #[rstest]
    #[case::quiet(false, false)]
    #[case::verbose(true, true)]
    fn skipped_assets_need_verbose(report: BatchReport, #[case] verbose: bool, #[case] listed: bool) {
        let style = ReportStyle {
            warn_on_unknown: false,
            verbose,
        };

        let output = format_report_human(&report, style);

        assert_eq!(output.contains("skipped: /Game/Props/M_Old.M_Old"), listed);
    }

    #[rstest]
    fn summary_closes_the_report(report: BatchReport) {
        let output = format_report_human(&report, ReportStyle::default());

        assert!(output.ends_with(
            "Naming convention validation FAILED. Files checked: 3, passed: 1, failed: 1, skipped: 1, unable to validate: 1\n"
        ));
    }

    #[rstest]
    fn json_report_carries_counts_and_diagnostics(report: BatchReport) {
        let json = format_report_json(&report).expect("report should serialise");
        let value: serde_json::Value = serde_json::from_str(&json).expect("output should be JSON");

        assert_eq!(value["failed"], serde_json::Value::Bool(true));
        assert_eq!(value["invalid"], 1);
        assert_eq!(value["excluded"], 1);
        assert_eq!(value["diagnostics"][0]["verdict"], "invalid");
        assert_eq!(value["diagnostics"][0]["reason"], "needs M_");
    }

    #[rstest]
    fn rules_list_flags_unresolved_classes() {
        let mut table = RuleTable::new();
        table.add_rule(NamingRule::new("/Script/Engine.Material").with_prefix("M_"));
        table.add_rule(NamingRule::new("/Script/Missing.Thing").with_suffix("_X"));
        table.bind(&common::ClassTree::new().with_class("/Script/Engine.Material", None));

        let output = format_rules_human(&table);

        assert_eq!(
            output,
            concat!(
                "Naming rules (2):\n",
                "  [  0] /Script/Missing.Thing: suffix _X (unresolved)\n",
                "  [  0] /Script/Engine.Material: prefix M_\n",
            )
        );
    }

    #[rstest]
    fn empty_rule_tables_say_so() {
        assert_eq!(
            format_rules_human(&RuleTable::new()),
            "No naming rules configured.\n"
        );
    }

    #[rstest]
    fn rules_serialise_in_table_order() {
        let mut table = RuleTable::new();
        table.add_rule(NamingRule::new("/Script/Engine.Texture").with_prefix("T_"));
        table.add_rule(
            NamingRule::new("/Script/Engine.Material")
                .with_prefix("M_")
                .with_priority(1),
        );

        let json = format_rules_json(&table).expect("rules should serialise");
        let value: serde_json::Value = serde_json::from_str(&json).expect("output should be JSON");

        assert_eq!(value["rules"][0]["target_class"], "/Script/Engine.Material");
        assert_eq!(value["rules"][1]["prefix"], "T_");
    }
}
