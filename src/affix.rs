//! Pure prefix/suffix matching of asset names against a naming rule.
//!
//! Comparisons are case-sensitive and exact. An empty affix never constrains
//! the name.

use thiserror::Error;

use crate::rules::NamingRule;

/// Why a name does not satisfy a rule's affixes.
///
/// The `Display` output is the human-readable reason reported for the asset.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AffixMismatch {
    /// The name lacks the required prefix.
    #[error("Assets of class '{label}' must have a name which starts with {prefix}")]
    Prefix {
        /// Label of the offending rule.
        label: String,
        /// The expected prefix.
        prefix: String,
    },

    /// The name lacks the required suffix.
    #[error("Assets of class '{label}' must have a name which ends with {suffix}")]
    Suffix {
        /// Label of the offending rule.
        label: String,
        /// The expected suffix.
        suffix: String,
    },

    /// The name lacks both the required prefix and suffix.
    #[error(
        "Assets of class '{label}' must have a name which starts with {prefix} and ends with {suffix}"
    )]
    PrefixAndSuffix {
        /// Label of the offending rule.
        label: String,
        /// The expected prefix.
        prefix: String,
        /// The expected suffix.
        suffix: String,
    },
}

/// Checks `name` against the affixes of `rule`.
///
/// # Errors
///
/// Returns an [`AffixMismatch`] naming the missing affix and the rule's label
/// when the name does not match.
///
/// # Examples
///
/// ```
/// use nomenclator::{NamingRule, affix::matches};
///
/// let rule = NamingRule::new("/Script/Engine.Blueprint").with_prefix("BP_");
///
/// assert!(matches("BP_Foo", &rule).is_ok());
/// let reason = matches("Foo", &rule).expect_err("missing prefix").to_string();
/// assert!(reason.contains("BP_"));
/// ```
pub fn matches(name: &str, rule: &NamingRule) -> Result<(), AffixMismatch> {
    let prefix_ok = rule.prefix().is_empty() || name.starts_with(rule.prefix());
    let suffix_ok = rule.suffix().is_empty() || name.ends_with(rule.suffix());
    let label = || rule.source_label().to_owned();

    match (prefix_ok, suffix_ok) {
        (true, true) => Ok(()),
        (false, true) => Err(AffixMismatch::Prefix {
            label: label(),
            prefix: rule.prefix().to_owned(),
        }),
        (true, false) => Err(AffixMismatch::Suffix {
            label: label(),
            suffix: rule.suffix().to_owned(),
        }),
        (false, false) => Err(AffixMismatch::PrefixAndSuffix {
            label: label(),
            prefix: rule.prefix().to_owned(),
            suffix: rule.suffix().to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rule(prefix: &str, suffix: &str) -> NamingRule {
        NamingRule::new("/Script/Engine.Texture")
            .with_prefix(prefix)
            .with_suffix(suffix)
            .with_label("Texture")
    }

    #[rstest]
    #[case::prefix_match("T_Rock", "T_", "", true)]
    #[case::prefix_miss("Rock", "T_", "", false)]
    #[case::prefix_is_case_sensitive("t_Rock", "T_", "", false)]
    #[case::suffix_match("T_Rock_N", "", "_N", true)]
    #[case::suffix_miss("T_Rock", "", "_N", false)]
    #[case::both_match("T_Rock_N", "T_", "_N", true)]
    #[case::both_miss("Rock", "T_", "_N", false)]
    #[case::unconstrained("anything", "", "", true)]
    #[case::empty_name_unconstrained("", "", "", true)]
    #[case::affix_is_whole_name("T_", "T_", "", true)]
    #[case::multibyte_prefix("Ü_Rock", "Ü_", "", true)]
    fn matches_affixes(
        #[case] name: &str,
        #[case] prefix: &str,
        #[case] suffix: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(matches(name, &rule(prefix, suffix)).is_ok(), expected);
    }

    #[rstest]
    fn prefix_reason_names_the_rule_and_affix() {
        let reason = matches("Rock", &rule("T_", ""))
            .expect_err("missing prefix should fail")
            .to_string();

        assert_eq!(
            reason,
            "Assets of class 'Texture' must have a name which starts with T_"
        );
    }

    #[rstest]
    fn suffix_reason_names_the_rule_and_affix() {
        let mismatch = matches("T_Rock", &rule("T_", "_N")).expect_err("missing suffix should fail");

        assert_eq!(
            mismatch,
            AffixMismatch::Suffix {
                label: "Texture".to_owned(),
                suffix: "_N".to_owned(),
            }
        );
    }

    #[rstest]
    fn double_mismatch_reports_both_affixes() {
        let reason = matches("Rock", &rule("T_", "_N"))
            .expect_err("missing affixes should fail")
            .to_string();

        assert!(reason.contains("T_") && reason.contains("_N"));
    }

    #[rstest]
    fn repeated_calls_agree() {
        let rule = rule("T_", "_N");

        assert_eq!(matches("Rock_N", &rule), matches("Rock_N", &rule));
    }
}
