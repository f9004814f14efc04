//! Class specificity resolution over the rule table.
//!
//! The most specific applicable rule wins. Priority only orders rules that
//! target the same class; a rule for a descendant class always beats a rule
//! for one of its ancestors, whatever their priorities.
//!
//! Rules at the same precision are evaluated in table order and a later one
//! may replace an `Invalid` result, but never a `Valid` one. A passing verdict
//! at a given precision therefore cannot be overturned by a sibling rule.

use common::{ClassHierarchy, ClassPath, Verdict};

use crate::affix;
use crate::rules::NamingRule;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Precision {
    More,
    Same,
    Less,
}

/// Resolves the verdict for an asset of `asset_class` named `asset_name`.
///
/// `rules` must be in rule table order. Unresolvable rules are skipped.
/// Returns `Verdict::Unknown` when no rule applies.
///
/// # Examples
///
/// ```
/// use common::{ClassPath, ClassTree, Verdict};
/// use nomenclator::{NamingRule, RuleTable, resolver::resolve};
///
/// let hierarchy = ClassTree::new().with_class("/Script/Engine.Material", None);
/// let mut table = RuleTable::new();
/// table.add_rule(NamingRule::new("/Script/CoreUObject.Object").with_prefix("O_"));
/// table.add_rule(NamingRule::new("/Script/Engine.Material").with_prefix("M_"));
///
/// let class = ClassPath::new("/Script/Engine.Material");
/// let verdict = resolve(&class, "M_Rock", table.sorted_rules(), &hierarchy);
/// assert_eq!(verdict, Verdict::Valid);
/// ```
pub fn resolve<H>(
    asset_class: &ClassPath,
    asset_name: &str,
    rules: &[NamingRule],
    hierarchy: &H,
) -> Verdict
where
    H: ClassHierarchy + ?Sized,
{
    let root = ClassPath::root();
    let mut most_precise = &root;
    let mut result = Verdict::unknown();

    for rule in rules.iter().filter(|rule| rule.is_resolvable()) {
        let target = rule.target_class();
        if !hierarchy.is_descendant_or_equal(asset_class, target) {
            continue;
        }

        let eligible = match precision(target, most_precise, hierarchy) {
            Precision::More => true,
            Precision::Same => result != Verdict::Valid,
            Precision::Less => false,
        };
        if !eligible {
            continue;
        }

        most_precise = target;
        result = match affix::matches(asset_name, rule) {
            Ok(()) => Verdict::Valid,
            Err(mismatch) => Verdict::Invalid(mismatch.to_string()),
        };
    }

    result
}

fn precision<H>(candidate: &ClassPath, current: &ClassPath, hierarchy: &H) -> Precision
where
    H: ClassHierarchy + ?Sized,
{
    if candidate == current {
        Precision::Same
    } else if hierarchy.is_descendant_or_equal(candidate, current) {
        Precision::More
    } else {
        Precision::Less
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
