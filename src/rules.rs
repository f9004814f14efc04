//! The rule table: class-to-affix rules kept in a deterministic order.
//!
//! Rules are configuration data. They are loaded once, bound against the
//! class hierarchy so unresolvable classes are flagged, and sorted. During
//! validation the table is read-only.
//!
//! The order is total and stable:
//!
//! 1. rules whose class is unset or unresolvable come first, so configuration
//!    mistakes are visible at the top of any listing;
//! 2. higher priorities come before lower ones;
//! 3. ties are broken by the class name, then by the full class path.

use std::cmp::Ordering;

use common::{ClassHierarchy, ClassPath};
use log::{debug, warn};
use serde::Serialize;

use crate::config::RuleSettings;

const LOG_TARGET: &str = "nomenclator::rules";

/// A required prefix and/or suffix for assets of one class and its
/// descendants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NamingRule {
    target_class: ClassPath,
    prefix: String,
    suffix: String,
    priority: i32,
    source_label: String,
    resolvable: bool,
}

impl NamingRule {
    /// Creates an unconstrained rule for `target_class` labelled with the
    /// class path.
    #[must_use]
    pub fn new(target_class: impl Into<ClassPath>) -> Self {
        let target_class = target_class.into();
        Self {
            source_label: target_class.to_string(),
            resolvable: !target_class.is_empty(),
            target_class,
            prefix: String::new(),
            suffix: String::new(),
            priority: 0,
        }
    }

    /// Sets the required prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the required suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the label used in diagnostics.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.source_label = label.into();
        self
    }

    /// Builds a rule from its configuration entry.
    #[must_use]
    pub fn from_settings(settings: &RuleSettings) -> Self {
        let rule = Self::new(settings.class.trim())
            .with_prefix(settings.prefix.as_str())
            .with_suffix(settings.suffix.as_str())
            .with_priority(settings.priority);
        match settings.label.as_deref() {
            Some(label) if !label.trim().is_empty() => rule.with_label(label),
            _ => rule,
        }
    }

    /// Class the rule applies to.
    #[must_use]
    pub const fn target_class(&self) -> &ClassPath {
        &self.target_class
    }

    /// Required prefix; empty when unconstrained.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Required suffix; empty when unconstrained.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Priority among equally specific rules.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Label naming the rule in diagnostics.
    #[must_use]
    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    /// Returns `false` when the rule's class is unset or unknown to the
    /// hierarchy; such rules stay in the table but never match.
    #[must_use]
    pub const fn is_resolvable(&self) -> bool {
        self.resolvable
    }
}

/// Ordered collection of naming rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<NamingRule>,
}

impl RuleTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sorted table from configured rules.
    #[must_use]
    pub fn from_settings(settings: &[RuleSettings]) -> Self {
        let mut table = Self {
            rules: settings.iter().map(NamingRule::from_settings).collect(),
        };
        table.sort();
        table
    }

    /// Adds a rule and restores the table order.
    pub fn add_rule(&mut self, rule: NamingRule) {
        self.rules.push(rule);
        self.sort();
    }

    /// Flags rules whose class `hierarchy` cannot resolve and restores the
    /// table order. Returns the number of unresolvable rules.
    ///
    /// Unresolvable rules are a configuration error, not a fatal one: they are
    /// logged and kept so listings still show them.
    pub fn bind<H>(&mut self, hierarchy: &H) -> usize
    where
        H: ClassHierarchy + ?Sized,
    {
        let mut unresolved = 0;
        for rule in &mut self.rules {
            rule.resolvable =
                !rule.target_class.is_empty() && hierarchy.contains(&rule.target_class);
            if !rule.resolvable {
                unresolved += 1;
                warn!(
                    target: LOG_TARGET,
                    "impossible to resolve class `{}` for naming rule `{}`; the rule will never match",
                    rule.target_class,
                    rule.source_label
                );
            }
        }
        self.sort();
        debug!(
            target: LOG_TARGET,
            "bound {} naming rule(s), {unresolved} unresolvable",
            self.rules.len()
        );
        unresolved
    }

    /// Returns the rules in evaluation order.
    #[must_use]
    pub fn sorted_rules(&self) -> &[NamingRule] {
        &self.rules
    }

    /// Number of rules in the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` when the table holds no rules.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn sort(&mut self) {
        self.rules.sort_by(rule_order);
    }
}

fn rule_order(left: &NamingRule, right: &NamingRule) -> Ordering {
    left.resolvable
        .cmp(&right.resolvable)
        .then_with(|| right.priority.cmp(&left.priority))
        .then_with(|| {
            left.target_class
                .short_name()
                .cmp(right.target_class.short_name())
        })
        .then_with(|| left.target_class.cmp(&right.target_class))
}
