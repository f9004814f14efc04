//! The validation pipeline.
//!
//! Each asset walks a fixed sequence of stages and stops at the first
//! decisive one:
//!
//! 1. path exclusion;
//! 2. real-class resolution;
//! 3. class exclusion;
//! 4. validator dispatch;
//! 5. the rule table, resolved by class specificity;
//! 6. the generic blueprint fallback.
//!
//! Anything left undecided is `Unknown`. Stages 3 to 5 only run when the
//! hierarchy knows the asset's class.
//!
//! Configuration lives in an immutable [`EngineSnapshot`]. Reconfiguring the
//! pipeline swaps in a fresh snapshot with the next epoch number; a snapshot
//! is never mutated in place.

use std::sync::Arc;

use common::{AssetIdentity, ClassHierarchy, Verdict};
use log::{Level, debug, info, log};

use crate::config::NamingSettings;
use crate::exclusion::{ClassExclusions, ExclusionPolicy};
use crate::report::BatchReport;
use crate::resolver::resolve;
use crate::rules::RuleTable;
use crate::validators::ValidatorRegistry;

const LOG_TARGET: &str = "nomenclator::pipeline";

/// Reason attached to assets whose class cannot be determined.
pub const CLASS_NOT_RESOLVABLE: &str = "class not resolvable";

/// Immutable configuration one validation run is evaluated against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineSnapshot {
    epoch: u64,
    rules: RuleTable,
    exclusions: ExclusionPolicy,
    excluded_classes: ClassExclusions,
    blueprint_prefix: String,
    use_validators: bool,
    warn_on_unknown: bool,
}

impl EngineSnapshot {
    /// Builds a snapshot from `settings`, binding rules and excluded classes
    /// against `hierarchy`.
    #[must_use]
    pub fn build<H>(settings: &NamingSettings, hierarchy: &H, epoch: u64) -> Self
    where
        H: ClassHierarchy + ?Sized,
    {
        let mut rules = RuleTable::from_settings(&settings.rule_settings());
        rules.bind(hierarchy);

        Self {
            epoch,
            rules,
            exclusions: ExclusionPolicy::from_settings(settings),
            excluded_classes: ClassExclusions::resolve(&settings.excluded_classes, hierarchy),
            blueprint_prefix: settings.blueprint_prefix.clone(),
            use_validators: settings.use_validators,
            warn_on_unknown: settings.warn_on_unknown,
        }
    }

    /// Configuration epoch; incremented on every reconfiguration.
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The bound, sorted rule table.
    #[must_use]
    pub const fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// The directory exclusion policy.
    #[must_use]
    pub const fn exclusions(&self) -> &ExclusionPolicy {
        &self.exclusions
    }

    /// Prefix required of generic blueprint assets.
    #[must_use]
    pub fn blueprint_prefix(&self) -> &str {
        &self.blueprint_prefix
    }

    /// Whether registered validators are consulted.
    #[must_use]
    pub const fn use_validators(&self) -> bool {
        self.use_validators
    }

    /// Whether assets without a known convention should be surfaced as
    /// warnings.
    #[must_use]
    pub const fn warn_on_unknown(&self) -> bool {
        self.warn_on_unknown
    }
}

/// Validates assets against one configuration snapshot and validator set.
///
/// # Examples
///
/// ```
/// use common::{AssetIdentity, ClassTree, Verdict};
/// use nomenclator::{NamingPipeline, NamingSettings, RuleSettings};
///
/// let hierarchy = ClassTree::new().with_class("/Script/Engine.Material", None);
/// let settings = NamingSettings {
///     rules: Some(vec![RuleSettings::prefixed("/Script/Engine.Material", "M_")]),
///     ..NamingSettings::default()
/// };
/// let pipeline = NamingPipeline::new(&settings, hierarchy);
///
/// let rock = AssetIdentity::new("M_Rock", "/Script/Engine.Material", "/Game/Props/M_Rock");
/// assert_eq!(pipeline.validate_one(&rock), Verdict::Valid);
/// ```
#[derive(Debug)]
pub struct NamingPipeline<H> {
    hierarchy: H,
    snapshot: Arc<EngineSnapshot>,
    registry: ValidatorRegistry,
}

impl<H> NamingPipeline<H>
where
    H: ClassHierarchy + Sync,
{
    /// Creates a pipeline with no validators registered.
    #[must_use]
    pub fn new(settings: &NamingSettings, hierarchy: H) -> Self {
        let snapshot = Arc::new(EngineSnapshot::build(settings, &hierarchy, 0));
        Self {
            hierarchy,
            snapshot,
            registry: ValidatorRegistry::new(),
        }
    }

    /// Replaces the configuration snapshot. Snapshots handed out earlier are
    /// left untouched.
    pub fn reconfigure(&mut self, settings: &NamingSettings) {
        let epoch = self.snapshot.epoch() + 1;
        self.snapshot = Arc::new(EngineSnapshot::build(settings, &self.hierarchy, epoch));
        debug!(target: LOG_TARGET, "reconfigured naming engine (epoch {epoch})");
    }

    /// The snapshot currently in effect.
    #[must_use]
    pub fn snapshot(&self) -> Arc<EngineSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// The class hierarchy the pipeline resolves against.
    #[must_use]
    pub const fn hierarchy(&self) -> &H {
        &self.hierarchy
    }

    /// The registered validators.
    #[must_use]
    pub const fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    /// Mutable access for registering or removing validators between batches.
    pub const fn registry_mut(&mut self) -> &mut ValidatorRegistry {
        &mut self.registry
    }

    /// Computes the verdict for a single asset.
    #[must_use]
    pub fn validate_one(&self, asset: &AssetIdentity) -> Verdict {
        let verdict = self.evaluate(asset);
        self.log_verdict(asset, &verdict);
        verdict
    }

    /// Validates every asset and aggregates the verdicts.
    ///
    /// The whole batch is always processed, whatever verdicts earlier assets
    /// received. With the `parallel` feature each `rayon` worker fills its
    /// own partial report and the partials are merged in input order, so the
    /// report is identical to a sequential run.
    #[must_use]
    pub fn validate_batch(&self, assets: &[AssetIdentity]) -> BatchReport {
        let report = self.aggregate(assets);
        info!(target: LOG_TARGET, "{}", report.summary());
        report
    }

    #[cfg(not(feature = "parallel"))]
    fn aggregate(&self, assets: &[AssetIdentity]) -> BatchReport {
        assets.iter().fold(BatchReport::new(), |report, asset| {
            self.record_into(report, asset)
        })
    }

    #[cfg(feature = "parallel")]
    fn aggregate(&self, assets: &[AssetIdentity]) -> BatchReport {
        use rayon::prelude::*;

        assets
            .par_iter()
            .fold(BatchReport::new, |report, asset| {
                self.record_into(report, asset)
            })
            .reduce(BatchReport::new, |mut left, right| {
                left.merge(right);
                left
            })
    }

    fn record_into(&self, mut report: BatchReport, asset: &AssetIdentity) -> BatchReport {
        report.record(asset, self.validate_one(asset));
        report
    }

    fn evaluate(&self, asset: &AssetIdentity) -> Verdict {
        let snapshot = self.snapshot.as_ref();

        if let Some(reason) = snapshot.exclusions.check_path(&asset.package) {
            return Verdict::Excluded(reason.to_string());
        }

        let Some(class) = asset.real_class() else {
            return Verdict::Unknown(Some(CLASS_NOT_RESOLVABLE.to_owned()));
        };
        let name = asset.validation_name();

        let known = self.hierarchy.contains(&class);
        if known {
            if let Some(reason) = snapshot.excluded_classes.check(&class, &self.hierarchy) {
                return Verdict::Excluded(reason.to_string());
            }

            if snapshot.use_validators {
                let verdict = self.registry.dispatch(&class, asset);
                if verdict.is_decisive() {
                    return verdict;
                }
            }

            let verdict = resolve(&class, name, snapshot.rules.sorted_rules(), &self.hierarchy);
            if verdict.is_decisive() {
                return verdict;
            }
        } else {
            debug!(
                target: LOG_TARGET,
                "class `{class}` of {} is unknown to the class hierarchy",
                asset.object_path()
            );
        }

        if asset.is_generic_blueprint() {
            return generic_fallback(name, &snapshot.blueprint_prefix);
        }

        Verdict::Unknown(Some(if known {
            format!("no naming convention covers class '{class}'")
        } else {
            format!("class '{class}' is unknown to the class hierarchy")
        }))
    }

    fn log_verdict(&self, asset: &AssetIdentity, verdict: &Verdict) {
        let path = asset.object_path();
        match verdict {
            Verdict::Valid => {
                debug!(target: LOG_TARGET, "{path} matches naming convention");
            }
            Verdict::Invalid(reason) => {
                debug!(target: LOG_TARGET, "{path} does not match naming convention: {reason}");
            }
            Verdict::Excluded(reason) => debug!(
                target: LOG_TARGET,
                "{path} has not been tested based on the configuration: {reason}"
            ),
            Verdict::Unknown(reason) => {
                let level = if self.snapshot.warn_on_unknown {
                    Level::Warn
                } else {
                    Level::Debug
                };
                let detail = reason
                    .as_deref()
                    .map(|text| format!(": {text}"))
                    .unwrap_or_default();
                log!(target: LOG_TARGET, level, "{path} has no known naming convention{detail}");
            }
        }
    }
}

fn generic_fallback(name: &str, prefix: &str) -> Verdict {
    if name.starts_with(prefix) {
        Verdict::Valid
    } else {
        Verdict::Invalid(format!("Generic blueprint assets must start with {prefix}"))
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
