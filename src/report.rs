//! Aggregation of per-asset verdicts into a batch report.

use common::{AssetIdentity, ClassPath, Verdict, VerdictKind};
use serde::Serialize;

/// Verdict recorded for one asset that did not pass cleanly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AssetDiagnostic {
    /// `package.name` object path of the asset.
    pub object_path: String,
    /// Package path the asset lives in.
    pub package: String,
    /// Class recorded for the asset.
    pub class: ClassPath,
    /// The asset's verdict.
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Counts and diagnostics for one batch.
///
/// Counting follows the commandlet's summary: excluded assets are skipped and
/// do not count as checked, while assets nobody had an opinion about are
/// checked and also counted as unable to validate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    checked: usize,
    valid: usize,
    invalid: usize,
    excluded: usize,
    unable_to_validate: usize,
    diagnostics: Vec<AssetDiagnostic>,
}

impl BatchReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the verdict reached for `asset`.
    pub fn record(&mut self, asset: &AssetIdentity, verdict: Verdict) {
        match &verdict {
            Verdict::Valid => {
                self.checked += 1;
                self.valid += 1;
                return;
            }
            Verdict::Invalid(_) => {
                self.checked += 1;
                self.invalid += 1;
            }
            Verdict::Excluded(_) => self.excluded += 1,
            Verdict::Unknown(_) => {
                self.checked += 1;
                self.unable_to_validate += 1;
            }
        }

        self.diagnostics.push(AssetDiagnostic {
            object_path: asset.object_path(),
            package: asset.package.clone(),
            class: asset.class.clone(),
            verdict,
        });
    }

    /// Appends `other` to this report, keeping diagnostics in order.
    ///
    /// Parallel batches merge per-worker partial reports with it; callers
    /// that shard a batch themselves can do the same.
    pub fn merge(&mut self, other: Self) {
        self.checked += other.checked;
        self.valid += other.valid;
        self.invalid += other.invalid;
        self.excluded += other.excluded;
        self.unable_to_validate += other.unable_to_validate;
        self.diagnostics.extend(other.diagnostics);
    }

    /// Returns `true` when any asset is invalid.
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.invalid > 0
    }

    /// `SUCCEEDED` or `FAILED`.
    #[must_use]
    pub const fn outcome(&self) -> &'static str {
        if self.failed() { "FAILED" } else { "SUCCEEDED" }
    }

    /// One-line summary of the batch.
    ///
    /// # Examples
    ///
    /// ```
    /// use nomenclator::BatchReport;
    ///
    /// assert_eq!(
    ///     BatchReport::new().summary(),
    ///     "Naming convention validation SUCCEEDED. Files checked: 0, passed: 0, failed: 0, skipped: 0, unable to validate: 0",
    /// );
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Naming convention validation {}. Files checked: {}, passed: {}, failed: {}, skipped: {}, unable to validate: {}",
            self.outcome(),
            self.checked,
            self.valid,
            self.invalid,
            self.excluded,
            self.unable_to_validate
        )
    }

    /// Assets that received a verdict, excluded ones aside.
    #[must_use]
    pub const fn checked(&self) -> usize {
        self.checked
    }

    /// Assets with a valid name.
    #[must_use]
    pub const fn valid(&self) -> usize {
        self.valid
    }

    /// Assets with an invalid name.
    #[must_use]
    pub const fn invalid(&self) -> usize {
        self.invalid
    }

    /// Assets skipped because configuration excludes them.
    #[must_use]
    pub const fn excluded(&self) -> usize {
        self.excluded
    }

    /// Assets no rule or validator had an opinion about.
    #[must_use]
    pub const fn unable_to_validate(&self) -> usize {
        self.unable_to_validate
    }

    /// Diagnostics for every asset that was not valid, in input order.
    #[must_use]
    pub fn diagnostics(&self) -> &[AssetDiagnostic] {
        &self.diagnostics
    }

    /// Diagnostics whose verdict is of `kind`.
    pub fn diagnostics_of(&self, kind: VerdictKind) -> impl Iterator<Item = &AssetDiagnostic> {
        self.diagnostics
            .iter()
            .filter(move |diagnostic| diagnostic.verdict.kind() == kind)
    }
}
