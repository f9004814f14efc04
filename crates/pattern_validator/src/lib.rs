//! Name validator checking assets against per-class regular expressions.
//!
//! Patterns are read from the `[pattern_validator]` table of the Nomenclator
//! configuration file. Each pattern applies to a class and its descendants;
//! when several patterns apply, the one for the most specific class is used.
//!
//! ```toml
//! [pattern_validator]
//! patterns = [
//!     { class = "/Script/Engine.Texture", pattern = "^T_[A-Z][A-Za-z0-9]*(_[A-Z]+)?$" },
//! ]
//! ```

use std::fmt;
use std::sync::Arc;

use common::{AssetIdentity, ClassHierarchy, ClassPath, Verdict};
use log::{debug, warn};
use nomenclator::{NameValidator, ValidatorFault};
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

const LOG_TARGET: &str = "pattern_validator";

/// Configuration read from the `[pattern_validator]` table.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PatternValidatorConfig {
    /// Set to `false` to keep the validator registered but inactive.
    pub enabled: bool,
    /// Naming patterns keyed by class.
    pub patterns: Vec<PatternSettings>,
}

impl PatternValidatorConfig {
    /// Name of the configuration table.
    pub const SECTION: &'static str = "pattern_validator";

    /// Loads the configuration using the supplied loader.
    #[must_use]
    pub fn load_with<F>(section: &str, loader: F) -> Self
    where
        F: FnOnce(&str) -> Self,
    {
        loader(section)
    }
}

impl Default for PatternValidatorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            patterns: Vec::new(),
        }
    }
}

/// One naming pattern as written in configuration.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PatternSettings {
    /// Class the pattern applies to, including descendants.
    pub class: String,
    /// Regular expression the asset name must match.
    pub pattern: String,
    /// Human-readable description used in diagnostics.
    #[serde(default)]
    pub description: Option<String>,
}

/// Errors raised while building a [`PatternValidator`].
#[derive(Debug, Error)]
pub enum PatternError {
    /// A configured pattern is not a valid regular expression.
    #[error("invalid naming pattern for class `{class}`")]
    InvalidPattern {
        /// Class the pattern was configured for.
        class: String,
        /// The regular expression compiler's error.
        #[source]
        source: regex::Error,
    },
}

struct CompiledPattern {
    class: ClassPath,
    regex: Regex,
    description: String,
}

/// Validator matching asset names against configured regular expressions.
pub struct PatternValidator {
    enabled: bool,
    patterns: Vec<CompiledPattern>,
    hierarchy: Arc<dyn ClassHierarchy + Send + Sync>,
}

impl PatternValidator {
    /// Compiles the configured patterns.
    ///
    /// Patterns whose class `hierarchy` cannot resolve are logged and ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidPattern`] for the first pattern that
    /// does not compile.
    pub fn new(
        config: &PatternValidatorConfig,
        hierarchy: Arc<dyn ClassHierarchy + Send + Sync>,
    ) -> Result<Self, PatternError> {
        let mut patterns = Vec::with_capacity(config.patterns.len());
        for settings in &config.patterns {
            let regex =
                Regex::new(&settings.pattern).map_err(|source| PatternError::InvalidPattern {
                    class: settings.class.clone(),
                    source,
                })?;
            let class = ClassPath::new(settings.class.trim());
            if !hierarchy.contains(&class) {
                warn!(
                    target: LOG_TARGET,
                    "impossible to resolve class `{class}` for naming pattern; it will be ignored"
                );
                continue;
            }
            let description = settings
                .description
                .clone()
                .unwrap_or_else(|| format!("/{}/", settings.pattern));
            patterns.push(CompiledPattern {
                class,
                regex,
                description,
            });
        }

        debug!(
            target: LOG_TARGET,
            "compiled {} naming pattern(s)",
            patterns.len()
        );
        Ok(Self {
            enabled: config.enabled,
            patterns,
            hierarchy,
        })
    }

    /// Number of active patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` when no pattern is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    fn pattern_for(&self, class: &ClassPath) -> Option<&CompiledPattern> {
        self.patterns
            .iter()
            .filter(|pattern| self.hierarchy.is_descendant_or_equal(class, &pattern.class))
            .fold(None, |best: Option<&CompiledPattern>, candidate| match best {
                Some(current)
                    if !self
                        .hierarchy
                        .is_descendant_or_equal(&candidate.class, &current.class) =>
                {
                    Some(current)
                }
                _ => Some(candidate),
            })
    }
}

impl NameValidator for PatternValidator {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn can_validate(&self, class: &ClassPath, _asset: &AssetIdentity) -> bool {
        self.pattern_for(class).is_some()
    }

    fn validate(&self, class: &ClassPath, asset: &AssetIdentity) -> Result<Verdict, ValidatorFault> {
        let Some(pattern) = self.pattern_for(class) else {
            return Ok(Verdict::unknown());
        };

        let name = asset.validation_name();
        if pattern.regex.is_match(name) {
            return Ok(Verdict::Valid);
        }

        Ok(Verdict::Invalid(format!(
            "Assets of class '{}' must have a name matching {}",
            pattern.class.short_name(),
            pattern.description
        )))
    }
}

impl fmt::Debug for PatternValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternValidator")
            .field("enabled", &self.enabled)
            .field(
                "patterns",
                &self
                    .patterns
                    .iter()
                    .map(|pattern| (pattern.class.as_str(), pattern.regex.as_str()))
                    .collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
