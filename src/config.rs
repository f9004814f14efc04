//! Configuration loader for the naming engine and its validators.
//!
//! A Nomenclator configuration file is a TOML document with one table per
//! consumer. The engine reads `[naming]` into [`NamingSettings`]; pluggable
//! validators read their own tables (for example `[pattern_validator]`) through
//! [`ConfigFile::section`]. Missing tables fall back to defaults so that an
//! empty file is a valid configuration, while unknown keys inside a table are
//! rejected to surface typos.

use std::borrow::Cow;

use camino::Utf8Path;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::defaults::default_rules;
use crate::error::{ConfigError, Result};

/// Engine settings read from the `[naming]` table.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag is an independent key of the `[naming]` table"
)]
pub struct NamingSettings {
    /// Package path prefixes whose assets are never validated. `/Engine/` is
    /// always added when the exclusion policy is built.
    pub excluded_directories: Vec<String>,
    /// Validate assets under `/Game/Developers/` when `true`.
    pub allow_developers_folder: bool,
    /// Only validate assets under `/Game/` unless they are allow-listed by
    /// [`Self::non_primary_directories`] or [`Self::non_primary_tokens`].
    pub primary_folder_only: bool,
    /// Prefixes of directories outside `/Game/` that are still validated.
    pub non_primary_directories: Vec<String>,
    /// Substrings which, when present in a path outside `/Game/`, keep the
    /// asset eligible for validation.
    pub non_primary_tokens: Vec<String>,
    /// Naming rules. When omitted the built-in defaults apply; an explicit
    /// empty list disables rule-based validation.
    pub rules: Option<Vec<RuleSettings>>,
    /// Classes whose descendants are excluded from validation.
    pub excluded_classes: Vec<String>,
    /// Prefix required of generic blueprint assets no rule covers.
    pub blueprint_prefix: String,
    /// Report assets without a known convention as warnings.
    pub warn_on_unknown: bool,
    /// Consult registered validators before the rule table.
    pub use_validators: bool,
}

impl NamingSettings {
    /// Name of the configuration table holding the engine settings.
    pub const SECTION: &'static str = "naming";

    /// Loads settings using the supplied loader.
    ///
    /// The loader receives the table name so that tests can inject settings
    /// without touching the file system, mirroring how validators resolve
    /// their own namespaces.
    ///
    /// # Examples
    ///
    /// ```
    /// use nomenclator::NamingSettings;
    ///
    /// let settings = NamingSettings::load_with(NamingSettings::SECTION, |_| NamingSettings::default());
    /// assert_eq!(settings.blueprint_prefix, "BP_");
    /// ```
    #[must_use]
    pub fn load_with<F>(section: &str, loader: F) -> Self
    where
        F: FnOnce(&str) -> Self,
    {
        loader(section)
    }

    /// Returns the configured rules, or the built-in defaults when the
    /// `rules` key is absent.
    #[must_use]
    pub fn rule_settings(&self) -> Cow<'_, [RuleSettings]> {
        self.rules
            .as_deref()
            .map_or_else(|| Cow::Owned(default_rules()), Cow::Borrowed)
    }
}

impl Default for NamingSettings {
    fn default() -> Self {
        Self {
            excluded_directories: Vec::new(),
            allow_developers_folder: false,
            primary_folder_only: true,
            non_primary_directories: Vec::new(),
            non_primary_tokens: Vec::new(),
            rules: None,
            excluded_classes: Vec::new(),
            blueprint_prefix: String::from("BP_"),
            warn_on_unknown: false,
            use_validators: true,
        }
    }
}

/// One naming rule as written in configuration.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RuleSettings {
    /// Class path the rule applies to, including descendants.
    pub class: String,
    /// Required name prefix; empty means unconstrained.
    #[serde(default)]
    pub prefix: String,
    /// Required name suffix; empty means unconstrained.
    #[serde(default)]
    pub suffix: String,
    /// Higher priorities are evaluated first among equally specific rules.
    #[serde(default)]
    pub priority: i32,
    /// Label used in diagnostics; defaults to the class path.
    #[serde(default)]
    pub label: Option<String>,
}

impl RuleSettings {
    /// Creates a prefix rule at priority zero.
    #[must_use]
    pub fn prefixed(class: &str, prefix: &str) -> Self {
        Self {
            class: class.to_owned(),
            prefix: prefix.to_owned(),
            suffix: String::new(),
            priority: 0,
            label: None,
        }
    }
}

/// A parsed configuration file handing out typed tables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigFile {
    table: toml::Table,
}

impl ConfigFile {
    /// Reads and parses the configuration at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not valid TOML.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::parse_from(&source, path.as_str())
    }

    /// Parses configuration held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when `source` is not valid TOML.
    ///
    /// # Examples
    ///
    /// ```
    /// use nomenclator::{ConfigFile, NamingSettings};
    ///
    /// let file = ConfigFile::parse("[naming]\nblueprint_prefix = \"B_\"\n")?;
    /// let settings: NamingSettings = file.section(NamingSettings::SECTION)?;
    /// assert_eq!(settings.blueprint_prefix, "B_");
    /// # Ok::<(), nomenclator::ConfigError>(())
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        Self::parse_from(source, "<inline>")
    }

    fn parse_from(source: &str, origin: &str) -> Result<Self> {
        let table = toml::from_str::<toml::Table>(source).map_err(|source| ConfigError::Parse {
            origin: origin.to_owned(),
            source,
        })?;
        Ok(Self { table })
    }

    /// Decodes the table called `name`, or returns `T::default()` when the
    /// file has no such table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Section`] when the table does not match `T`.
    pub fn section<T>(&self, name: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.table.get(name).map_or_else(
            || Ok(T::default()),
            |value| {
                value
                    .clone()
                    .try_into::<T>()
                    .map_err(|source| ConfigError::Section {
                        section: name.to_owned(),
                        source,
                    })
            },
        )
    }

    /// Returns the names of the tables present in the file.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}
