//! Path and class exclusion.
//!
//! Exclusion is the first pipeline stage and dominates every other check: an
//! excluded asset is never validated, however well it is named.

use std::fmt;

use common::{ClassHierarchy, ClassPath};
use log::warn;

use crate::config::NamingSettings;

const LOG_TARGET: &str = "nomenclator::exclusion";

/// Root of the project's own content.
pub const PRIMARY_FOLDER: &str = "/Game/";

/// Per-developer scratch folders inside the project content.
pub const DEVELOPERS_FOLDER: &str = "/Game/Developers/";

/// Engine content, which is always excluded.
pub const ENGINE_FOLDER: &str = "/Engine/";

/// Why an asset was excluded from validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExclusionReason {
    /// The asset lives outside `/Game/` and is not allow-listed.
    OutsidePrimaryFolder,
    /// The asset lives in the developers folder.
    DevelopersFolder,
    /// The asset lives under an excluded directory.
    ExcludedDirectory(String),
    /// The asset's class descends from an excluded class.
    ExcludedClass(ClassPath),
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutsidePrimaryFolder => write!(
                f,
                "The asset is outside {PRIMARY_FOLDER} and not in a directory allowed for validation"
            ),
            Self::DevelopersFolder => {
                write!(f, "The asset is in the developers folder {DEVELOPERS_FOLDER}")
            }
            Self::ExcludedDirectory(directory) => {
                write!(f, "The asset is in an excluded directory ({directory})")
            }
            Self::ExcludedClass(class) => write!(
                f,
                "Assets of class '{}' are excluded from naming convention validation",
                class.short_name()
            ),
        }
    }
}

/// Directory-based exclusion rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExclusionPolicy {
    excluded_directories: Vec<String>,
    allow_developers_folder: bool,
    primary_folder_only: bool,
    non_primary_directories: Vec<String>,
    non_primary_tokens: Vec<String>,
}

impl ExclusionPolicy {
    /// Builds the policy from engine settings, always excluding
    /// [`ENGINE_FOLDER`].
    #[must_use]
    pub fn from_settings(settings: &NamingSettings) -> Self {
        let mut excluded_directories = non_blank(&settings.excluded_directories);
        if !excluded_directories
            .iter()
            .any(|directory| directory == ENGINE_FOLDER)
        {
            excluded_directories.push(ENGINE_FOLDER.to_owned());
        }

        Self {
            excluded_directories,
            allow_developers_folder: settings.allow_developers_folder,
            primary_folder_only: settings.primary_folder_only,
            non_primary_directories: non_blank(&settings.non_primary_directories),
            non_primary_tokens: non_blank(&settings.non_primary_tokens),
        }
    }

    /// Returns why `package_path` is excluded, or `None` when assets there
    /// should be validated.
    ///
    /// # Examples
    ///
    /// ```
    /// use nomenclator::{ExclusionPolicy, NamingSettings};
    ///
    /// let policy = ExclusionPolicy::from_settings(&NamingSettings::default());
    ///
    /// assert!(policy.check_path("/Game/Props/M_Rock").is_none());
    /// assert!(policy.check_path("/Engine/BasicShapes/Cube").is_some());
    /// assert!(policy.check_path("/Game/Developers/sam/M_Test").is_some());
    /// ```
    #[must_use]
    pub fn check_path(&self, package_path: &str) -> Option<ExclusionReason> {
        if self.primary_folder_only
            && !package_path.starts_with(PRIMARY_FOLDER)
            && !self.is_allow_listed(package_path)
        {
            return Some(ExclusionReason::OutsidePrimaryFolder);
        }

        if !self.allow_developers_folder && package_path.starts_with(DEVELOPERS_FOLDER) {
            return Some(ExclusionReason::DevelopersFolder);
        }

        self.excluded_directories
            .iter()
            .find(|directory| package_path.starts_with(directory.as_str()))
            .map(|directory| ExclusionReason::ExcludedDirectory(directory.clone()))
    }

    /// Directories excluded by prefix, including [`ENGINE_FOLDER`].
    #[must_use]
    pub fn excluded_directories(&self) -> &[String] {
        &self.excluded_directories
    }

    fn is_allow_listed(&self, package_path: &str) -> bool {
        self.non_primary_directories
            .iter()
            .any(|directory| package_path.starts_with(directory.as_str()))
            || self
                .non_primary_tokens
                .iter()
                .any(|token| package_path.contains(token.as_str()))
    }
}

/// Classes whose descendants are excluded from validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassExclusions {
    classes: Vec<ClassPath>,
}

impl ClassExclusions {
    /// Resolves the configured class paths against `hierarchy`. Paths the
    /// hierarchy does not know are logged and dropped.
    #[must_use]
    pub fn resolve<H>(paths: &[String], hierarchy: &H) -> Self
    where
        H: ClassHierarchy + ?Sized,
    {
        let classes = paths
            .iter()
            .map(|path| ClassPath::new(path.trim()))
            .filter(|class| {
                let known = !class.is_empty() && hierarchy.contains(class);
                if !known {
                    warn!(
                        target: LOG_TARGET,
                        "impossible to resolve excluded class `{class}`; it will be ignored"
                    );
                }
                known
            })
            .collect();
        Self { classes }
    }

    /// Returns the exclusion reason when `class` descends from an excluded
    /// class.
    #[must_use]
    pub fn check<H>(&self, class: &ClassPath, hierarchy: &H) -> Option<ExclusionReason>
    where
        H: ClassHierarchy + ?Sized,
    {
        self.classes
            .iter()
            .find(|excluded| hierarchy.is_descendant_or_equal(class, excluded))
            .map(|excluded| ExclusionReason::ExcludedClass(excluded.clone()))
    }

    /// Returns `true` when no class is excluded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

fn non_blank(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .collect()
}
