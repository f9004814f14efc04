//! Asset identities supplied by the indexing collaborator.
//!
//! An [`AssetIdentity`] is immutable input to validation. Besides the asset's
//! name and container path it carries the class recorded by the index and the
//! raw index tags, from which [`AssetIdentity::real_class`] recovers the class
//! that naming rules should be matched against.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::class::ClassPath;

/// Index tag holding the closest native ancestor of a scripted asset class.
pub const NATIVE_PARENT_CLASS_TAG: &str = "NativeParentClass";

/// Index tag holding the native class of an asset.
pub const NATIVE_CLASS_TAG: &str = "NativeClass";

/// Class recorded for generic blueprint assets.
pub const BLUEPRINT_CLASS: &str = "/Script/Engine.Blueprint";

/// Class recorded for generated blueprint classes, whose names end in `_C`.
pub const BLUEPRINT_GENERATED_CLASS: &str = "/Script/Engine.BlueprintGeneratedClass";

const GENERATED_CLASS_SUFFIX: &str = "_C";

/// Identity of one content asset as reported by the index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetIdentity {
    /// Display name of the asset, for example `M_Rock`.
    pub name: String,
    /// Class recorded for the asset by the index.
    pub class: ClassPath,
    /// Logical package path, for example `/Game/Props/M_Rock`.
    pub package: String,
    /// Raw index tags.
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl AssetIdentity {
    /// Creates an identity without tags.
    #[must_use]
    pub fn new(name: impl Into<String>, class: impl Into<ClassPath>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            package: package.into(),
            tags: BTreeMap::new(),
        }
    }

    /// Adds an index tag.
    #[must_use]
    pub fn with_tag(mut self, key: &str, value: &str) -> Self {
        self.tags.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Returns the `package.name` object path used to look the asset up.
    #[must_use]
    pub fn object_path(&self) -> String {
        format!("{}.{}", self.package, self.name)
    }

    /// Resolves the class naming rules should be matched against.
    ///
    /// The native parent class tag wins over the native class tag, which wins
    /// over the class recorded for the asset. Tag values may be plain class
    /// paths or exported references such as
    /// `/Script/CoreUObject.Class'/Script/Engine.Actor'`.
    ///
    /// # Examples
    ///
    /// ```
    /// use common::{AssetIdentity, ClassPath, NATIVE_PARENT_CLASS_TAG};
    ///
    /// let asset = AssetIdentity::new("BP_Door", "/Script/Engine.Blueprint", "/Game/BP_Door")
    ///     .with_tag(NATIVE_PARENT_CLASS_TAG, "/Script/CoreUObject.Class'/Script/Engine.Actor'");
    ///
    /// assert_eq!(asset.real_class(), Some(ClassPath::new("/Script/Engine.Actor")));
    /// ```
    #[must_use]
    pub fn real_class(&self) -> Option<ClassPath> {
        [NATIVE_PARENT_CLASS_TAG, NATIVE_CLASS_TAG]
            .iter()
            .filter_map(|key| self.tags.get(*key))
            .filter_map(|value| unwrap_exported_reference(value))
            .map(ClassPath::new)
            .next()
            .or_else(|| (!self.class.is_empty()).then(|| self.class.clone()))
    }

    /// Returns the name affix checks should run against.
    ///
    /// Generated blueprint classes carry a trailing `_C` which is not part of
    /// the name authors chose.
    #[must_use]
    pub fn validation_name(&self) -> &str {
        if self.class.as_str() == BLUEPRINT_GENERATED_CLASS {
            self.name
                .strip_suffix(GENERATED_CLASS_SUFFIX)
                .unwrap_or(&self.name)
        } else {
            &self.name
        }
    }

    /// Returns `true` when the asset belongs to the generic blueprint category
    /// that falls back to the configured blueprint prefix.
    #[must_use]
    pub fn is_generic_blueprint(&self) -> bool {
        matches!(
            self.class.as_str(),
            BLUEPRINT_CLASS | BLUEPRINT_GENERATED_CLASS
        )
    }
}

fn unwrap_exported_reference(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    let inner = match (trimmed.find('\''), trimmed.rfind('\'')) {
        (Some(start), Some(end)) if end > start => trimmed.get(start + 1..end)?,
        _ => trimmed,
    };
    (!inner.is_empty()).then_some(inner)
}
