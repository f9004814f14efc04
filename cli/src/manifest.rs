//! The asset manifest: a TOML stand-in for the host's asset index.
//!
//! A manifest lists the class hierarchy and the assets to validate:
//!
//! ```toml
//! [[class]]
//! path = "/Script/Engine.Material"
//!
//! [[class]]
//! path = "/Script/Engine.MaterialInstanceConstant"
//! parent = "/Script/Engine.Material"
//!
//! [[asset]]
//! name = "M_Rock"
//! class = "/Script/Engine.Material"
//! package = "/Game/Props/M_Rock"
//! ```
//!
//! Classes without a parent inherit from the root class.

use camino::Utf8Path;
use common::{AssetIdentity, ClassPath, ClassTree};
use serde::Deserialize;

use crate::error::{CliError, Result};

/// One class of the hierarchy.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ClassEntry {
    /// Class path.
    pub path: String,
    /// Parent class path; the root class when omitted.
    #[serde(default)]
    pub parent: Option<String>,
}

/// Parsed asset manifest.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AssetManifest {
    #[serde(rename = "class")]
    classes: Vec<ClassEntry>,
    #[serde(rename = "asset")]
    assets: Vec<AssetIdentity>,
}

impl AssetManifest {
    /// Reads and parses the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ManifestRead`] when the file cannot be read and
    /// [`CliError::ManifestParse`] when it is not a valid manifest.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| CliError::ManifestRead {
            path: path.to_owned(),
            source,
        })?;
        Self::parse_from(&source, path.as_str())
    }

    /// Parses a manifest held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ManifestParse`] when `source` is not a valid
    /// manifest.
    ///
    /// # Examples
    ///
    /// ```
    /// use nomenclator_cli::manifest::AssetManifest;
    ///
    /// let manifest = AssetManifest::parse(concat!(
    ///     "[[asset]]\n",
    ///     "name = \"M_Rock\"\n",
    ///     "class = \"/Script/Engine.Material\"\n",
    ///     "package = \"/Game/Props/M_Rock\"\n",
    /// ))?;
    /// assert!(manifest.asset_identity("/Game/Props/M_Rock.M_Rock").is_some());
    /// # Ok::<(), nomenclator_cli::error::CliError>(())
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        Self::parse_from(source, "<inline>")
    }

    fn parse_from(source: &str, origin: &str) -> Result<Self> {
        toml::from_str(source).map_err(|source| CliError::ManifestParse {
            origin: origin.to_owned(),
            source,
        })
    }

    /// Builds the class hierarchy described by the manifest.
    #[must_use]
    pub fn hierarchy(&self) -> ClassTree {
        let mut tree = ClassTree::new();
        for entry in &self.classes {
            tree.insert(
                ClassPath::new(entry.path.trim()),
                entry.parent.as_deref().map(|parent| ClassPath::new(parent.trim())),
            );
        }
        tree
    }

    /// Looks an asset up by its `package.name` object path.
    #[must_use]
    pub fn asset_identity(&self, object_path: &str) -> Option<&AssetIdentity> {
        self.assets
            .iter()
            .find(|asset| asset.object_path() == object_path)
    }

    /// Assets whose package lives under `root`, in manifest order.
    pub fn assets_under<'a>(&'a self, root: &'a str) -> impl Iterator<Item = &'a AssetIdentity> {
        let root = root.trim_end_matches('/');
        self.assets.iter().filter(move |asset| {
            asset
                .package
                .strip_prefix(root)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }

    /// Every asset in manifest order.
    #[must_use]
    pub fn assets(&self) -> &[AssetIdentity] {
        &self.assets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{ClassHierarchy, NATIVE_PARENT_CLASS_TAG};
    use rstest::{fixture, rstest};

    const MANIFEST: &str = r#"
[[class]]
path = "/Script/Engine.Actor"

[[class]]
path = "/Script/Engine.Pawn"
parent = "/Script/Engine.Actor"

[[asset]]
name = "BP_Pawn"
class = "/Script/Engine.Blueprint"
package = "/Game/Blueprints/BP_Pawn"
tags = { NativeParentClass = "/Script/Engine.Pawn" }

[[asset]]
name = "M_Rock"
class = "/Script/Engine.Material"
package = "/Game/Props/M_Rock"

[[asset]]
name = "M_Plugin"
class = "/Script/Engine.Material"
package = "/GameExtras/M_Plugin"
"#;

    #[fixture]
    fn manifest() -> AssetManifest {
        AssetManifest::parse(MANIFEST).expect("manifest should parse")
    }

    #[rstest]
    fn builds_the_hierarchy(manifest: AssetManifest) {
        let tree = manifest.hierarchy();

        assert!(tree.is_descendant_or_equal(
            &ClassPath::new("/Script/Engine.Pawn"),
            &ClassPath::new("/Script/Engine.Actor"),
        ));
        assert_eq!(tree.len(), 2);
    }

    #[rstest]
    fn reads_asset_tags(manifest: AssetManifest) {
        let pawn = manifest
            .asset_identity("/Game/Blueprints/BP_Pawn.BP_Pawn")
            .expect("asset should be listed");

        assert_eq!(
            pawn.tags.get(NATIVE_PARENT_CLASS_TAG).map(String::as_str),
            Some("/Script/Engine.Pawn")
        );
    }

    #[rstest]
    #[case::default_root("/Game", 2)]
    #[case::trailing_slash("/Game/", 2)]
    #[case::sub_folder("/Game/Props", 1)]
    #[case::everything("/", 3)]
    #[case::sibling_is_not_a_child("/GameExtras", 1)]
    fn filters_assets_by_root(manifest: AssetManifest, #[case] root: &str, #[case] expected: usize) {
        assert_eq!(manifest.assets_under(root).count(), expected);
    }

    #[rstest]
    fn missing_assets_are_not_found(manifest: AssetManifest) {
        assert!(manifest.asset_identity("/Game/Props/M_Missing.M_Missing").is_none());
    }

    #[rstest]
    fn rejects_unknown_fields() {
        let outcome = AssetManifest::parse("[[asset]]\nname = \"A\"\nkind = \"B\"\n");

        assert!(matches!(outcome, Err(CliError::ManifestParse { .. })));
    }

    #[rstest]
    fn empty_manifests_are_valid() {
        let manifest = AssetManifest::parse("").expect("empty manifest should parse");

        assert!(manifest.assets().is_empty());
        assert!(manifest.hierarchy().is_empty());
    }
}
