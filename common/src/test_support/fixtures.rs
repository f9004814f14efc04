//! Synthetic hierarchy and asset builders for tests.
//!
//! The hierarchy mirrors a slice of a typical game-content taxonomy:
//!
//! ```text
//! Object
//! ├── Material
//! │   └── MaterialInstanceConstant
//! ├── Texture
//! │   └── Texture2D
//! ├── Actor
//! │   └── Pawn
//! │       └── Character
//! ├── ActorComponent
//! ├── Blueprint
//! └── BlueprintGeneratedClass
//! ```

use crate::asset::{AssetIdentity, BLUEPRINT_CLASS, BLUEPRINT_GENERATED_CLASS};
use crate::class::ClassTree;

/// Builds the synthetic hierarchy described in the module documentation.
///
/// # Examples
///
/// ```
/// use common::test_support::sample_hierarchy;
/// use common::{ClassHierarchy, ClassPath};
///
/// let tree = sample_hierarchy();
/// assert!(tree.is_descendant_or_equal(
///     &ClassPath::new("/Script/Engine.Character"),
///     &ClassPath::new("/Script/Engine.Actor"),
/// ));
/// ```
#[must_use]
pub fn sample_hierarchy() -> ClassTree {
    ClassTree::new()
        .with_class("/Script/Engine.Material", None)
        .with_class(
            "/Script/Engine.MaterialInstanceConstant",
            Some("/Script/Engine.Material"),
        )
        .with_class("/Script/Engine.Texture", None)
        .with_class("/Script/Engine.Texture2D", Some("/Script/Engine.Texture"))
        .with_class("/Script/Engine.Actor", None)
        .with_class("/Script/Engine.Pawn", Some("/Script/Engine.Actor"))
        .with_class("/Script/Engine.Character", Some("/Script/Engine.Pawn"))
        .with_class("/Script/Engine.ActorComponent", None)
        .with_class(BLUEPRINT_CLASS, None)
        .with_class(BLUEPRINT_GENERATED_CLASS, None)
}

/// Builds an asset named `name` of `class` living at `/Game/<folder>/<name>`.
///
/// # Examples
///
/// ```
/// use common::test_support::asset;
///
/// let rock = asset("M_Rock", "/Script/Engine.Material", "Props");
/// assert_eq!(rock.package, "/Game/Props/M_Rock");
/// ```
#[must_use]
pub fn asset(name: &str, class: &str, folder: &str) -> AssetIdentity {
    AssetIdentity::new(name, class, format!("/Game/{folder}/{name}"))
}
