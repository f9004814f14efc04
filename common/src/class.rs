//! Class paths and the hierarchy oracle used to rank naming rules.
//!
//! The naming engine never owns a type system. It asks a [`ClassHierarchy`]
//! whether one class inherits from another and whether a class is known at
//! all. [`ClassTree`] is a small table-backed implementation that asset
//! manifests and tests use to describe a synthetic hierarchy.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Path of the universal base class every other class descends from.
pub const ROOT_CLASS: &str = "/Script/CoreUObject.Object";

const MAX_CLASS_DEPTH: usize = 256;

/// Fully-qualified class path such as `/Script/Engine.Material`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassPath(String);

impl ClassPath {
    /// Wraps a class path without validating it.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the path of the universal base class.
    #[must_use]
    pub fn root() -> Self {
        Self::new(ROOT_CLASS)
    }

    /// Returns `true` for the universal base class.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == ROOT_CLASS
    }

    /// Returns the underlying path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when no class has been named.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Returns the class name without its package, for example `Material`
    /// for `/Script/Engine.Material`.
    ///
    /// # Examples
    ///
    /// ```
    /// use common::ClassPath;
    ///
    /// assert_eq!(ClassPath::new("/Script/Engine.Material").short_name(), "Material");
    /// assert_eq!(ClassPath::new("Texture").short_name(), "Texture");
    /// ```
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.0.rsplit(['.', '/']).next().unwrap_or(self.0.as_str())
    }
}

impl fmt::Display for ClassPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassPath {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ClassPath {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ClassPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Oracle answering inheritance questions about classes.
///
/// Implementations must treat [`ROOT_CLASS`] as an ancestor of every class
/// they know about.
pub trait ClassHierarchy {
    /// Returns `true` when the hierarchy can resolve `class`.
    fn contains(&self, class: &ClassPath) -> bool;

    /// Returns `true` when `class` is `ancestor` or inherits from it.
    fn is_descendant_or_equal(&self, class: &ClassPath, ancestor: &ClassPath) -> bool;
}

impl<H: ClassHierarchy + ?Sized> ClassHierarchy for &H {
    fn contains(&self, class: &ClassPath) -> bool {
        (**self).contains(class)
    }

    fn is_descendant_or_equal(&self, class: &ClassPath, ancestor: &ClassPath) -> bool {
        (**self).is_descendant_or_equal(class, ancestor)
    }
}

impl<H: ClassHierarchy + ?Sized> ClassHierarchy for Arc<H> {
    fn contains(&self, class: &ClassPath) -> bool {
        (**self).contains(class)
    }

    fn is_descendant_or_equal(&self, class: &ClassPath, ancestor: &ClassPath) -> bool {
        (**self).is_descendant_or_equal(class, ancestor)
    }
}

/// Table-backed class hierarchy keyed by class path.
///
/// Classes registered without a parent inherit directly from the root class.
///
/// # Examples
///
/// ```
/// use common::{ClassHierarchy, ClassPath, ClassTree};
///
/// let tree = ClassTree::new()
///     .with_class("/Script/Engine.Texture", None)
///     .with_class("/Script/Engine.Texture2D", Some("/Script/Engine.Texture"));
///
/// let texture = ClassPath::new("/Script/Engine.Texture");
/// let texture_2d = ClassPath::new("/Script/Engine.Texture2D");
/// assert!(tree.is_descendant_or_equal(&texture_2d, &texture));
/// assert!(!tree.is_descendant_or_equal(&texture, &texture_2d));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassTree {
    parents: HashMap<ClassPath, ClassPath>,
}

impl ClassTree {
    /// Creates a hierarchy containing only the root class.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`Self::insert`].
    #[must_use]
    pub fn with_class(mut self, class: &str, parent: Option<&str>) -> Self {
        self.insert(ClassPath::new(class), parent.map(ClassPath::new));
        self
    }

    /// Registers `class` under `parent`, or under the root class when no
    /// parent is given. Re-registering a class replaces its parent.
    pub fn insert(&mut self, class: ClassPath, parent: Option<ClassPath>) {
        if class.is_root() {
            return;
        }
        self.parents
            .insert(class, parent.unwrap_or_else(ClassPath::root));
    }

    /// Returns the direct parent of `class`, if it is registered.
    #[must_use]
    pub fn parent_of(&self, class: &ClassPath) -> Option<&ClassPath> {
        self.parents.get(class)
    }

    /// Number of registered classes, excluding the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns `true` when only the root class is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

impl ClassHierarchy for ClassTree {
    fn contains(&self, class: &ClassPath) -> bool {
        class.is_root() || self.parents.contains_key(class)
    }

    fn is_descendant_or_equal(&self, class: &ClassPath, ancestor: &ClassPath) -> bool {
        if !self.contains(class) {
            return false;
        }
        if class == ancestor || ancestor.is_root() {
            return true;
        }

        // Bounded walk so a cyclic table cannot hang validation.
        let mut current = class;
        for _ in 0..MAX_CLASS_DEPTH {
            match self.parents.get(current) {
                Some(parent) if parent == ancestor => return true,
                Some(parent) => current = parent,
                None => return false,
            }
        }
        false
    }
}
