//! Shared vocabulary for Nomenclator crates: class paths and the hierarchy
//! oracle, asset identities with real-class resolution, and naming verdicts.

pub mod asset;
pub mod class;
pub mod test_support;
pub mod verdict;

pub use asset::{
    AssetIdentity, BLUEPRINT_CLASS, BLUEPRINT_GENERATED_CLASS, NATIVE_CLASS_TAG,
    NATIVE_PARENT_CLASS_TAG,
};
pub use class::{ClassHierarchy, ClassPath, ClassTree, ROOT_CLASS};
pub use verdict::{Verdict, VerdictKind};
