//! Shared test helpers for Nomenclator crates.
//!
//! The helpers here are intended for unit and integration tests so the
//! synthetic class hierarchy and asset builders live in one place instead of
//! being re-declared by every suite.

pub mod fixtures;

pub use fixtures::{asset, sample_hierarchy};
