//! Nomenclator decides whether content asset names follow a project's naming
//! convention and explains why when they do not.
//!
//! Validation runs each asset through a [`NamingPipeline`]: path exclusion,
//! pluggable [`NameValidator`]s, the class-hierarchy [`RuleTable`] and a
//! generic blueprint fallback. The class hierarchy is injected through
//! [`common::ClassHierarchy`]; the engine performs no I/O beyond loading its
//! configuration.

pub mod affix;
pub mod config;
pub mod defaults;
pub mod error;
pub mod exclusion;
pub mod pipeline;
pub mod report;
pub mod resolver;
pub mod rules;
pub mod validators;

pub use affix::AffixMismatch;
pub use config::{ConfigFile, NamingSettings, RuleSettings};
pub use error::ConfigError;
pub use exclusion::{ClassExclusions, ExclusionPolicy, ExclusionReason};
pub use pipeline::{CLASS_NOT_RESOLVABLE, EngineSnapshot, NamingPipeline};
pub use report::{AssetDiagnostic, BatchReport};
pub use rules::{NamingRule, RuleTable};
pub use validators::{NameValidator, ValidatorFault, ValidatorRegistry};
