//! Pluggable name validators and the registry that dispatches to them.
//!
//! Validators are consulted before the rule table. The engine does not know
//! which validators exist: hosts register instances, one per concrete type,
//! and the registry queries them in registration order until one returns a
//! decisive verdict.

use std::any::{Any, TypeId};
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use common::{AssetIdentity, ClassPath, Verdict};
use log::{debug, warn};

const LOG_TARGET: &str = "nomenclator::validators";

/// Error reported by a validator that could not judge an asset.
///
/// A fault is logged and treated as if the validator returned
/// `Verdict::Unknown`; it never aborts a batch. Panics raised by a validator
/// are contained the same way.
pub type ValidatorFault = Box<dyn std::error::Error + Send + Sync>;

/// A pluggable naming validator.
pub trait NameValidator: Send + Sync {
    /// Returns `false` to take the validator out of dispatch entirely.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Returns `true` when the validator has an opinion about assets of
    /// `class`.
    fn can_validate(&self, class: &ClassPath, asset: &AssetIdentity) -> bool;

    /// Judges the asset's name.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidatorFault`] when the validator cannot reach a verdict.
    fn validate(&self, class: &ClassPath, asset: &AssetIdentity) -> Result<Verdict, ValidatorFault>;
}

struct RegisteredValidator {
    key: TypeId,
    name: &'static str,
    validator: Box<dyn NameValidator>,
}

/// Ordered set of validators, keyed by their concrete type.
#[derive(Default)]
pub struct ValidatorRegistry {
    entries: Vec<RegisteredValidator>,
}

impl ValidatorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `validator`.
    ///
    /// Registering a second instance of the same type replaces the first one
    /// in place, keeping its position in dispatch order. Returns `true` when
    /// an existing instance was replaced.
    pub fn register<V>(&mut self, validator: V) -> bool
    where
        V: NameValidator + 'static,
    {
        let key = TypeId::of::<V>();
        let name = std::any::type_name::<V>();
        let boxed: Box<dyn NameValidator> = Box::new(validator);

        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
            entry.validator = boxed;
            debug!(target: LOG_TARGET, "replaced validator `{name}`");
            return true;
        }

        self.entries.push(RegisteredValidator {
            key,
            name,
            validator: boxed,
        });
        debug!(target: LOG_TARGET, "registered validator `{name}`");
        false
    }

    /// Removes every registered validator.
    pub fn unregister_all(&mut self) {
        debug!(
            target: LOG_TARGET,
            "unregistering {} validator(s)",
            self.entries.len()
        );
        self.entries.clear();
    }

    /// Number of registered validators.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no validator is registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Type names of the registered validators in dispatch order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    /// Asks each enabled validator that can handle `class` for a verdict.
    ///
    /// The first decisive verdict wins; later validators are not consulted.
    /// Disabled validators are skipped without being called. A validator that
    /// returns a fault or panics is logged and treated as undecided. Returns
    /// `Verdict::Unknown` when no validator is decisive.
    #[must_use]
    pub fn dispatch(&self, class: &ClassPath, asset: &AssetIdentity) -> Verdict {
        for entry in &self.entries {
            let validator = entry.validator.as_ref();
            if !entry.guarded(asset, || validator.is_enabled()).unwrap_or(false) {
                continue;
            }
            if !entry
                .guarded(asset, || validator.can_validate(class, asset))
                .unwrap_or(false)
            {
                continue;
            }

            match entry.guarded(asset, || validator.validate(class, asset)) {
                Some(Ok(verdict)) if verdict.is_decisive() => {
                    debug!(
                        target: LOG_TARGET,
                        "validator `{}` decided {} for {}",
                        entry.name,
                        verdict.kind(),
                        asset.object_path()
                    );
                    return verdict;
                }
                Some(Ok(_)) | None => {}
                Some(Err(fault)) => warn!(
                    target: LOG_TARGET,
                    "validator `{}` failed on {}: {fault}",
                    entry.name,
                    asset.object_path()
                ),
            }
        }

        Verdict::unknown()
    }
}

impl RegisteredValidator {
    /// Runs `call`, containing any panic raised by the validator.
    fn guarded<T>(&self, asset: &AssetIdentity, call: impl FnOnce() -> T) -> Option<T> {
        catch_unwind(AssertUnwindSafe(call))
            .map_err(|payload| {
                warn!(
                    target: LOG_TARGET,
                    "validator `{}` panicked on {}: {}",
                    self.name,
                    asset.object_path(),
                    panic_message(payload.as_ref())
                );
            })
            .ok()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&'static str>().copied())
        .unwrap_or("panic without a message")
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
#[path = "validators_tests.rs"]
mod tests;
