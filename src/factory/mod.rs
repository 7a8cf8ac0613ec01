//! Validating factories
//!
//! A [`Factory`] is the gate in front of every builder: it takes raw
//! arguments, checks them against the active [`ValidationConfig`] and only
//! then drives the builder. Checks short-circuit in a fixed order: blank or
//! absent values first, then formats (email, dates), then numeric ranges,
//! then identifier generation.
//!
//! ```rust
//! use candle_store::prelude::*;
//!
//! let factory = Factory::default();
//! let site = factory.create_manufacture("Anda Matomela", "1000").unwrap();
//! assert_eq!(site.manufacture_name(), "Anda Matomela");
//!
//! let err = factory.create_manufacture("   ", "1000").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MissingField);
//! ```

mod employees;
mod logistics;
mod orders;
mod products;
mod value_objects;

use crate::config::ValidationConfig;
use crate::core::entity::Entity;
use crate::core::error::{ValidationError, ValidationResult};
use crate::core::id::NumberSequence;
use std::sync::Arc;

/// Validation gate producing every entity of the domain
#[derive(Debug, Clone)]
pub struct Factory {
    config: ValidationConfig,
    sequence: Arc<NumberSequence>,
}

impl Factory {
    /// Create a factory drawing numeric identifiers from the process-wide sequence
    pub fn new(config: ValidationConfig) -> Self {
        Self::with_sequence(config, NumberSequence::global())
    }

    /// Create a factory with its own identifier sequence
    pub fn with_sequence(config: ValidationConfig, sequence: Arc<NumberSequence>) -> Self {
        Self { config, sequence }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    fn next_number(&self, entity: &'static str, field: &'static str) -> ValidationResult<u32> {
        self.sequence.next_id(entity, field)
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

fn log_rejection(err: &ValidationError) {
    tracing::debug!(
        entity = err.entity(),
        field = err.field(),
        kind = %err.kind(),
        "construction rejected"
    );
}

/// Run a creation attempt for an identified entity, logging the outcome
fn traced<T: Entity>(attempt: impl FnOnce() -> ValidationResult<T>) -> ValidationResult<T> {
    attempt()
        .inspect(|built| {
            tracing::debug!(entity = T::entity_type(), id = %built.id(), "entity created")
        })
        .inspect_err(log_rejection)
}

/// Same as [`traced`] for value objects, which carry no identifier
fn traced_value<T>(
    entity: &'static str,
    attempt: impl FnOnce() -> ValidationResult<T>,
) -> ValidationResult<T> {
    attempt()
        .inspect(|_| tracing::debug!(entity, "value object created"))
        .inspect_err(log_rejection)
}
