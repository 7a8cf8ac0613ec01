//! Identifier generation
//!
//! String-class identifiers (invoice, store, tracking numbers) are random
//! UUIDs. Numeric identifiers come from a [`NumberSequence`], a lock-free
//! monotonic counter, so no identifier is ever produced by parsing text.

use crate::core::error::{ValidationError, ValidationResult};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, OnceLock};
use uuid::Uuid;

/// Generate a random unique identifier
pub fn generate_unique_id() -> Uuid {
    Uuid::new_v4()
}

/// Monotonic source of positive `u32` identifiers
///
/// Safe to share across threads; every call to [`NumberSequence::next_id`]
/// returns a distinct value until the sequence is exhausted.
#[derive(Debug)]
pub struct NumberSequence {
    next: AtomicU32,
}

impl NumberSequence {
    /// Create a sequence whose first identifier is `first` (zero is bumped to one)
    pub const fn starting_at(first: u32) -> Self {
        let first = if first == 0 { 1 } else { first };
        Self {
            next: AtomicU32::new(first),
        }
    }

    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// The process-wide sequence used by [`crate::factory::Factory::default`]
    pub fn global() -> Arc<NumberSequence> {
        static GLOBAL: OnceLock<Arc<NumberSequence>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(NumberSequence::new())).clone()
    }

    /// Allocate the next identifier for `entity.field`
    ///
    /// Fails with `IdentifierGenerationFailure` once `u32::MAX` has been handed out.
    pub fn next_id(&self, entity: &'static str, field: &'static str) -> ValidationResult<u32> {
        // Zero marks exhaustion: the value after u32::MAX is never handed out.
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                if current == 0 {
                    None
                } else {
                    Some(current.checked_add(1).unwrap_or(0))
                }
            })
            .map_err(|_| {
                tracing::warn!(entity, field, "numeric identifier sequence exhausted");
                ValidationError::identifier(entity, field, "numeric identifier sequence exhausted")
            })
    }
}

impl Default for NumberSequence {
    fn default() -> Self {
        Self::new()
    }
}
