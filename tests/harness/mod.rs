//! Shared fixtures for the integration tests
//!
//! Provides an in-memory [`Repository`] double, a tracing subscriber that
//! writes through the test harness, and helpers building a small but complete
//! object graph through the factory.
//!
//! # Usage
//!
//! ```rust,ignore
//! mod harness;
//! use harness::*;
//! ```

#![allow(dead_code)]

use anyhow::{Result, anyhow};
use candle_store::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Once, RwLock};

// ---------------------------------------------------------------------------
// Tracing
// ---------------------------------------------------------------------------

/// Install a subscriber once per test binary; output is captured per test
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

// ---------------------------------------------------------------------------
// In-memory repository
// ---------------------------------------------------------------------------

/// Repository double keeping entities in a map guarded by a `RwLock`
#[derive(Clone)]
pub struct InMemoryRepository<T: Entity> {
    entities: Arc<RwLock<HashMap<T::Id, T>>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            entities: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn len(&self) -> usize {
        self.entities.read().map(|e| e.len()).unwrap_or_default()
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn save(&self, entity: T) -> Result<T::Id> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let id = entity.id();
        entities.insert(id.clone(), entity);
        Ok(id)
    }

    fn find_by_id(&self, id: &T::Id) -> Result<Option<T>> {
        let entities = self
            .entities
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(entities.get(id).cloned())
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub fn contact(factory: &Factory) -> ContactDetails {
    let address = factory
        .create_address("12 Bree Street", "Cape Town", 8001, "South Africa")
        .expect("valid address");
    factory
        .create_contact_details("orders@candlecraft.co.za", "0215550100", Some(address))
        .expect("valid contact details")
}

pub fn lavender(factory: &Factory) -> Candle {
    factory
        .create_candle("Lavender Dream", "Lavender", 149.5, "Purple", "Aromatherapy")
        .expect("valid candle")
}

/// A pending order of two lavender candles
pub fn order(factory: &Factory) -> Order {
    let item = factory
        .create_order_item(lavender(factory), 2, 149.5, "Aromatherapy")
        .expect("valid order item");
    factory
        .create_order(Some(date(2025, 5, 11)), vec![item])
        .expect("valid order")
}
