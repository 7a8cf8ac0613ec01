//! # Candle Store
//!
//! Domain model for a candle retail and manufacturing business.
//!
//! ## Features
//!
//! - **Value Objects**: `Address`, `ContactDetails` and `PersonInfo`, frozen once built
//! - **Aggregates**: candles, employees, orders, invoices, deliveries, manufacture sites and stores
//! - **Move-based Builders**: one setter per field, `copy(existing)` and a checked `build()`
//! - **Employee Variants**: one generic builder serving `Manager` and `StaffEmployee`
//! - **Validating Factories**: raw arguments in, `Result<Entity, ValidationError>` out
//! - **Typed Errors**: missing, malformed and out-of-range values are told apart
//! - **Configuration-Based**: validation bounds and date format loadable from YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use candle_store::prelude::*;
//!
//! let factory = Factory::default();
//!
//! let candle = factory
//!     .create_candle("Lavender Dream", "Lavender", 149.5, "Purple", "Aromatherapy")
//!     .unwrap();
//! let item = factory.create_order_item(candle, 2, 149.5, "Aromatherapy").unwrap();
//! let order = factory
//!     .create_order(NaiveDate::from_ymd_opt(2025, 5, 11), vec![item])
//!     .unwrap();
//! assert_eq!(order.total_amount(), 299.0);
//!
//! let invoice = factory.create_invoice("2025-05-11", order.total_amount()).unwrap();
//! let order = order.with_invoice(invoice);
//! assert!(order.invoice().is_some());
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod factory;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        entity::Entity,
        error::{ErrorKind, ErrorResponse, ValidationError, ValidationResult},
        id::{NumberSequence, generate_unique_id},
        repository::Repository,
        validation::validators,
    };

    // === Macros ===
    pub use crate::impl_entity;

    // === Entities ===
    pub use crate::entities::{
        Address, AddressBuilder, BaseFields, Candle, CandleBuilder, ContactDetails,
        ContactDetailsBuilder, Delivery, DeliveryBuilder, DeliveryStatus, Employee,
        EmployeeBuilder, EmployeeRecord, Invoice, InvoiceBuilder, Manager, ManagerBuilder,
        ManagerFields, Manufacture, ManufactureBuilder, Order, OrderBuilder, OrderItem,
        OrderItemBuilder, OrderStatus, PersonInfo, PersonInfoBuilder, Personnel, RetailStore,
        RetailStoreBuilder, StaffEmployee, StaffEmployeeBuilder, StaffFields,
    };

    // === Factory ===
    pub use crate::factory::Factory;

    // === Config ===
    pub use crate::config::{Bounds, ValidationConfig};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
