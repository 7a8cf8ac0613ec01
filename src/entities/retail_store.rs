//! Retail store and the orders it has placed

use crate::core::error::ValidationResult;
use crate::core::validation::validators::ensure_present;
use crate::entities::order::Order;
use crate::entities::value_objects::ContactDetails;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const ENTITY: &str = "retail_store";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailStore {
    store_number: Uuid,
    store_name: String,
    contact_person: String,
    contact_details: ContactDetails,
    orders: Vec<Order>,
}

impl RetailStore {
    pub fn builder() -> RetailStoreBuilder {
        RetailStoreBuilder::default()
    }

    pub fn store_number(&self) -> Uuid {
        self.store_number
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    pub fn contact_person(&self) -> &str {
        &self.contact_person
    }

    pub fn contact_details(&self) -> &ContactDetails {
        &self.contact_details
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

crate::impl_entity!(RetailStore, "retail_store", Uuid, store_number);

/// Builder for [`RetailStore`]; the order list may stay empty, the name and
/// contact person may not be blank
#[derive(Debug, Clone, Default)]
pub struct RetailStoreBuilder {
    store_number: Option<Uuid>,
    store_name: Option<String>,
    contact_person: Option<String>,
    contact_details: Option<ContactDetails>,
    orders: Vec<Order>,
}

impl RetailStoreBuilder {
    builder_setters! {
        store_number: Uuid,
        contact_details: ContactDetails,
    }
    builder_string_setters! { store_name, contact_person }

    pub fn orders(mut self, orders: impl IntoIterator<Item = Order>) -> Self {
        self.orders = orders.into_iter().collect();
        self
    }

    pub fn add_order(mut self, order: Order) -> Self {
        self.orders.push(order);
        self
    }

    pub fn copy(store: &RetailStore) -> Self {
        Self {
            store_number: Some(store.store_number),
            store_name: Some(store.store_name.clone()),
            contact_person: Some(store.contact_person.clone()),
            contact_details: Some(store.contact_details.clone()),
            orders: store.orders.clone(),
        }
    }

    pub fn build(self) -> ValidationResult<RetailStore> {
        let store_name = required!(ENTITY, self.store_name);
        let contact_person = required!(ENTITY, self.contact_person);
        ensure_present(ENTITY, "store_name", &store_name)?;
        ensure_present(ENTITY, "contact_person", &contact_person)?;

        Ok(RetailStore {
            store_number: required!(ENTITY, self.store_number),
            store_name,
            contact_person,
            contact_details: required!(ENTITY, self.contact_details),
            orders: self.orders,
        })
    }
}
