use super::{Factory, traced};
use crate::core::error::ValidationResult;
use crate::core::id::generate_unique_id;
use crate::core::validation::validators::{ensure_present, ensure_some};
use crate::entities::delivery::{Delivery, DeliveryStatus};
use crate::entities::manufacture::Manufacture;
use crate::entities::order::Order;
use crate::entities::retail_store::RetailStore;
use crate::entities::value_objects::ContactDetails;
use chrono::NaiveDate;

impl Factory {
    /// Create a delivery run with a generated delivery and tracking number
    pub fn create_delivery(
        &self,
        distribution_location: &str,
        delivery_date: Option<NaiveDate>,
        driver_name: &str,
        delivery_status: Option<DeliveryStatus>,
        orders: Vec<Order>,
        driver_contact_details: Option<ContactDetails>,
    ) -> ValidationResult<Delivery> {
        const ENTITY: &str = "delivery";
        traced(|| {
            ensure_present(ENTITY, "distribution_location", distribution_location)?;
            let delivery_date = ensure_some(ENTITY, "delivery_date", delivery_date)?;
            ensure_present(ENTITY, "driver_name", driver_name)?;
            let delivery_status = ensure_some(ENTITY, "delivery_status", delivery_status)?;
            let delivery_number = self.next_number(ENTITY, "delivery_number")?;

            let mut builder = Delivery::builder()
                .delivery_number(delivery_number)
                .distribution_location(distribution_location)
                .delivery_date(delivery_date)
                .driver_name(driver_name)
                .delivery_status(delivery_status)
                .tracking_number(generate_unique_id().to_string())
                .orders(orders);
            if let Some(contact) = driver_contact_details {
                builder = builder.driver_contact_details(contact);
            }
            builder.build()
        })
    }

    /// Create a manufacture site with no candles or deliveries yet
    pub fn create_manufacture(
        &self,
        manufacture_name: &str,
        inventory_stock: &str,
    ) -> ValidationResult<Manufacture> {
        const ENTITY: &str = "manufacture";
        traced(|| {
            ensure_present(ENTITY, "manufacture_name", manufacture_name)?;
            ensure_present(ENTITY, "inventory_stock", inventory_stock)?;
            let manufacture_number = self.next_number(ENTITY, "manufacture_number")?;

            Manufacture::builder()
                .manufacture_number(manufacture_number)
                .manufacture_name(manufacture_name)
                .inventory_stock(inventory_stock)
                .build()
        })
    }

    /// Create a retail store; both references must be supplied, the order
    /// list may be empty
    pub fn create_retail_store(
        &self,
        store_name: &str,
        contact_person: &str,
        contact_details: Option<ContactDetails>,
        orders: Option<Vec<Order>>,
    ) -> ValidationResult<RetailStore> {
        const ENTITY: &str = "retail_store";
        traced(|| {
            ensure_present(ENTITY, "store_name", store_name)?;
            ensure_present(ENTITY, "contact_person", contact_person)?;
            let contact_details = ensure_some(ENTITY, "contact_details", contact_details)?;
            let orders = ensure_some(ENTITY, "orders", orders)?;

            RetailStore::builder()
                .store_number(generate_unique_id())
                .store_name(store_name)
                .contact_person(contact_person)
                .contact_details(contact_details)
                .orders(orders)
                .build()
        })
    }
}
