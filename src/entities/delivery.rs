//! Delivery runs carrying orders from a distribution location

use crate::core::error::ValidationResult;
use crate::core::validation::validators::{ensure_id, ensure_present};
use crate::entities::order::Order;
use crate::entities::value_objects::ContactDetails;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ENTITY: &str = "delivery";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    #[default]
    Pending,
    InTransit,
    Delivered,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "PENDING",
            DeliveryStatus::InTransit => "IN_TRANSIT",
            DeliveryStatus::Delivered => "DELIVERED",
        }
    }

    /// Whether the run has finished. Informational only: a delivered run can
    /// still be moved back to another status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DeliveryStatus::Delivered)
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryStatus {
    type Err = String;

    /// Accepts the canonical names plus the legacy `in_progress` / `completed`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace([' ', '-'], "_").as_str() {
            "PENDING" => Ok(DeliveryStatus::Pending),
            "IN_TRANSIT" | "IN_PROGRESS" => Ok(DeliveryStatus::InTransit),
            "DELIVERED" | "COMPLETED" => Ok(DeliveryStatus::Delivered),
            other => Err(format!("unknown delivery status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    delivery_number: u32,
    distribution_location: String,
    delivery_date: NaiveDate,
    delivery_status: DeliveryStatus,
    driver_name: String,
    tracking_number: Option<String>,
    orders: Vec<Order>,
    driver_contact_details: Option<ContactDetails>,
}

impl Delivery {
    pub fn builder() -> DeliveryBuilder {
        DeliveryBuilder::default()
    }

    pub fn delivery_number(&self) -> u32 {
        self.delivery_number
    }

    pub fn distribution_location(&self) -> &str {
        &self.distribution_location
    }

    pub fn delivery_date(&self) -> NaiveDate {
        self.delivery_date
    }

    pub fn delivery_status(&self) -> DeliveryStatus {
        self.delivery_status
    }

    pub fn driver_name(&self) -> &str {
        &self.driver_name
    }

    pub fn tracking_number(&self) -> Option<&str> {
        self.tracking_number.as_deref()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn driver_contact_details(&self) -> Option<&ContactDetails> {
        self.driver_contact_details.as_ref()
    }

    /// Overwrite the current status
    ///
    /// The only mutation a built delivery allows. No transition is refused.
    pub fn update_delivery_status(&mut self, status: DeliveryStatus) {
        tracing::info!(
            delivery_number = self.delivery_number,
            from = %self.delivery_status,
            to = %status,
            "delivery status updated"
        );
        self.delivery_status = status;
    }
}

crate::impl_entity!(Delivery, "delivery", u32, delivery_number);

/// Builder for [`Delivery`]
///
/// `delivery_number`, `distribution_location`, `delivery_date` and
/// `driver_name` are required; status defaults to `Pending`.
#[derive(Debug, Clone, Default)]
pub struct DeliveryBuilder {
    delivery_number: Option<u32>,
    distribution_location: Option<String>,
    delivery_date: Option<NaiveDate>,
    delivery_status: Option<DeliveryStatus>,
    driver_name: Option<String>,
    tracking_number: Option<String>,
    orders: Vec<Order>,
    driver_contact_details: Option<ContactDetails>,
}

impl DeliveryBuilder {
    builder_setters! {
        delivery_number: u32,
        delivery_date: NaiveDate,
        delivery_status: DeliveryStatus,
        driver_contact_details: ContactDetails,
    }
    builder_string_setters! { distribution_location, driver_name, tracking_number }

    pub fn orders(mut self, orders: impl IntoIterator<Item = Order>) -> Self {
        self.orders = orders.into_iter().collect();
        self
    }

    pub fn add_order(mut self, order: Order) -> Self {
        self.orders.push(order);
        self
    }

    pub fn copy(delivery: &Delivery) -> Self {
        Self {
            delivery_number: Some(delivery.delivery_number),
            distribution_location: Some(delivery.distribution_location.clone()),
            delivery_date: Some(delivery.delivery_date),
            delivery_status: Some(delivery.delivery_status),
            driver_name: Some(delivery.driver_name.clone()),
            tracking_number: delivery.tracking_number.clone(),
            orders: delivery.orders.clone(),
            driver_contact_details: delivery.driver_contact_details.clone(),
        }
    }

    pub fn build(self) -> ValidationResult<Delivery> {
        let delivery_number = required!(ENTITY, self.delivery_number);
        let distribution_location = required!(ENTITY, self.distribution_location);
        let delivery_date = required!(ENTITY, self.delivery_date);
        let driver_name = required!(ENTITY, self.driver_name);
        ensure_present(ENTITY, "distribution_location", &distribution_location)?;
        ensure_present(ENTITY, "driver_name", &driver_name)?;

        Ok(Delivery {
            delivery_number: ensure_id(ENTITY, "delivery_number", delivery_number)?,
            distribution_location,
            delivery_date,
            delivery_status: self.delivery_status.unwrap_or_default(),
            driver_name,
            tracking_number: self.tracking_number,
            orders: self.orders,
            driver_contact_details: self.driver_contact_details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    fn delivery() -> Delivery {
        Delivery::builder()
            .delivery_number(40)
            .distribution_location("Cape Town Depot")
            .delivery_date(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap())
            .driver_name("Sipho Ndlovu")
            .tracking_number("TRK-1")
            .build()
            .unwrap()
    }

    #[test]
    fn test_status_defaults_to_pending() {
        let delivery = delivery();
        assert_eq!(delivery.delivery_status(), DeliveryStatus::Pending);
        assert_eq!(delivery.tracking_number(), Some("TRK-1"));
        assert!(delivery.orders().is_empty());
    }

    #[test]
    fn test_update_delivery_status_has_no_guard() {
        let mut delivery = delivery();
        delivery.update_delivery_status(DeliveryStatus::Delivered);
        assert!(delivery.delivery_status().is_terminal());

        delivery.update_delivery_status(DeliveryStatus::InTransit);
        assert_eq!(delivery.delivery_status(), DeliveryStatus::InTransit);
    }

    #[test]
    fn test_missing_driver_name() {
        let err = Delivery::builder()
            .delivery_number(1)
            .distribution_location("Depot")
            .delivery_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "driver_name");
    }

    #[test]
    fn test_builder_rejects_blank_strings_and_zero_number() {
        let err = DeliveryBuilder::copy(&delivery())
            .distribution_location("")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.field(), "distribution_location");

        let err = DeliveryBuilder::copy(&delivery()).driver_name(" ").build().unwrap_err();
        assert_eq!(err.field(), "driver_name");

        let err = DeliveryBuilder::copy(&delivery()).delivery_number(0).build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.field(), "delivery_number");
    }

    #[test]
    fn test_copy_round_trip() {
        let delivery = delivery();
        assert_eq!(DeliveryBuilder::copy(&delivery).build().unwrap(), delivery);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("in_progress".parse::<DeliveryStatus>().unwrap(), DeliveryStatus::InTransit);
        assert_eq!("In Transit".parse::<DeliveryStatus>().unwrap(), DeliveryStatus::InTransit);
        assert_eq!("completed".parse::<DeliveryStatus>().unwrap(), DeliveryStatus::Delivered);
        assert_eq!(DeliveryStatus::InTransit.to_string(), "IN_TRANSIT");
        assert!("lost".parse::<DeliveryStatus>().is_err());
    }

    #[test]
    fn test_status_serde_uses_screaming_case() {
        let json = serde_json::to_string(&DeliveryStatus::InTransit).unwrap();
        assert_eq!(json, "\"IN_TRANSIT\"");
    }
}
