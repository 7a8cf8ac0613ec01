//! Manufacture site producing candles and dispatching deliveries

use crate::core::error::ValidationResult;
use crate::core::validation::validators::{ensure_id, ensure_present};
use crate::entities::candle::Candle;
use crate::entities::delivery::Delivery;
use crate::entities::value_objects::ContactDetails;
use serde::{Deserialize, Serialize};

const ENTITY: &str = "manufacture";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manufacture {
    manufacture_number: u32,
    manufacture_name: String,
    /// Free-form stock description, e.g. `"1000"`
    inventory_stock: String,
    contact_details: Option<ContactDetails>,
    candles: Vec<Candle>,
    deliveries: Vec<Delivery>,
}

impl Manufacture {
    pub fn builder() -> ManufactureBuilder {
        ManufactureBuilder::default()
    }

    pub fn manufacture_number(&self) -> u32 {
        self.manufacture_number
    }

    pub fn manufacture_name(&self) -> &str {
        &self.manufacture_name
    }

    pub fn inventory_stock(&self) -> &str {
        &self.inventory_stock
    }

    pub fn contact_details(&self) -> Option<&ContactDetails> {
        self.contact_details.as_ref()
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }
}

crate::impl_entity!(Manufacture, "manufacture", u32, manufacture_number);

#[derive(Debug, Clone, Default)]
pub struct ManufactureBuilder {
    manufacture_number: Option<u32>,
    manufacture_name: Option<String>,
    inventory_stock: Option<String>,
    contact_details: Option<ContactDetails>,
    candles: Vec<Candle>,
    deliveries: Vec<Delivery>,
}

impl ManufactureBuilder {
    builder_setters! {
        manufacture_number: u32,
        contact_details: ContactDetails,
    }
    builder_string_setters! { manufacture_name, inventory_stock }

    pub fn candles(mut self, candles: impl IntoIterator<Item = Candle>) -> Self {
        self.candles = candles.into_iter().collect();
        self
    }

    pub fn add_candle(mut self, candle: Candle) -> Self {
        self.candles.push(candle);
        self
    }

    pub fn deliveries(mut self, deliveries: impl IntoIterator<Item = Delivery>) -> Self {
        self.deliveries = deliveries.into_iter().collect();
        self
    }

    pub fn add_delivery(mut self, delivery: Delivery) -> Self {
        self.deliveries.push(delivery);
        self
    }

    pub fn copy(manufacture: &Manufacture) -> Self {
        Self {
            manufacture_number: Some(manufacture.manufacture_number),
            manufacture_name: Some(manufacture.manufacture_name.clone()),
            inventory_stock: Some(manufacture.inventory_stock.clone()),
            contact_details: manufacture.contact_details.clone(),
            candles: manufacture.candles.clone(),
            deliveries: manufacture.deliveries.clone(),
        }
    }

    pub fn build(self) -> ValidationResult<Manufacture> {
        let manufacture_number = required!(ENTITY, self.manufacture_number);
        let manufacture_name = required!(ENTITY, self.manufacture_name);
        let inventory_stock = required!(ENTITY, self.inventory_stock);
        ensure_present(ENTITY, "manufacture_name", &manufacture_name)?;
        ensure_present(ENTITY, "inventory_stock", &inventory_stock)?;

        Ok(Manufacture {
            manufacture_number: ensure_id(ENTITY, "manufacture_number", manufacture_number)?,
            manufacture_name,
            inventory_stock,
            contact_details: self.contact_details,
            candles: self.candles,
            deliveries: self.deliveries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(number: u32) -> Candle {
        Candle::builder()
            .candle_number(number)
            .name("Vanilla")
            .price(80.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_candles_keep_insertion_order() {
        let site = Manufacture::builder()
            .manufacture_number(3)
            .manufacture_name("Anda Matomela")
            .inventory_stock("1000")
            .candles(vec![candle(1), candle(2)])
            .add_candle(candle(3))
            .build()
            .unwrap();

        let numbers: Vec<u32> = site.candles().iter().map(Candle::candle_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(site.deliveries().is_empty());
        assert!(site.contact_details().is_none());
    }

    #[test]
    fn test_missing_stock() {
        let err = Manufacture::builder()
            .manufacture_number(3)
            .manufacture_name("Anda Matomela")
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "inventory_stock");
    }

    #[test]
    fn test_blank_name_or_zero_number_rejected() {
        let err = Manufacture::builder()
            .manufacture_number(0)
            .manufacture_name("Anda Matomela")
            .inventory_stock("1000")
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "manufacture_number");

        let err = Manufacture::builder()
            .manufacture_number(3)
            .manufacture_name("")
            .inventory_stock("")
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "manufacture_name");
    }

    #[test]
    fn test_copy_round_trip() {
        let site = Manufacture::builder()
            .manufacture_number(9)
            .manufacture_name("Karoo Works")
            .inventory_stock("250")
            .add_candle(candle(4))
            .build()
            .unwrap();
        assert_eq!(ManufactureBuilder::copy(&site).build().unwrap(), site);
    }
}
