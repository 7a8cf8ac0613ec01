//! Candle: the product sold by stores and produced by manufacture sites

use crate::core::error::ValidationResult;
use crate::core::validation::validators::{ensure_id, ensure_non_negative, ensure_present};
use serde::{Deserialize, Serialize};

const ENTITY: &str = "candle";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    candle_number: u32,
    name: String,
    scent: String,
    price: f64,
    color: String,
    category: String,
}

impl Candle {
    pub fn builder() -> CandleBuilder {
        CandleBuilder::default()
    }

    pub fn candle_number(&self) -> u32 {
        self.candle_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scent(&self) -> &str {
        &self.scent
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

crate::impl_entity!(Candle, "candle", u32, candle_number);

/// Builder for [`Candle`]
///
/// `candle_number`, `name` and `price` are required; the descriptive
/// fields default to empty. The number must be non-zero, the name non-blank
/// and the price zero or more.
#[derive(Debug, Clone, Default)]
pub struct CandleBuilder {
    candle_number: Option<u32>,
    name: Option<String>,
    scent: Option<String>,
    price: Option<f64>,
    color: Option<String>,
    category: Option<String>,
}

impl CandleBuilder {
    builder_setters! {
        candle_number: u32,
        price: f64,
    }
    builder_string_setters! { name, scent, color, category }

    pub fn copy(candle: &Candle) -> Self {
        Self {
            candle_number: Some(candle.candle_number),
            name: Some(candle.name.clone()),
            scent: Some(candle.scent.clone()),
            price: Some(candle.price),
            color: Some(candle.color.clone()),
            category: Some(candle.category.clone()),
        }
    }

    pub fn build(self) -> ValidationResult<Candle> {
        let candle_number = required!(ENTITY, self.candle_number);
        let name = required!(ENTITY, self.name);
        let price = required!(ENTITY, self.price);
        ensure_present(ENTITY, "name", &name)?;

        Ok(Candle {
            candle_number: ensure_id(ENTITY, "candle_number", candle_number)?,
            name,
            price: ensure_non_negative(ENTITY, "price", price)?,
            scent: self.scent.unwrap_or_default(),
            color: self.color.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::Entity;
    use crate::core::error::ErrorKind;

    fn lavender() -> Candle {
        Candle::builder()
            .candle_number(12)
            .name("Lavender Dream")
            .scent("Lavender")
            .price(149.5)
            .color("Purple")
            .category("Aromatherapy")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_echoes_fields() {
        let candle = lavender();
        assert_eq!(candle.candle_number(), 12);
        assert_eq!(candle.name(), "Lavender Dream");
        assert_eq!(candle.scent(), "Lavender");
        assert_eq!(candle.price(), 149.5);
        assert_eq!(candle.color(), "Purple");
        assert_eq!(candle.category(), "Aromatherapy");
    }

    #[test]
    fn test_missing_required_field() {
        let err = Candle::builder().name("Unnumbered").price(1.0).build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.field(), "candle_number");
    }

    #[test]
    fn test_builder_rejects_invalid_values() {
        let err = Candle::builder().candle_number(0).name("Zero").price(1.0).build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.field(), "candle_number");

        let err = Candle::builder().candle_number(1).name("  ").price(1.0).build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.field(), "name");

        let err = Candle::builder().candle_number(1).name("Cheap").price(-1.0).build().unwrap_err();
        assert_eq!(err.field(), "price");
    }

    #[test]
    fn test_copy_round_trip() {
        let candle = lavender();
        assert_eq!(CandleBuilder::copy(&candle).build().unwrap(), candle);
    }

    #[test]
    fn test_entity_identity() {
        assert_eq!(Candle::entity_type(), "candle");
        assert_eq!(lavender().id(), 12);
    }
}
