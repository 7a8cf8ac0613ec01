//! A single order line: a candle, how many, and at what price

use crate::core::error::ValidationResult;
use crate::entities::candle::Candle;
use serde::{Deserialize, Serialize};

const ENTITY: &str = "order_item";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    quantity: u32,
    unit_price: f64,
    subtotal: f64,
    /// Number of the order this line belongs to, once assigned
    order_number: Option<u32>,
    candle: Candle,
    category: String,
}

impl OrderItem {
    pub fn builder() -> OrderItemBuilder {
        OrderItemBuilder::default()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Always `quantity * unit_price`
    pub fn subtotal(&self) -> f64 {
        self.subtotal
    }

    pub fn order_number(&self) -> Option<u32> {
        self.order_number
    }

    pub fn candle(&self) -> &Candle {
        &self.candle
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Point this line at its owning order
    pub fn for_order(mut self, order_number: u32) -> Self {
        self.order_number = Some(order_number);
        self
    }
}

/// Builder for [`OrderItem`]
///
/// `quantity`, `unit_price` and `candle` are required. Any `subtotal` set
/// here is discarded: `build()` always recomputes it.
#[derive(Debug, Clone, Default)]
pub struct OrderItemBuilder {
    quantity: Option<u32>,
    unit_price: Option<f64>,
    subtotal: Option<f64>,
    order_number: Option<u32>,
    candle: Option<Candle>,
    category: Option<String>,
}

impl OrderItemBuilder {
    builder_setters! {
        quantity: u32,
        unit_price: f64,
        subtotal: f64,
        order_number: u32,
        candle: Candle,
    }
    builder_string_setters! { category }

    pub fn copy(item: &OrderItem) -> Self {
        Self {
            quantity: Some(item.quantity),
            unit_price: Some(item.unit_price),
            subtotal: Some(item.subtotal),
            order_number: item.order_number,
            candle: Some(item.candle.clone()),
            category: Some(item.category.clone()),
        }
    }

    pub fn build(self) -> ValidationResult<OrderItem> {
        let quantity = required!(ENTITY, self.quantity);
        let unit_price = required!(ENTITY, self.unit_price);
        if let Some(stale) = self.subtotal {
            tracing::trace!(stale, "recomputing order item subtotal");
        }

        Ok(OrderItem {
            quantity,
            unit_price,
            subtotal: f64::from(quantity) * unit_price,
            order_number: self.order_number,
            candle: required!(ENTITY, self.candle),
            category: self.category.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle() -> Candle {
        Candle::builder()
            .candle_number(1)
            .name("Cedarwood")
            .price(120.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_subtotal_is_computed() {
        let item = OrderItem::builder()
            .quantity(3)
            .unit_price(120.0)
            .candle(candle())
            .category("Woody")
            .build()
            .unwrap();

        assert_eq!(item.subtotal(), 360.0);
        assert_eq!(item.category(), "Woody");
        assert!(item.order_number().is_none());
    }

    #[test]
    fn test_explicit_subtotal_is_overridden() {
        let item = OrderItem::builder()
            .subtotal(1.0)
            .quantity(2)
            .unit_price(50.0)
            .candle(candle())
            .build()
            .unwrap();

        assert_eq!(item.subtotal(), 100.0);
    }

    #[test]
    fn test_zero_quantity_gives_zero_subtotal() {
        let item = OrderItem::builder()
            .quantity(0)
            .unit_price(50.0)
            .candle(candle())
            .build()
            .unwrap();
        assert_eq!(item.subtotal(), 0.0);
    }

    #[test]
    fn test_candle_is_required() {
        let err = OrderItem::builder().quantity(1).unit_price(1.0).build().unwrap_err();
        assert_eq!(err.field(), "candle");
    }

    #[test]
    fn test_copy_round_trip_and_back_reference() {
        let item = OrderItem::builder()
            .quantity(1)
            .unit_price(120.0)
            .candle(candle())
            .build()
            .unwrap()
            .for_order(55);

        assert_eq!(item.order_number(), Some(55));
        assert_eq!(OrderItemBuilder::copy(&item).build().unwrap(), item);
    }
}
