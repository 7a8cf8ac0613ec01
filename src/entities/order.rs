//! Order aggregate: dated, numbered list of order items with an optional invoice

use crate::core::error::ValidationResult;
use crate::core::validation::validators::ensure_id;
use crate::entities::invoice::Invoice;
use crate::entities::order_item::OrderItem;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ENTITY: &str = "order";

/// Where an order is in its lifecycle
///
/// Transitions are not guarded: any status may replace any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    /// Case-insensitive; accepts `Pending`, `pending` and `PENDING`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(OrderStatus::Pending),
            "PROCESSING" => Ok(OrderStatus::Processing),
            "SHIPPED" => Ok(OrderStatus::Shipped),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown order status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    order_number: u32,
    order_date: NaiveDate,
    status: OrderStatus,
    items: Vec<OrderItem>,
    total_amount: f64,
    invoice: Option<Invoice>,
}

impl Order {
    pub fn builder() -> OrderBuilder {
        OrderBuilder::default()
    }

    pub fn order_number(&self) -> u32 {
        self.order_number
    }

    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Order lines in insertion order
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// The recorded total, which may have been supplied by the caller
    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn invoice(&self) -> Option<&Invoice> {
        self.invoice.as_ref()
    }

    /// Sum of the item subtotals
    pub fn calculate_total(&self) -> f64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    /// Whether the recorded total matches the item subtotals to the cent
    pub fn is_reconciled(&self) -> bool {
        (self.total_amount - self.calculate_total()).abs() < 0.005
    }

    /// Attach an invoice, replacing any previous one
    pub fn with_invoice(mut self, invoice: Invoice) -> Self {
        self.invoice = Some(invoice);
        self
    }

    /// Move the order to `status`
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        tracing::info!(
            order_number = self.order_number,
            from = %self.status,
            to = %status,
            "order status changed"
        );
        self.status = status;
        self
    }
}

crate::impl_entity!(Order, "order", u32, order_number);

/// Builder for [`Order`]
///
/// `order_number` and `order_date` are required. `status` defaults to
/// `Pending`. When `total_amount` is never set the total is derived from
/// the items; a supplied total is kept as-is.
#[derive(Debug, Clone, Default)]
pub struct OrderBuilder {
    order_number: Option<u32>,
    order_date: Option<NaiveDate>,
    status: Option<OrderStatus>,
    items: Vec<OrderItem>,
    total_amount: Option<f64>,
    invoice: Option<Invoice>,
}

impl OrderBuilder {
    builder_setters! {
        order_number: u32,
        order_date: NaiveDate,
        status: OrderStatus,
        total_amount: f64,
        invoice: Invoice,
    }

    /// Replace every item; the input is collected into a builder-owned list
    pub fn items(mut self, items: impl IntoIterator<Item = OrderItem>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    /// Append one item after those already present
    pub fn add_item(mut self, item: OrderItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn copy(order: &Order) -> Self {
        Self {
            order_number: Some(order.order_number),
            order_date: Some(order.order_date),
            status: Some(order.status),
            items: order.items.clone(),
            total_amount: Some(order.total_amount),
            invoice: order.invoice.clone(),
        }
    }

    pub fn build(self) -> ValidationResult<Order> {
        let order_number = ensure_id(ENTITY, "order_number", required!(ENTITY, self.order_number))?;
        let order_date = required!(ENTITY, self.order_date);
        let total_amount = self
            .total_amount
            .unwrap_or_else(|| self.items.iter().map(OrderItem::subtotal).sum());

        Ok(Order {
            order_number,
            order_date,
            status: self.status.unwrap_or_default(),
            items: self.items,
            total_amount,
            invoice: self.invoice,
        })
    }
}
