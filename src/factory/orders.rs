use super::{Factory, traced, traced_value};
use crate::core::error::{ValidationError, ValidationResult};
use crate::core::id::generate_unique_id;
use crate::core::validation::validators::{
    ensure_date, ensure_non_negative, ensure_positive, ensure_some, ensure_u32,
};
use crate::entities::candle::Candle;
use crate::entities::invoice::Invoice;
use crate::entities::order::{Order, OrderStatus};
use crate::entities::order_item::OrderItem;
use chrono::NaiveDate;

impl Factory {
    /// Create an order line; the subtotal is computed from quantity and price
    pub fn create_order_item(
        &self,
        candle: Candle,
        quantity: i64,
        unit_price: f64,
        category: &str,
    ) -> ValidationResult<OrderItem> {
        const ENTITY: &str = "order_item";
        traced_value(ENTITY, || {
            let quantity = ensure_u32(ENTITY, "quantity", quantity, 1)?;
            let unit_price = ensure_non_negative(ENTITY, "unit_price", unit_price)?;

            OrderItem::builder()
                .quantity(quantity)
                .unit_price(unit_price)
                .candle(candle)
                .category(category)
                .build()
        })
    }

    /// Create a pending order from at least one item
    ///
    /// Every item is stamped with the new order number and the total is
    /// derived from the item subtotals.
    pub fn create_order(
        &self,
        order_date: Option<NaiveDate>,
        items: Vec<OrderItem>,
    ) -> ValidationResult<Order> {
        const ENTITY: &str = "order";
        traced(|| {
            let order_date = ensure_some(ENTITY, "order_date", order_date)?;
            if items.is_empty() {
                return Err(ValidationError::missing(ENTITY, "items"));
            }
            let order_number = self.next_number(ENTITY, "order_number")?;

            Order::builder()
                .order_number(order_number)
                .order_date(order_date)
                .status(OrderStatus::Pending)
                .items(items.into_iter().map(|item| item.for_order(order_number)))
                .build()
        })
    }

    /// Create an invoice dated `invoice_date` for a strictly positive amount
    ///
    /// The date must parse with the configured date format (ISO-8601 by
    /// default) and is stored exactly as supplied.
    pub fn create_invoice(
        &self,
        invoice_date: &str,
        total_amount: f64,
    ) -> ValidationResult<Invoice> {
        const ENTITY: &str = "invoice";
        traced(|| {
            ensure_date(ENTITY, "invoice_date", invoice_date, &self.config.date_format)?;
            let total_amount = ensure_positive(ENTITY, "total_amount", total_amount)?;

            Invoice::builder()
                .invoice_number(generate_unique_id())
                .invoice_date(invoice_date)
                .total_amount(total_amount)
                .build()
        })
    }
}
