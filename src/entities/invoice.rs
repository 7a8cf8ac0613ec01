//! Invoice issued against an order

use crate::core::error::ValidationResult;
use crate::core::validation::validators::{ensure_positive, ensure_present};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const ENTITY: &str = "invoice";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    invoice_number: Uuid,
    /// ISO-8601 calendar date, kept exactly as supplied
    invoice_date: String,
    total_amount: f64,
}

impl Invoice {
    pub fn builder() -> InvoiceBuilder {
        InvoiceBuilder::default()
    }

    pub fn invoice_number(&self) -> Uuid {
        self.invoice_number
    }

    pub fn invoice_date(&self) -> &str {
        &self.invoice_date
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }
}

crate::impl_entity!(Invoice, "invoice", Uuid, invoice_number);

/// Builder for [`Invoice`]; every field is required
///
/// The date must be non-blank and the amount greater than zero. Parsing the
/// date against the configured format is left to the factory.
#[derive(Debug, Clone, Default)]
pub struct InvoiceBuilder {
    invoice_number: Option<Uuid>,
    invoice_date: Option<String>,
    total_amount: Option<f64>,
}

impl InvoiceBuilder {
    builder_setters! {
        invoice_number: Uuid,
        total_amount: f64,
    }
    builder_string_setters! { invoice_date }

    pub fn copy(invoice: &Invoice) -> Self {
        Self {
            invoice_number: Some(invoice.invoice_number),
            invoice_date: Some(invoice.invoice_date.clone()),
            total_amount: Some(invoice.total_amount),
        }
    }

    pub fn build(self) -> ValidationResult<Invoice> {
        let invoice_number = required!(ENTITY, self.invoice_number);
        let invoice_date = required!(ENTITY, self.invoice_date);
        let total_amount = required!(ENTITY, self.total_amount);
        ensure_present(ENTITY, "invoice_date", &invoice_date)?;

        Ok(Invoice {
            invoice_number,
            invoice_date,
            total_amount: ensure_positive(ENTITY, "total_amount", total_amount)?,
        })
    }
}
