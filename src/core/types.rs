use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::format::round_cents;

/// One invoice, as handed to the renderer.
///
/// Totals are supplied by the caller and displayed as-is; nothing here is
/// recomputed at render time. Dates are pre-formatted display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    /// Display identifier, e.g. "INV-001".
    pub invoice_number: String,
    /// Issue date as it should be printed.
    pub invoice_date: String,
    /// Due date as it should be printed.
    pub due_date: String,
    pub client_name: String,
    pub client_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_address: Option<String>,
    /// Line items in display order.
    #[serde(default)]
    pub items: Vec<InvoiceLineItem>,
    /// Sum of item amounts.
    pub subtotal: Decimal,
    /// Tax amount. The tax row is shown only when this is non-zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<Decimal>,
    /// Tax rate in percent, e.g. `8.25`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<Decimal>,
    /// Discount amount, printed as a negative line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Decimal>,
    /// Amount due.
    pub total: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Link back to the session this invoice bills for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_details: Option<BookingDetails>,
}

/// A single billable entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    pub description: String,
    pub quantity: Decimal,
    /// Price per unit.
    pub rate: Decimal,
    /// Line total. Expected to equal `quantity * rate`; not enforced.
    pub amount: Decimal,
}

impl InvoiceLineItem {
    /// Create a line item with `amount = quantity * rate`.
    ///
    /// A product beyond the `Decimal` range saturates. The builder rejects
    /// such items and [`check_arithmetic`](super::check_arithmetic) reports them.
    pub fn new(description: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            rate,
            amount: quantity.saturating_mul(rate),
        }
    }

    /// Create a line item with an explicit amount (e.g. a package price).
    pub fn with_amount(
        description: impl Into<String>,
        quantity: Decimal,
        rate: Decimal,
        amount: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            quantity,
            rate,
            amount,
        }
    }
}

/// The photo session an invoice relates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub service_name: String,
    /// Session date as it should be printed.
    pub booking_date: String,
    pub location: String,
}

impl InvoiceRecord {
    /// Tax amount if it should appear on the document.
    ///
    /// An amount that prints as `0.00` counts as no tax.
    pub fn visible_tax(&self) -> Option<Decimal> {
        self.tax.filter(|t| !round_cents(*t).is_zero())
    }

    /// Discount amount if it should appear on the document.
    pub fn visible_discount(&self) -> Option<Decimal> {
        self.discount.filter(|d| !round_cents(*d).is_zero())
    }

    /// Sum of all line item amounts, or `None` if it overflows.
    pub fn items_total(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.amount))
    }
}

/// `Some(trimmed)` if the string has visible content.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
