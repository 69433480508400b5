use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::InvoiceError;
use super::format::round_cents;
use super::types::*;
use super::validation;

/// Builder for invoice records.
///
/// Subtotal and total are derived from the line items unless set explicitly.
///
/// ```
/// use studio_invoice::core::*;
/// use rust_decimal_macros::dec;
///
/// let record = InvoiceRecordBuilder::new("INV-001", "2024-01-01", "2024-01-15")
///     .client("Jane Doe", "jane@example.com")
///     .add_item(InvoiceLineItem::new("Wedding Package", dec!(1), dec!(2500)))
///     .tax_at_rate(dec!(8))
///     .build()
///     .unwrap();
///
/// assert_eq!(record.subtotal, dec!(2500));
/// assert_eq!(record.tax, Some(dec!(200.00)));
/// assert_eq!(record.total, dec!(2700.00));
/// ```
pub struct InvoiceRecordBuilder {
    invoice_number: String,
    invoice_date: String,
    due_date: String,
    client_name: Option<String>,
    client_email: Option<String>,
    client_phone: Option<String>,
    client_address: Option<String>,
    items: Vec<InvoiceLineItem>,
    subtotal: Option<Decimal>,
    tax: TaxInput,
    discount: Option<Decimal>,
    total: Option<Decimal>,
    notes: Option<String>,
    booking_details: Option<BookingDetails>,
}

enum TaxInput {
    None,
    Fixed {
        amount: Decimal,
        rate: Option<Decimal>,
    },
    AtRate(Decimal),
}

impl InvoiceRecordBuilder {
    pub fn new(
        invoice_number: impl Into<String>,
        invoice_date: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            invoice_number: invoice_number.into(),
            invoice_date: invoice_date.into(),
            due_date: due_date.into(),
            client_name: None,
            client_email: None,
            client_phone: None,
            client_address: None,
            items: Vec::new(),
            subtotal: None,
            tax: TaxInput::None,
            discount: None,
            total: None,
            notes: None,
            booking_details: None,
        }
    }

    pub fn client(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.client_name = Some(name.into());
        self.client_email = Some(email.into());
        self
    }

    pub fn client_phone(mut self, phone: impl Into<String>) -> Self {
        self.client_phone = Some(phone.into());
        self
    }

    pub fn client_address(mut self, address: impl Into<String>) -> Self {
        self.client_address = Some(address.into());
        self
    }

    pub fn add_item(mut self, item: InvoiceLineItem) -> Self {
        self.items.push(item);
        self
    }

    /// Override the derived subtotal.
    pub fn subtotal(mut self, subtotal: Decimal) -> Self {
        self.subtotal = Some(subtotal);
        self
    }

    /// Set a fixed tax amount, optionally with the rate to print next to it.
    pub fn tax(mut self, amount: Decimal, rate: Option<Decimal>) -> Self {
        self.tax = TaxInput::Fixed { amount, rate };
        self
    }

    /// Derive tax from the subtotal at `rate` percent, rounded to cents.
    pub fn tax_at_rate(mut self, rate: Decimal) -> Self {
        self.tax = TaxInput::AtRate(rate);
        self
    }

    pub fn discount(mut self, amount: Decimal) -> Self {
        self.discount = Some(amount);
        self
    }

    /// Override the derived total.
    pub fn total(mut self, total: Decimal) -> Self {
        self.total = Some(total);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn booking(
        mut self,
        service_name: impl Into<String>,
        booking_date: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        self.booking_details = Some(BookingDetails {
            service_name: service_name.into(),
            booking_date: booking_date.into(),
            location: location.into(),
        });
        self
    }

    /// Build the record, deriving totals and running validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<InvoiceRecord, InvoiceError> {
        let record = self.assemble()?;

        let errors = validation::validate_record(&record);
        if !errors.is_empty() {
            return Err(InvoiceError::from_findings(&errors));
        }

        Ok(record)
    }

    /// Build without validation, e.g. for tests or imported data.
    pub fn build_unchecked(self) -> Result<InvoiceRecord, InvoiceError> {
        self.assemble()
    }

    fn assemble(self) -> Result<InvoiceRecord, InvoiceError> {
        let client_name = self
            .client_name
            .ok_or_else(|| InvoiceError::Builder("client is required".into()))?;
        let client_email = self
            .client_email
            .ok_or_else(|| InvoiceError::Builder("client is required".into()))?;

        for (i, item) in self.items.iter().enumerate() {
            if item.quantity.checked_mul(item.rate).is_none() {
                return Err(overflow(&format!("items.{i}: quantity x rate")));
            }
        }

        let subtotal = match self.subtotal {
            Some(subtotal) => subtotal,
            None => self
                .items
                .iter()
                .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.amount))
                .ok_or_else(|| overflow("subtotal"))?,
        };

        let (tax, tax_rate) = match self.tax {
            TaxInput::None => (None, None),
            TaxInput::Fixed { amount, rate } => (Some(amount), rate),
            TaxInput::AtRate(rate) => {
                let amount = subtotal
                    .checked_mul(rate)
                    .and_then(|v| v.checked_div(dec!(100)))
                    .map(round_cents)
                    .ok_or_else(|| overflow("tax"))?;
                (Some(amount), Some(rate))
            }
        };

        let total = match self.total {
            Some(total) => total,
            None => subtotal
                .checked_add(tax.unwrap_or_default())
                .and_then(|v| v.checked_sub(self.discount.unwrap_or_default()))
                .ok_or_else(|| overflow("total"))?,
        };

        Ok(InvoiceRecord {
            invoice_number: self.invoice_number,
            invoice_date: self.invoice_date,
            due_date: self.due_date,
            client_name,
            client_email,
            client_phone: self.client_phone,
            client_address: self.client_address,
            items: self.items,
            subtotal,
            tax,
            tax_rate,
            discount: self.discount,
            total,
            notes: self.notes,
            booking_details: self.booking_details,
        })
    }
}

fn overflow(what: &str) -> InvoiceError {
    InvoiceError::Format(format!("{what} overflows the decimal range"))
}
