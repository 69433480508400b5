use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::format::round_cents;
use super::types::*;

/// Upper bound on line items accepted for one document.
pub const MAX_LINE_ITEMS: usize = 10_000;

/// Validate that an invoice record can be rendered.
/// Returns all validation errors found (not just the first).
pub fn validate_record(record: &InvoiceRecord) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let required = [
        ("invoiceNumber", &record.invoice_number),
        ("invoiceDate", &record.invoice_date),
        ("dueDate", &record.due_date),
        ("clientName", &record.client_name),
        ("clientEmail", &record.client_email),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.push(ValidationError::with_rule(
                field,
                "required field must not be empty",
                "REQ-01",
            ));
        }
    }

    if record.invoice_number.len() > 200 {
        errors.push(ValidationError::with_rule(
            "invoiceNumber",
            "invoice number cannot exceed 200 characters",
            "REQ-02",
        ));
    }

    if record.items.len() > MAX_LINE_ITEMS {
        errors.push(ValidationError::with_rule(
            "items",
            format!("invoice cannot have more than {MAX_LINE_ITEMS} line items"),
            "REQ-03",
        ));
    }

    for (i, item) in record.items.iter().enumerate() {
        if item.description.trim().is_empty() {
            errors.push(ValidationError::with_rule(
                format!("items.{i}.description"),
                "line item description must not be empty",
                "REQ-04",
            ));
        }
    }

    if let Some(rate) = record
        .tax_rate
        .filter(|r| !(Decimal::ZERO..=dec!(100)).contains(r))
    {
        errors.push(ValidationError::with_rule(
            "taxRate",
            format!("tax rate {rate} must be between 0 and 100"),
            "AMT-01",
        ));
    }

    if record.tax.is_some_and(|t| t.is_sign_negative() && !t.is_zero()) {
        errors.push(ValidationError::with_rule(
            "tax",
            "tax must not be negative",
            "AMT-02",
        ));
    }

    if record
        .discount
        .is_some_and(|d| d.is_sign_negative() && !d.is_zero())
    {
        errors.push(ValidationError::with_rule(
            "discount",
            "discount is printed with a minus sign and must be given as a positive amount",
            "AMT-03",
        ));
    }

    if let Some(booking) = &record.booking_details {
        let fields = [
            ("bookingDetails.serviceName", &booking.service_name),
            ("bookingDetails.bookingDate", &booking.booking_date),
            ("bookingDetails.location", &booking.location),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                errors.push(ValidationError::with_rule(
                    field,
                    "booking details must be complete when present",
                    "REQ-05",
                ));
            }
        }
    }

    errors
}

/// Check that the caller-supplied amounts add up.
///
/// The renderer prints amounts verbatim, so this is advisory: it reports
/// inconsistencies but never changes the record. Comparisons are made after
/// rounding to cents. A sum or product that leaves the `Decimal` range is
/// reported under the rule it was computed for.
pub fn check_arithmetic(record: &InvoiceRecord) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (i, item) in record.items.iter().enumerate() {
        let field = format!("items.{i}.amount");
        match item.quantity.checked_mul(item.rate).map(round_cents) {
            Some(expected) if round_cents(item.amount) == expected => {}
            Some(expected) => errors.push(ValidationError::with_rule(
                field,
                format!(
                    "amount {} does not match quantity {} x rate {} = {}",
                    item.amount, item.quantity, item.rate, expected
                ),
                "SUM-01",
            )),
            None => errors.push(overflow(field, "quantity x rate", "SUM-01")),
        }
    }

    match record.items_total().map(round_cents) {
        Some(items_total) if round_cents(record.subtotal) == items_total => {}
        Some(items_total) => errors.push(ValidationError::with_rule(
            "subtotal",
            format!(
                "subtotal {} does not match sum of line amounts {}",
                record.subtotal, items_total
            ),
            "SUM-02",
        )),
        None => errors.push(overflow("subtotal", "sum of line amounts", "SUM-02")),
    }

    let expected_total = record
        .subtotal
        .checked_add(record.tax.unwrap_or_default())
        .and_then(|v| v.checked_sub(record.discount.unwrap_or_default()))
        .map(round_cents);
    match expected_total {
        Some(expected) if round_cents(record.total) == expected => {}
        Some(expected) => errors.push(ValidationError::with_rule(
            "total",
            format!(
                "total {} does not match subtotal + tax - discount = {}",
                record.total, expected
            ),
            "SUM-03",
        )),
        None => errors.push(overflow("total", "subtotal + tax - discount", "SUM-03")),
    }

    if let (Some(tax), Some(rate)) = (record.tax, record.tax_rate) {
        let expected_tax = record
            .subtotal
            .checked_mul(rate)
            .and_then(|v| v.checked_div(dec!(100)))
            .map(round_cents);
        match expected_tax {
            Some(expected) if round_cents(tax) == expected => {}
            Some(expected) => errors.push(ValidationError::with_rule(
                "tax",
                format!("tax {tax} does not match {rate}% of subtotal = {expected}"),
                "SUM-04",
            )),
            None => errors.push(overflow("tax", "subtotal x tax rate", "SUM-04")),
        }
    }

    errors
}

fn overflow(field: impl Into<String>, what: &str, rule: &str) -> ValidationError {
    ValidationError::with_rule(field, format!("{what} overflows"), rule)
}
