use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use studio_invoice::core::*;

fn portrait() -> InvoiceLineItem {
    InvoiceLineItem::new("Portrait Session", dec!(1), dec!(350))
}

// --- Builder ---

#[test]
fn builder_derives_totals() {
    let record = InvoiceRecordBuilder::new("INV-010", "2024-05-01", "2024-05-15")
        .client("Alex Kim", "alex@example.com")
        .add_item(portrait())
        .add_item(InvoiceLineItem::new("Prints 8x10", dec!(4), dec!(12.5)))
        .build()
        .unwrap();

    assert_eq!(record.subtotal, dec!(400));
    assert_eq!(record.total, dec!(400));
    assert_eq!(record.tax, None);
    assert_eq!(record.items.len(), 2);
    assert_eq!(record.items[1].amount, dec!(50));
}

#[test]
fn builder_tax_at_rate_rounds_to_cents() {
    let record = InvoiceRecordBuilder::new("INV-011", "2024-05-01", "2024-05-15")
        .client("Alex Kim", "alex@example.com")
        .add_item(InvoiceLineItem::new("Headshots", dec!(3), dec!(33.33)))
        .tax_at_rate(dec!(7.5))
        .discount(dec!(10))
        .build()
        .unwrap();

    // 99.99 * 7.5% = 7.49925 → 7.50
    assert_eq!(record.subtotal, dec!(99.99));
    assert_eq!(record.tax, Some(dec!(7.50)));
    assert_eq!(record.tax_rate, Some(dec!(7.5)));
    assert_eq!(record.total, dec!(97.49));
    assert!(check_arithmetic(&record).is_empty());
}

#[test]
fn builder_fixed_tax_and_explicit_totals_are_kept() {
    let record = InvoiceRecordBuilder::new("INV-012", "2024-05-01", "2024-05-15")
        .client("Alex Kim", "alex@example.com")
        .add_item(portrait())
        .tax(dec!(20), None)
        .subtotal(dec!(300))
        .total(dec!(999))
        .build()
        .unwrap();

    assert_eq!(record.subtotal, dec!(300));
    assert_eq!(record.tax, Some(dec!(20)));
    assert_eq!(record.tax_rate, None);
    assert_eq!(record.total, dec!(999));
    assert_eq!(check_arithmetic(&record).len(), 2);
}

#[test]
fn builder_requires_client() {
    let err = InvoiceRecordBuilder::new("INV-013", "2024-05-01", "2024-05-15")
        .add_item(portrait())
        .build()
        .unwrap_err();
    assert!(matches!(err, InvoiceError::Builder(_)));
}

#[test]
fn builder_validation_reports_all_findings() {
    let err = InvoiceRecordBuilder::new("", "2024-05-01", "")
        .client("Alex Kim", "alex@example.com")
        .build()
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("invoiceNumber"));
    assert!(msg.contains("dueDate"));
}

#[test]
fn build_unchecked_skips_validation() {
    let record = InvoiceRecordBuilder::new("", "", "")
        .client("", "")
        .build_unchecked()
        .unwrap();
    assert_eq!(validate_record(&record).len(), 5);
}

#[test]
fn empty_items_are_valid() {
    let record = InvoiceRecordBuilder::new("INV-014", "2024-05-01", "2024-05-15")
        .client("Alex Kim", "alex@example.com")
        .build()
        .unwrap();
    assert!(record.items.is_empty());
    assert_eq!(record.subtotal, dec!(0));
    assert_eq!(record.total, dec!(0));
}

#[test]
fn builder_rejects_amounts_beyond_decimal_range() {
    let huge = dec!(100000000000000000000);
    let item = InvoiceLineItem::new("Gallery licence", huge, huge);
    assert_eq!(item.amount, Decimal::MAX);

    let err = InvoiceRecordBuilder::new("INV-018", "2024-05-01", "2024-05-15")
        .client("Alex Kim", "alex@example.com")
        .add_item(item)
        .build()
        .unwrap_err();
    assert!(matches!(err, InvoiceError::Format(_)), "got {err:?}");

    let err = InvoiceRecordBuilder::new("INV-019", "2024-05-01", "2024-05-15")
        .client("Alex Kim", "alex@example.com")
        .add_item(InvoiceLineItem::with_amount("Print run", dec!(1), Decimal::MAX, Decimal::MAX))
        .add_item(InvoiceLineItem::with_amount("Print run", dec!(1), Decimal::MAX, Decimal::MAX))
        .build_unchecked()
        .unwrap_err();
    assert!(err.to_string().contains("subtotal"));
}

// --- Validation ---

#[test]
fn arithmetic_check_survives_overflowing_items() {
    let huge = dec!(100000000000000000000);
    let mut record = InvoiceRecordBuilder::new("INV-020", "2024-05-01", "2024-05-15")
        .client("Alex Kim", "alex@example.com")
        .build()
        .unwrap();
    record.items.push(InvoiceLineItem::with_amount("Gallery licence", huge, huge, dec!(0)));

    let errors = check_arithmetic(&record);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "items.0.amount");
    assert_eq!(errors[0].rule.as_deref(), Some("SUM-01"));
}

#[test]
fn incomplete_booking_is_rejected() {
    let err = InvoiceRecordBuilder::new("INV-015", "2024-05-01", "2024-05-15")
        .client("Alex Kim", "alex@example.com")
        .booking("Engagement Shoot", "", "Lighthouse Point")
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("bookingDetails.bookingDate"));
}

#[test]
fn negative_discount_is_rejected() {
    let record = InvoiceRecordBuilder::new("INV-016", "2024-05-01", "2024-05-15")
        .client("Alex Kim", "alex@example.com")
        .add_item(portrait())
        .discount(dec!(-5))
        .build_unchecked()
        .unwrap();
    let errors = validate_record(&record);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "discount");
    assert_eq!(errors[0].rule.as_deref(), Some("AMT-03"));
}

#[test]
fn validation_error_display() {
    let e = ValidationError::with_rule("clientEmail", "required field must not be empty", "REQ-01");
    assert_eq!(
        e.to_string(),
        "[REQ-01] clientEmail: required field must not be empty"
    );
    let e = ValidationError::new("notes", "too long");
    assert_eq!(e.to_string(), "notes: too long");
}

// --- Record helpers ---

#[test]
fn visible_tax_and_discount_hide_zero() {
    let mut record = InvoiceRecordBuilder::new("INV-017", "2024-05-01", "2024-05-15")
        .client("Alex Kim", "alex@example.com")
        .add_item(portrait())
        .tax(dec!(0), Some(dec!(0)))
        .discount(dec!(0))
        .build()
        .unwrap();
    assert_eq!(record.visible_tax(), None);
    assert_eq!(record.visible_discount(), None);

    record.discount = Some(dec!(15));
    assert_eq!(record.visible_discount(), Some(dec!(15)));
}

#[test]
fn sub_cent_tax_and_discount_count_as_zero() {
    let mut record = InvoiceRecordBuilder::new("INV-021", "2024-05-01", "2024-05-15")
        .client("Alex Kim", "alex@example.com")
        .add_item(portrait())
        .tax(dec!(0.004), None)
        .discount(dec!(0.0049))
        .build()
        .unwrap();
    assert_eq!(record.visible_tax(), None);
    assert_eq!(record.visible_discount(), None);

    record.tax = Some(dec!(0.005));
    assert_eq!(record.visible_tax(), Some(dec!(0.005)));
}

// --- Formatting ---

#[test]
fn money_formatting() {
    assert_eq!(format_money(dec!(19.5)), "19.50");
    assert_eq!(format_money(dec!(100)), "100.00");
    assert_eq!(format_money(dec!(2500)), "2500.00");
    assert_eq!(format_quantity(dec!(3)), "3");
    assert_eq!(format_percent(dec!(8.25)), "8.25");
}

// --- Numbering ---

#[test]
fn numbering_matches_site_format() {
    let mut seq = InvoiceNumberSequence::new("INV-");
    let first = seq.next_number();
    assert_eq!(first, "INV-001");

    let record = InvoiceRecordBuilder::new(first, "2024-05-01", "2024-05-15")
        .client("Alex Kim", "alex@example.com")
        .build()
        .unwrap();
    assert_eq!(parse_sequence("INV-", &record.invoice_number).unwrap(), 1);
}

// --- Crate metadata ---

#[test]
fn package_description_is_plain_text() {
    let description = env!("CARGO_PKG_DESCRIPTION");
    assert!(description.starts_with("Invoice rendering for a photography studio"));
    assert!(description.is_ascii(), "{description}");
}
