use rust_decimal_macros::dec;
use studio_invoice::core::*;
use studio_invoice::html::{InvoiceEmail, RenderOptions, generate_invoice_html_with};

fn main() {
    let mut numbers = InvoiceNumberSequence::new("INV-");

    // Invoice for a wedding booking with tax and a returning-client discount
    let record = InvoiceRecordBuilder::new(numbers.next_number(), "June 1, 2024", "June 15, 2024")
        .client("Jane Doe", "jane@example.com")
        .client_phone("+1 (555) 010-2030")
        .client_address("12 Harbor Lane\nPortland, ME 04101")
        .booking("Wedding Photography", "June 22, 2024", "Rosewood Gardens")
        .add_item(InvoiceLineItem::new("Wedding Package", dec!(1), dec!(2500)))
        .add_item(InvoiceLineItem::new("Additional Hour", dec!(2), dec!(175)))
        .add_item(InvoiceLineItem::new("Fine Art Album", dec!(1), dec!(420)))
        .tax_at_rate(dec!(5.5))
        .discount(dec!(150))
        .notes("A 50% deposit is due to hold the date.\nThank you!")
        .build()
        .expect("invoice should be valid");

    let mut options = RenderOptions::default();
    options.studio.name = "Northlight Photography".into();
    options.studio.email = Some("hello@northlight.example".into());

    let html = generate_invoice_html_with(&record, &options).expect("invoice should render");
    let email = InvoiceEmail::for_invoice(&record, html, &options);

    println!("To:      {} <{}>", email.to_name, email.to_email);
    println!("Subject: {}", email.subject);
    println!("---");
    for item in &record.items {
        println!(
            "  {} x {} @ {} = {}",
            format_quantity(item.quantity),
            item.description,
            format_money(item.rate),
            format_money(item.amount)
        );
    }
    println!("---");
    println!("Subtotal: {}", format_money(record.subtotal));
    if let Some(tax) = record.visible_tax() {
        println!("Tax:      {}", format_money(tax));
    }
    if let Some(discount) = record.visible_discount() {
        println!("Discount: -{}", format_money(discount));
    }
    println!("Total:    {}", format_money(record.total));
    println!("HTML:     {} bytes", email.html.len());
}
