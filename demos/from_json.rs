use studio_invoice::html::{generate_invoice_html, suggested_file_name};
use studio_invoice::json::from_json;
use studio_invoice::{InvoiceError, check_arithmetic};

const INPUT: &str = r#"{
  "invoiceNumber": "INV-007",
  "invoiceDate": "2024-03-01",
  "dueDate": "2024-03-15",
  "clientName": "Sam Rivera",
  "clientEmail": "sam@example.com",
  "items": [
    { "description": "Family Portraits", "quantity": 1, "rate": 450, "amount": 450 },
    { "description": "Prints 8x10", "quantity": 4, "rate": 19.5, "amount": 78 }
  ],
  "subtotal": 528,
  "tax": 43.56,
  "taxRate": 8.25,
  "total": 571.56,
  "bookingDetails": {
    "serviceName": "Family Session",
    "bookingDate": "2024-02-24",
    "location": "Eastern Promenade"
  }
}"#;

fn main() -> Result<(), InvoiceError> {
    let record = from_json(INPUT)?;

    for finding in check_arithmetic(&record) {
        eprintln!("warning: {finding}");
    }

    let html = generate_invoice_html(&record)?;
    println!("{} ({} bytes)", suggested_file_name(&record), html.len());
    Ok(())
}
