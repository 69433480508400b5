use serde::Serialize;

use crate::core::InvoiceRecord;

use super::options::RenderOptions;

/// Everything a mail transport needs to send a rendered invoice.
///
/// Sending is left to the caller; this only assembles recipient metadata
/// and the subject line around the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceEmail {
    pub to_name: String,
    pub to_email: String,
    pub subject: String,
    pub html: String,
}

impl InvoiceEmail {
    pub fn for_invoice(record: &InvoiceRecord, html: String, options: &RenderOptions) -> Self {
        Self {
            to_name: record.client_name.trim().to_string(),
            to_email: record.client_email.trim().to_string(),
            subject: format!(
                "{} {} from {}",
                options.document_title, record.invoice_number, options.studio.name
            ),
            html,
        }
    }
}

/// File name for saving a rendered invoice, e.g. `invoice-INV-001.html`.
///
/// Characters outside `[A-Za-z0-9._-]` are replaced with `_`.
pub fn suggested_file_name(record: &InvoiceRecord) -> String {
    let safe: String = record
        .invoice_number
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("invoice-{safe}.html")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InvoiceLineItem, InvoiceRecordBuilder};
    use rust_decimal_macros::dec;

    fn record(number: &str) -> InvoiceRecord {
        InvoiceRecordBuilder::new(number, "2024-01-01", "2024-01-15")
            .client("Jane Doe ", "jane@example.com")
            .add_item(InvoiceLineItem::new("Portrait Session", dec!(1), dec!(350)))
            .build()
            .unwrap()
    }

    #[test]
    fn subject_embeds_invoice_number() {
        let mut options = RenderOptions::default();
        options.studio.name = "Northlight".into();
        let email = InvoiceEmail::for_invoice(&record("INV-001"), "<html></html>".into(), &options);
        assert_eq!(email.subject, "Invoice INV-001 from Northlight");
        assert_eq!(email.to_name, "Jane Doe");
        assert_eq!(email.to_email, "jane@example.com");
    }

    #[test]
    fn file_name_is_sanitized() {
        assert_eq!(suggested_file_name(&record("INV-001")), "invoice-INV-001.html");
        assert_eq!(
            suggested_file_name(&record("2024/07 #3")),
            "invoice-2024_07__3.html"
        );
    }
}
