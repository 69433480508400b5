//! Decoding the JSON invoice contract.
//!
//! The input uses camelCase keys:
//!
//! ```json
//! {
//!   "invoiceNumber": "INV-001", "invoiceDate": "2024-01-01", "dueDate": "2024-01-15",
//!   "clientName": "Jane Doe", "clientEmail": "jane@example.com",
//!   "items": [{ "description": "Wedding Package", "quantity": 1, "rate": 2500, "amount": 2500 }],
//!   "subtotal": 2500, "total": 2500
//! }
//! ```
//!
//! Amounts may be JSON numbers or decimal strings. A value of the wrong type
//! (e.g. `"rate": "abc"`) is reported as [`InvoiceError::Format`]; input that
//! is not JSON at all is [`InvoiceError::Json`], and a missing required key is
//! [`InvoiceError::Validation`].

use serde_json::error::Category;

use crate::core::{InvoiceError, InvoiceRecord, validate_record};

/// Decode and validate an invoice record.
pub fn from_json(input: &str) -> Result<InvoiceRecord, InvoiceError> {
    let record = from_json_unchecked(input)?;
    let errors = validate_record(&record);
    if !errors.is_empty() {
        return Err(InvoiceError::from_findings(&errors));
    }
    Ok(record)
}

/// Decode without running record validation.
pub fn from_json_unchecked(input: &str) -> Result<InvoiceRecord, InvoiceError> {
    serde_json::from_str(input).map_err(map_error)
}

/// Encode a record using the same camelCase contract.
pub fn to_json(record: &InvoiceRecord) -> Result<String, InvoiceError> {
    serde_json::to_string_pretty(record).map_err(|e| InvoiceError::Json(e.to_string()))
}

fn map_error(e: serde_json::Error) -> InvoiceError {
    let msg = e.to_string();
    match e.classify() {
        Category::Data if msg.starts_with("missing field") => InvoiceError::Validation(msg),
        Category::Data => InvoiceError::Format(msg),
        Category::Io | Category::Syntax | Category::Eof => InvoiceError::Json(msg),
    }
}
