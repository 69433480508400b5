//! # studio-invoice
//!
//! Client invoices for a photography studio: invoice records, validation,
//! and a self-contained HTML invoice document.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Amounts are printed with exactly two decimals.
//!
//! ## Quick Start
//!
//! ```rust
//! use studio_invoice::core::*;
//! use studio_invoice::html::generate_invoice_html;
//! use rust_decimal_macros::dec;
//!
//! let record = InvoiceRecordBuilder::new("INV-001", "2024-01-01", "2024-01-15")
//!     .client("Jane Doe", "jane@example.com")
//!     .client_phone("+1 555 0100")
//!     .booking("Wedding Photography", "2024-06-22", "Rosewood Gardens")
//!     .add_item(InvoiceLineItem::new("Wedding Package", dec!(1), dec!(2500)))
//!     .add_item(InvoiceLineItem::new("Extra Hour", dec!(2), dec!(175)))
//!     .tax_at_rate(dec!(8))
//!     .build()
//!     .unwrap();
//!
//! let html = generate_invoice_html(&record).unwrap();
//! assert!(html.contains("$2850.00"));
//! assert!(html.contains("Tax (8%)"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice record types, builders, validation, numbering |
//! | `html` (default) | HTML invoice layout rendered with tera |
//! | `json` | Decode the camelCase JSON invoice contract |
//! | `cli` | `studio-invoice` command-line renderer |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "html")]
pub mod html;

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
