//! HTML invoice documents.
//!
//! One layout, one substitution path: [`generate_invoice_html`] renders the
//! built-in tera layout against an [`InvoiceRecord`](crate::core::InvoiceRecord)
//! and returns a self-contained HTML5 document (inline styles, embedded logo).
//! Custom layouts compile with [`InvoiceLayout::parse`] and see the same
//! [`InvoiceView`] fields.
//!
//! Optional parts of the document (phone and address lines, booking details,
//! tax row, discount row, notes) are emitted only when their field carries a
//! value, and are dropped as whole blocks otherwise.
//!
//! Rendering is pure: the same record and options always give byte-identical
//! output, and any number of renders may run in parallel.

mod delivery;
mod options;
mod render;

pub use delivery::{InvoiceEmail, suggested_file_name};
pub use options::{DEFAULT_LOGO_SRC, RenderOptions, StudioProfile};
pub use render::{
    BookingView, ClientView, INVOICE_LAYOUT, InvoiceLayout, InvoiceView, ItemView, LAYOUT_NAME,
    StudioView, generate_invoice_html, generate_invoice_html_with, invoice_context,
    invoice_layout, invoice_view, render_invoice,
};
