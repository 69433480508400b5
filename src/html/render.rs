use std::sync::OnceLock;

use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

use crate::core::{
    InvoiceError, InvoiceRecord, format_money, format_percent, format_quantity, non_blank,
    validate_record,
};

use super::options::RenderOptions;

/// The built-in invoice layout source.
pub const INVOICE_LAYOUT: &str = include_str!("invoice_layout.html");

/// Name every layout is registered under. The `.html` suffix is what turns
/// on tera's autoescaping.
pub const LAYOUT_NAME: &str = "invoice.html";

static LAYOUT: OnceLock<InvoiceLayout> = OnceLock::new();

/// A compiled invoice layout.
///
/// The template is held twice, with and without HTML autoescaping, and
/// [`RenderOptions::escape_html`] picks one per render.
#[derive(Debug, Clone)]
pub struct InvoiceLayout {
    escaped: Tera,
    verbatim: Tera,
}

impl InvoiceLayout {
    /// Compile a layout written in tera syntax against [`InvoiceView`].
    pub fn parse(source: &str) -> Result<Self, InvoiceError> {
        let mut escaped = Tera::default();
        escaped.add_raw_template(LAYOUT_NAME, source)?;

        let mut verbatim = escaped.clone();
        verbatim.autoescape_on(vec![]);

        debug!(bytes = source.len(), "compiled invoice layout");
        Ok(Self { escaped, verbatim })
    }

    /// Render against a prepared context.
    ///
    /// A variable the context does not define is an error, never an empty
    /// string.
    pub fn render(&self, context: &Context, escape_html: bool) -> Result<String, InvoiceError> {
        let tera = if escape_html {
            &self.escaped
        } else {
            &self.verbatim
        };
        Ok(tera.render(LAYOUT_NAME, context)?)
    }
}

/// The built-in layout, compiled on first use and shared afterwards.
pub fn invoice_layout() -> Result<&'static InvoiceLayout, InvoiceError> {
    if let Some(layout) = LAYOUT.get() {
        return Ok(layout);
    }
    let layout = InvoiceLayout::parse(INVOICE_LAYOUT)?;
    Ok(LAYOUT.get_or_init(|| layout))
}

/// Everything the invoice layout prints, already formatted for display.
///
/// Optional fields that are absent, blank, or print as zero are `None`, so
/// `{% if %}` blocks around them drop out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceView<'a> {
    pub document_title: &'a str,
    pub logo_src: &'a str,
    pub currency: &'a str,
    pub studio: StudioView<'a>,
    pub invoice_number: &'a str,
    pub invoice_date: &'a str,
    pub due_date: &'a str,
    pub client: ClientView<'a>,
    pub booking: Option<BookingView<'a>>,
    pub items: Vec<ItemView<'a>>,
    pub subtotal: String,
    pub tax: Option<String>,
    /// Percent without trailing zeros, e.g. `8.25`.
    pub tax_rate: Option<String>,
    /// Positive amount; the layout adds the minus sign.
    pub discount: Option<String>,
    pub total: String,
    pub notes: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudioView<'a> {
    pub name: &'a str,
    pub tagline: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub website: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientView<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingView<'a> {
    pub service_name: &'a str,
    pub booking_date: &'a str,
    pub location: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView<'a> {
    pub description: &'a str,
    pub quantity: String,
    pub rate: String,
    pub amount: String,
}

/// Render an invoice with the built-in layout and default options.
///
/// ```
/// use studio_invoice::core::*;
/// use studio_invoice::html::generate_invoice_html;
/// use rust_decimal_macros::dec;
///
/// let record = InvoiceRecordBuilder::new("INV-001", "2024-01-01", "2024-01-15")
///     .client("Jane Doe", "jane@example.com")
///     .add_item(InvoiceLineItem::new("Wedding Package", dec!(1), dec!(2500)))
///     .build()
///     .unwrap();
///
/// let html = generate_invoice_html(&record).unwrap();
/// assert!(html.contains("$2500.00"));
/// assert!(!html.contains("{{"));
/// ```
pub fn generate_invoice_html(record: &InvoiceRecord) -> Result<String, InvoiceError> {
    generate_invoice_html_with(record, &RenderOptions::default())
}

/// Render an invoice with the built-in layout.
pub fn generate_invoice_html_with(
    record: &InvoiceRecord,
    options: &RenderOptions,
) -> Result<String, InvoiceError> {
    render_invoice(invoice_layout()?, record, options)
}

/// Render an invoice with a caller-supplied layout.
///
/// The record is validated first; a record with blank required fields never
/// produces a document.
pub fn render_invoice(
    layout: &InvoiceLayout,
    record: &InvoiceRecord,
    options: &RenderOptions,
) -> Result<String, InvoiceError> {
    let errors = validate_record(record);
    if !errors.is_empty() {
        return Err(InvoiceError::from_findings(&errors));
    }

    let context = invoice_context(record, options)?;
    let html = layout.render(&context, options.escape_html)?;

    debug!(
        invoice_number = %record.invoice_number,
        items = record.items.len(),
        bytes = html.len(),
        "rendered invoice"
    );
    Ok(html)
}

/// The tera context for one invoice.
pub fn invoice_context(
    record: &InvoiceRecord,
    options: &RenderOptions,
) -> Result<Context, InvoiceError> {
    Ok(Context::from_serialize(invoice_view(record, options))?)
}

/// Format a record for display.
pub fn invoice_view<'a>(
    record: &'a InvoiceRecord,
    options: &'a RenderOptions,
) -> InvoiceView<'a> {
    let studio = &options.studio;

    InvoiceView {
        document_title: &options.document_title,
        logo_src: &options.logo_src,
        currency: &options.currency_symbol,
        studio: StudioView {
            name: &studio.name,
            tagline: non_blank(studio.tagline.as_deref()),
            email: non_blank(studio.email.as_deref()),
            phone: non_blank(studio.phone.as_deref()),
            website: non_blank(studio.website.as_deref()),
        },
        invoice_number: &record.invoice_number,
        invoice_date: &record.invoice_date,
        due_date: &record.due_date,
        client: ClientView {
            name: &record.client_name,
            email: &record.client_email,
            phone: non_blank(record.client_phone.as_deref()),
            address: non_blank(record.client_address.as_deref()),
        },
        booking: record.booking_details.as_ref().map(|b| BookingView {
            service_name: &b.service_name,
            booking_date: &b.booking_date,
            location: &b.location,
        }),
        items: record
            .items
            .iter()
            .map(|item| ItemView {
                description: &item.description,
                quantity: format_quantity(item.quantity),
                rate: format_money(item.rate),
                amount: format_money(item.amount),
            })
            .collect(),
        subtotal: format_money(record.subtotal),
        tax: record.visible_tax().map(format_money),
        tax_rate: record.tax_rate.map(format_percent),
        discount: record.visible_discount().map(format_money),
        total: format_money(record.total),
        notes: non_blank(record.notes.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record() -> InvoiceRecord {
        InvoiceRecord {
            invoice_number: "INV-001".into(),
            invoice_date: "2024-01-01".into(),
            due_date: "2024-01-15".into(),
            client_name: "Jane Doe".into(),
            client_email: "jane@example.com".into(),
            client_phone: Some("  ".into()),
            client_address: None,
            items: Vec::new(),
            subtotal: dec!(0),
            tax: Some(dec!(0.001)),
            tax_rate: Some(dec!(0)),
            discount: None,
            total: dec!(0),
            notes: None,
            booking_details: None,
        }
    }

    #[test]
    fn builtin_layout_compiles() {
        assert!(invoice_layout().is_ok());
    }

    #[test]
    fn view_drops_blank_and_zero_fields() {
        let record = record();
        let options = RenderOptions::default();
        let view = invoice_view(&record, &options);
        assert_eq!(view.client.phone, None);
        assert_eq!(view.tax, None);
        assert_eq!(view.tax_rate.as_deref(), Some("0"));
        assert_eq!(view.subtotal, "0.00");
        assert_eq!(view.studio.name, "Photography Studio");
    }

    #[test]
    fn undefined_variable_is_an_error() {
        let layout = InvoiceLayout::parse("{{ invoice_number }} {{ deposit }}").unwrap();
        let err = render_invoice(&layout, &record(), &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, InvoiceError::Template(_)), "got {err:?}");
    }

    #[test]
    fn malformed_layout_is_rejected() {
        let err = InvoiceLayout::parse("{% if tax %}<tr></tr>").unwrap_err();
        assert!(matches!(err, InvoiceError::Template(_)));
    }
}
