use serde::{Deserialize, Serialize};

/// Built-in studio mark, embedded so the document needs no external resources.
pub const DEFAULT_LOGO_SRC: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHZpZXdCb3g9IjAgMCA2NCA2NCI+PHJlY3QgeD0iNCIgeT0iMTYiIHdpZHRoPSI1NiIgaGVpZ2h0PSI0MCIgcng9IjYiIGZpbGw9IiMxZjI5MzMiLz48cmVjdCB4PSIyMiIgeT0iOCIgd2lkdGg9IjIwIiBoZWlnaHQ9IjEwIiByeD0iMyIgZmlsbD0iIzFmMjkzMyIvPjxjaXJjbGUgY3g9IjMyIiBjeT0iMzYiIHI9IjEzIiBmaWxsPSIjZjVmN2ZhIi8+PGNpcmNsZSBjeD0iMzIiIGN5PSIzNiIgcj0iOCIgZmlsbD0iI2M5YTIyNyIvPjxjaXJjbGUgY3g9IjUwIiBjeT0iMjQiIHI9IjMiIGZpbGw9IiNjOWEyMjciLz48L3N2Zz4=";

/// Knobs for invoice rendering.
///
/// Every field has a default, so a partial TOML table is enough:
///
/// ```toml
/// currency_symbol = "€"
///
/// [studio]
/// name = "Northlight Photography"
/// email = "hello@northlight.example"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Printed before every amount.
    pub currency_symbol: String,
    /// HTML-escape interpolated record text. Turning this off prints names
    /// and notes verbatim, so the caller must sanitize them.
    pub escape_html: bool,
    /// Used in the `<title>` and in e-mail subjects.
    pub document_title: String,
    /// `src` of the header logo: a data URI or URL.
    pub logo_src: String,
    pub studio: StudioProfile,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            escape_html: true,
            document_title: "Invoice".to_string(),
            logo_src: DEFAULT_LOGO_SRC.to_string(),
            studio: StudioProfile::default(),
        }
    }
}

/// The business printed in the invoice header and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioProfile {
    pub name: String,
    pub tagline: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

impl Default for StudioProfile {
    fn default() -> Self {
        Self {
            name: "Photography Studio".to_string(),
            tagline: Some("Capturing your story, one frame at a time".to_string()),
            email: None,
            phone: None,
            website: None,
        }
    }
}
