//! The parts of the `studio-invoice` command that do not touch the terminal:
//! config resolution and the `check` findings.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::{InvoiceError, InvoiceRecord, ValidationError, check_arithmetic, validate_record};
use crate::html::RenderOptions;

/// Environment variable naming a default config file.
pub const CONFIG_ENV: &str = "STUDIO_INVOICE_CONFIG";

/// Flags that override values from the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    pub currency: Option<String>,
    pub no_escape: bool,
}

/// Pick the config file. An explicit `--config` wins over the environment.
pub fn config_path(explicit: Option<PathBuf>, from_env: Option<OsString>) -> Option<PathBuf> {
    explicit.or_else(|| from_env.filter(|v| !v.is_empty()).map(PathBuf::from))
}

/// Read render options from a TOML file; `None` gives the built-in defaults.
pub fn load_options(path: Option<&Path>) -> Result<RenderOptions, InvoiceError> {
    let Some(path) = path else {
        debug!("no config file, using defaults");
        return Ok(RenderOptions::default());
    };

    debug!(path = %path.display(), "loading config");
    let text = fs::read_to_string(path)
        .map_err(|e| InvoiceError::Config(format!("cannot read {}: {e}", path.display())))?;
    toml::from_str(&text)
        .map_err(|e| InvoiceError::Config(format!("invalid {}: {e}", path.display())))
}

/// Defaults, then the config file, then command-line flags.
pub fn resolve_options(
    explicit: Option<PathBuf>,
    from_env: Option<OsString>,
    overrides: &OptionOverrides,
) -> Result<RenderOptions, InvoiceError> {
    let path = config_path(explicit, from_env);
    let mut options = load_options(path.as_deref())?;

    if let Some(symbol) = &overrides.currency {
        options.currency_symbol = symbol.clone();
    }
    if overrides.no_escape {
        options.escape_html = false;
    }
    Ok(options)
}

/// Validation findings followed by arithmetic findings.
pub fn collect_findings(record: &InvoiceRecord) -> Vec<ValidationError> {
    validate_record(record)
        .into_iter()
        .chain(check_arithmetic(record))
        .collect()
}
