use chrono::{Datelike, NaiveDate};

use super::error::InvoiceError;

/// Invoice number sequence generator.
///
/// Generates numbers in the format `{prefix}{sequential}` such as "INV-001",
/// or `{prefix}{year}-{sequential}` such as "INV-2024-001" when a year
/// segment is enabled.
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    prefix: String,
    year: Option<i32>,
    next_number: u64,
    zero_pad: usize,
}

impl InvoiceNumberSequence {
    /// Create a new sequence starting at 1, without a year segment.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            year: None,
            next_number: 1,
            zero_pad: 3,
        }
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(prefix: impl Into<String>, next_number: u64) -> Self {
        Self {
            next_number,
            ..Self::new(prefix)
        }
    }

    /// Resume after the last issued number, e.g. "INV-041" → next is 42.
    pub fn resume_after(prefix: impl Into<String>, last: &str) -> Result<Self, InvoiceError> {
        let prefix = prefix.into();
        let seq = parse_sequence(&prefix, last)?;
        Ok(Self::starting_at(prefix, seq + 1))
    }

    /// Add a year segment to every issued number.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Set zero-padding width (default: 3, so "001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Generate the next invoice number.
    pub fn next_number(&mut self) -> String {
        let issued = self.format(self.next_number);
        self.next_number += 1;
        issued
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        self.format(self.next_number)
    }

    /// Get the year segment, if any.
    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Get the next number that will be issued (without prefix/formatting).
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }

    /// Auto-advance the year segment if the given date is in a later year,
    /// resetting the counter to 1. Returns true if the year was advanced.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        match self.year {
            Some(year) if date.year() > year => {
                self.year = Some(date.year());
                self.next_number = 1;
                true
            }
            _ => false,
        }
    }

    fn format(&self, num: u64) -> String {
        match self.year {
            Some(year) => format!(
                "{}{}-{:0>width$}",
                self.prefix,
                year,
                num,
                width = self.zero_pad
            ),
            None => format!("{}{:0>width$}", self.prefix, num, width = self.zero_pad),
        }
    }
}

/// Extract the sequential part of an issued number.
///
/// Accepts both "INV-007" and "INV-2024-007" for prefix "INV-".
pub fn parse_sequence(prefix: &str, number: &str) -> Result<u64, InvoiceError> {
    let rest = number.strip_prefix(prefix).ok_or_else(|| {
        InvoiceError::Numbering(format!("'{number}' does not start with prefix '{prefix}'"))
    })?;
    let digits = rest.rsplit('-').next().unwrap_or(rest);
    digits
        .parse::<u64>()
        .map_err(|_| InvoiceError::Numbering(format!("'{number}' has no numeric sequence part")))
}
