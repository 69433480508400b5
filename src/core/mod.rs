//! Core invoice types, validation, formatting, and numbering.
//!
//! This module provides the record the renderer consumes, plus the checks
//! a caller can run on it before producing a document.

mod builder;
mod error;
pub mod format;
mod numbering;
mod types;
mod validation;

pub use builder::*;
pub use error::*;
pub use format::{format_money, format_percent, format_quantity, round_cents};
pub use numbering::*;
pub use types::*;
pub(crate) use types::non_blank;
pub use validation::*;
