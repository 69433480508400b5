//! Display formatting for amounts, quantities, and percentages.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a currency amount with exactly two decimal places.
///
/// Rounds half away from zero and never inserts grouping separators:
/// `19.5` → `"19.50"`, `2500` → `"2500.00"`, `0.005` → `"0.01"`.
pub fn format_money(amount: Decimal) -> String {
    format!("{:.2}", round_cents(amount))
}

/// Round to cents, half away from zero. This is the rounding every printed
/// amount goes through.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a quantity without trailing zeros (`1.50` → `"1.5"`, `2` → `"2"`).
pub fn format_quantity(quantity: Decimal) -> String {
    quantity.normalize().to_string()
}

/// Format a percentage without trailing zeros (`8.250` → `"8.25"`).
pub fn format_percent(rate: Decimal) -> String {
    rate.normalize().to_string()
}
