//! Brazilian-locale currency parsing and formatting.
//!
//! Amounts travel through the domain as [`Decimal`]. Text values use the
//! `R$` convention: `.` as the thousands separator and `,` as the decimal
//! separator. Parsing is lenient on purpose: the create path treats
//! unparseable input as zero, so `parse_brl` never fails. Callers that need
//! strict validation go through [`MoneyInput::to_decimal_strict`].

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Currency marker stripped on ingest and prepended on egress.
pub const CURRENCY_PREFIX: &str = "R$";

/// Parses formatted currency text (`"R$ 1.234,50"`) into a decimal amount.
///
/// Strips the `R$` marker and thousands separators, converts the decimal
/// comma to a point, and trims whitespace. Any failure falls back to zero.
pub fn parse_brl(text: &str) -> Decimal {
    let cleaned = text
        .replace(CURRENCY_PREFIX, "")
        .replace('.', "")
        .replace(',', ".");
    match Decimal::from_str(cleaned.trim()) {
        Ok(amount) => amount,
        Err(err) => {
            log::warn!("Unparseable currency value '{text}', falling back to zero: {err}");
            Decimal::ZERO
        }
    }
}

/// Formats a decimal amount as currency text with two fraction digits,
/// e.g. `format_brl(1234.5) == "R$ 1.234,50"`.
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{CURRENCY_PREFIX} {sign}{grouped},{frac_part}")
}

/// A monetary field as accepted on ingest: either a raw JSON number or
/// formatted currency text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MoneyInput {
    Amount(Decimal),
    Text(String),
}

impl MoneyInput {
    /// Lenient conversion used on the create path: text goes through
    /// [`parse_brl`], so unparseable values become zero.
    pub fn to_decimal_lenient(&self) -> Decimal {
        match self {
            MoneyInput::Amount(amount) => *amount,
            MoneyInput::Text(text) => parse_brl(text),
        }
    }

    /// Strict conversion used on the update path: text must be a plain
    /// decimal number.
    pub fn to_decimal_strict(&self) -> std::result::Result<Decimal, rust_decimal::Error> {
        match self {
            MoneyInput::Amount(amount) => Ok(*amount),
            MoneyInput::Text(text) => Decimal::from_str(text.trim()),
        }
    }
}

impl Default for MoneyInput {
    fn default() -> Self {
        MoneyInput::Amount(Decimal::ZERO)
    }
}
