//! Prices in integer minor units.
//!
//! Catalog prices are stored as cents. Display strings such as `"$89.99"` are
//! produced by [`Price::display`] and only parsed back at the checkout wire
//! boundary, where clients still send the string they were shown.

use core::fmt;
use core::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Errors produced when turning a display string into cents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    /// No digits survived sanitizing.
    #[error("price {0:?} does not contain a number")]
    NotANumber(String),
    /// The amount does not fit in cents.
    #[error("price {0:?} is out of range")]
    OutOfRange(String),
    /// Unknown ISO 4217 code.
    #[error("unsupported currency: {0}")]
    UnknownCurrency(String),
}

/// A price in minor units (cents) of a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: i64,
    currency: CurrencyCode,
}

impl Price {
    /// Create a price from minor units.
    #[must_use]
    pub const fn from_cents(cents: i64, currency: CurrencyCode) -> Self {
        Self { cents, currency }
    }

    /// Shorthand for a US dollar price.
    #[must_use]
    pub const fn usd(cents: i64) -> Self {
        Self::from_cents(cents, CurrencyCode::USD)
    }

    /// Zero in the given currency.
    #[must_use]
    pub const fn zero(currency: CurrencyCode) -> Self {
        Self::from_cents(0, currency)
    }

    /// Parse a display string (`"$1,299.50"`) into a price.
    ///
    /// # Errors
    ///
    /// See [`parse_cents`].
    pub fn parse(display: &str, currency: CurrencyCode) -> Result<Self, PriceError> {
        parse_cents(display).map(|cents| Self::from_cents(cents, currency))
    }

    #[must_use]
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// The amount in major units, e.g. `89.99`.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        Decimal::new(self.cents, 2)
    }

    /// Price of `quantity` units.
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self::from_cents(self.cents.saturating_mul(quantity as i64), self.currency)
    }

    /// Sum of two prices. The currency of `self` wins.
    #[must_use]
    pub const fn plus(self, other: Self) -> Self {
        Self::from_cents(self.cents.saturating_add(other.cents), self.currency)
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.amount())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Price", 3)?;
        state.serialize_field("amount_cents", &self.cents)?;
        state.serialize_field("currency", &self.currency)?;
        state.serialize_field("display", &self.display())?;
        state.end()
    }
}

/// Convert a human-entered price string to cents.
///
/// Every character other than ASCII digits and `.` is stripped, the leading
/// decimal number is read, and the result is rounded half away from zero to
/// whole cents: `"$10.00"` → `1000`, `"USD 5.5"` → `550`, `"1.005"` → `101`.
///
/// # Errors
///
/// Returns [`PriceError::NotANumber`] if no digits remain and
/// [`PriceError::OutOfRange`] if the amount overflows.
pub fn parse_cents(input: &str) -> Result<i64, PriceError> {
    let sanitized: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    // Only the first decimal point counts; "1.2.3" reads as 1.2.
    let number = match sanitized.match_indices('.').nth(1) {
        Some((second_dot, _)) => &sanitized[..second_dot],
        None => sanitized.as_str(),
    };
    let number = number.trim_end_matches('.');
    if !number.bytes().any(|b| b.is_ascii_digit()) {
        return Err(PriceError::NotANumber(input.to_owned()));
    }

    let normalized = if number.starts_with('.') {
        format!("0{number}")
    } else {
        number.to_owned()
    };

    let amount = Decimal::from_str(&normalized)
        .map_err(|_| PriceError::OutOfRange(input.to_owned()))?;

    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|cents| cents.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|cents| cents.to_i64())
        .ok_or_else(|| PriceError::OutOfRange(input.to_owned()))
}

/// ISO 4217 currency codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// Upper-case ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }

    /// Lower-case ISO code, as payment APIs expect it.
    #[must_use]
    pub const fn api_code(&self) -> &'static str {
        match self {
            Self::USD => "usd",
            Self::EUR => "eur",
            Self::GBP => "gbp",
            Self::CAD => "cad",
            Self::AUD => "aud",
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            _ => Err(PriceError::UnknownCurrency(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cents_display_strings() {
        assert_eq!(parse_cents("$10.00").unwrap(), 1000);
        assert_eq!(parse_cents("$5.50").unwrap(), 550);
        assert_eq!(parse_cents("$89.99").unwrap(), 8999);
        assert_eq!(parse_cents("$1,299.99").unwrap(), 129_999);
        assert_eq!(parse_cents("12").unwrap(), 1200);
    }

    #[test]
    fn test_parse_cents_rounds_to_nearest_cent() {
        assert_eq!(parse_cents("1.005").unwrap(), 101);
        assert_eq!(parse_cents("1.004").unwrap(), 100);
        assert_eq!(parse_cents("0.125").unwrap(), 13);
    }

    #[test]
    fn test_parse_cents_odd_shapes() {
        assert_eq!(parse_cents(".5").unwrap(), 50);
        assert_eq!(parse_cents("7.").unwrap(), 700);
        assert_eq!(parse_cents("1.2.3").unwrap(), 120);
        // The minus sign is stripped along with everything else.
        assert_eq!(parse_cents("-3.00").unwrap(), 300);
    }

    #[test]
    fn test_parse_cents_rejects_non_numbers() {
        assert!(matches!(parse_cents(""), Err(PriceError::NotANumber(_))));
        assert!(matches!(parse_cents("free"), Err(PriceError::NotANumber(_))));
        assert!(matches!(parse_cents("$."), Err(PriceError::NotANumber(_))));
    }

    #[test]
    fn test_parse_cents_overflow() {
        let huge = "9".repeat(40);
        assert!(matches!(parse_cents(&huge), Err(PriceError::OutOfRange(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::usd(8999).display(), "$89.99");
        assert_eq!(Price::usd(500).display(), "$5.00");
        assert_eq!(Price::usd(5).display(), "$0.05");
        assert_eq!(Price::from_cents(1234, CurrencyCode::GBP).to_string(), "£12.34");
    }

    #[test]
    fn test_times_and_plus() {
        let total = Price::usd(1000).times(2).plus(Price::usd(550));
        assert_eq!(total.cents(), 2550);
        assert_eq!(total.display(), "$25.50");
    }

    #[test]
    fn test_serialize_includes_display() {
        let json = serde_json::to_value(Price::usd(2999)).unwrap();
        assert_eq!(json["amount_cents"], 2999);
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["display"], "$29.99");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("usd".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert_eq!(" EUR ".parse::<CurrencyCode>().unwrap(), CurrencyCode::EUR);
        assert!("XYZ".parse::<CurrencyCode>().is_err());
        assert_eq!(CurrencyCode::USD.api_code(), "usd");
    }
}
