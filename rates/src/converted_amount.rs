//! Parsing of user-entered amounts and formatting of converted results.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use thiserror::Error;

use crate::currency_rate::CurrencyRate;

/// Number of decimal places shown for every converted amount.
pub const DISPLAY_DECIMALS: usize = 2;

/// An error that can occur when parsing user text into an amount.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ParseAmountError {
    /// Nothing was entered.
    #[error("no amount entered")]
    Empty,
    /// The text is not a finite decimal number (e.g., "abc", "1.2.3", "inf").
    #[error("invalid amount format")]
    InvalidFormat,
}

/// Parses an amount in the base currency.
///
/// Surrounding whitespace is ignored, but the remaining text must be a
/// complete number: trailing garbage such as "12abc" is rejected rather than
/// silently truncated.
pub fn parse_amount(s: &str) -> Result<f64, ParseAmountError> {
    if s.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let value = s
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseAmountError::InvalidFormat)?;

    if !value.is_finite() {
        return Err(ParseAmountError::InvalidFormat);
    }

    Ok(value)
}

/// An amount converted into a target currency.
///
/// `Display` renders it as `"<symbol> <amount>"` with exactly two decimals,
/// e.g. `"$ 1.20"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertedAmount {
    amount: f64,
    symbol: &'static str,
}

impl ConvertedAmount {
    /// Multiplies a base amount by the rate's multiplier.
    pub fn new(base_amount: f64, rate: &CurrencyRate) -> Self {
        Self {
            amount: base_amount * rate.value,
            symbol: rate.symbol,
        }
    }

    /// Parses `input` and converts it with `rate`.
    pub fn from_input(input: &str, rate: &CurrencyRate) -> Result<Self, ParseAmountError> {
        let base_amount = parse_amount(input)?;
        Ok(Self::new(base_amount, rate))
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }
}

impl fmt::Display for ConvertedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0.0 would otherwise print as "-0.00"
        let amount = if self.amount == 0.0 { 0.0 } else { self.amount };

        // Exact binary ties (e.g. 3.75 * 1.1 == 4.125) round away from zero.
        match Decimal::from_f64_retain(amount) {
            Some(exact) => {
                let rounded = exact.round_dp_with_strategy(
                    DISPLAY_DECIMALS as u32,
                    RoundingStrategy::MidpointAwayFromZero,
                );
                write!(
                    f,
                    "{} {:.prec$}",
                    self.symbol,
                    rounded,
                    prec = DISPLAY_DECIMALS
                )
            }
            // beyond Decimal's range, where no fractional digits survive anyway
            None => write!(
                f,
                "{} {:.prec$}",
                self.symbol,
                amount,
                prec = DISPLAY_DECIMALS
            ),
        }
    }
}
