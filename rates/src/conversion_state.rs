//! The converter view's state and the pure event handlers that advance it.

use dioxus_logger::tracing;
use thiserror::Error;

use crate::converted_amount::ConvertedAmount;
use crate::converted_amount::ParseAmountError;
use crate::currency_rate::CurrencyRate;

/// A user-input problem that prevents a conversion.
///
/// The `Display` text is the message shown to the user.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, strum::EnumIs)]
pub enum ConversionError {
    #[error("Enter a value to convert")]
    EmptyInput,
    #[error("Not a valid number to convert")]
    UnparseableAmount,
}

impl From<ParseAmountError> for ConversionError {
    fn from(err: ParseAmountError) -> Self {
        match err {
            ParseAmountError::Empty => Self::EmptyInput,
            ParseAmountError::InvalidFormat => Self::UnparseableAmount,
        }
    }
}

/// Whether a conversion has succeeded since the view was mounted.
#[derive(Debug, PartialEq, Eq, Clone, Copy, strum::EnumIs)]
pub enum Phase {
    NoResult,
    HasResult,
}

/// Everything the converter view remembers between events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionState {
    input_text: String,
    result_text: Option<String>,
    selected_currency: Option<&'static str>,
}

impl ConversionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw text of the amount field.
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    /// The last successful conversion, e.g. `"$ 1.20"`.
    pub fn result_text(&self) -> Option<&str> {
        self.result_text.as_deref()
    }

    /// Name of the currency used for the last successful conversion.
    pub fn selected_currency(&self) -> Option<&'static str> {
        self.selected_currency
    }

    /// True when `rate` is the currency to highlight.
    pub fn is_selected(&self, rate: &CurrencyRate) -> bool {
        self.selected_currency == Some(rate.name)
    }

    pub fn phase(&self) -> Phase {
        if self.result_text.is_some() {
            Phase::HasResult
        } else {
            Phase::NoResult
        }
    }

    /// Stores the text verbatim. Validation is deferred until a currency is
    /// selected, and the previous result stays on screen.
    pub fn on_input_change(self, text: impl Into<String>) -> Self {
        Self {
            input_text: text.into(),
            ..self
        }
    }

    /// Converts the current input into `rate`.
    ///
    /// On error the caller keeps its current state; nothing is cleared.
    pub fn on_currency_selected(&self, rate: &CurrencyRate) -> Result<Self, ConversionError> {
        let converted = ConvertedAmount::from_input(&self.input_text, rate).inspect_err(|e| {
            tracing::warn!("rejected input {:?} for {}: {}", self.input_text, rate.name, e)
        })?;
        let result_text = converted.to_string();

        tracing::debug!("converted {:?} to {}", self.input_text, result_text);

        Ok(Self {
            input_text: self.input_text.clone(),
            result_text: Some(result_text),
            selected_currency: Some(rate.name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency_rate;

    fn usd() -> &'static CurrencyRate {
        currency_rate::find("United States Dollar").unwrap()
    }

    fn euro() -> &'static CurrencyRate {
        currency_rate::find("Euro").unwrap()
    }

    #[test]
    fn starts_without_result() {
        let state = ConversionState::new();
        assert!(state.phase().is_no_result());
        assert_eq!(state.input_text(), "");
        assert_eq!(state.result_text(), None);
        assert_eq!(state.selected_currency(), None);
    }

    #[test]
    fn input_is_stored_verbatim() {
        let state = ConversionState::new().on_input_change(" 12abc ");
        assert_eq!(state.input_text(), " 12abc ");
        assert!(state.phase().is_no_result());
    }

    #[test]
    fn successful_conversion_sets_result_and_selection() {
        let state = ConversionState::new().on_input_change("100");
        let state = state.on_currency_selected(usd()).unwrap();

        assert_eq!(state.result_text(), Some("$ 1.20"));
        assert_eq!(state.selected_currency(), Some("United States Dollar"));
        assert!(state.is_selected(usd()));
        assert!(!state.is_selected(euro()));
        assert!(state.phase().is_has_result());
    }

    #[test]
    fn empty_input_is_rejected() {
        let state = ConversionState::new();
        let err = state.on_currency_selected(usd()).unwrap_err();
        assert!(err.is_empty_input());
        assert_eq!(err.to_string(), "Enter a value to convert");
    }

    #[test]
    fn unparseable_input_is_rejected() {
        let state = ConversionState::new().on_input_change("abc");
        let err = state.on_currency_selected(usd()).unwrap_err();
        assert!(err.is_unparseable_amount());
        assert_eq!(err.to_string(), "Not a valid number to convert");
    }

    #[test]
    fn new_input_keeps_previous_result() {
        let state = ConversionState::new()
            .on_input_change("100")
            .on_currency_selected(usd())
            .unwrap()
            .on_input_change("abcd");

        assert_eq!(state.result_text(), Some("$ 1.20"));
        assert!(state.on_currency_selected(euro()).is_err());
        assert!(state.is_selected(usd()));
    }

    #[test]
    fn selecting_another_currency_moves_highlight() {
        let state = ConversionState::new()
            .on_input_change("100")
            .on_currency_selected(usd())
            .unwrap()
            .on_currency_selected(euro())
            .unwrap();

        assert_eq!(state.selected_currency(), Some("Euro"));
        assert_eq!(state.result_text(), Some("€ 1.10"));
        assert!(!state.is_selected(usd()));
    }

    #[test]
    fn long_input_is_kept_whole() {
        let long = "1234567890.123456789012345";
        let state = ConversionState::new().on_input_change(long);
        assert_eq!(state.input_text(), long);
        assert!(state.on_currency_selected(usd()).is_ok());
    }

    #[test]
    fn rejected_input_keeps_phase() {
        let state = ConversionState::new().on_input_change("abc");
        assert!(state.on_currency_selected(usd()).is_err());
        assert!(state.phase().is_no_result());

        let state = state
            .on_input_change("10")
            .on_currency_selected(usd())
            .unwrap()
            .on_input_change("");
        assert!(state.on_currency_selected(euro()).is_err());
        assert!(state.phase().is_has_result());
    }

    #[test]
    fn parse_errors_map_to_conversion_errors() {
        assert_eq!(
            ConversionError::from(ParseAmountError::Empty),
            ConversionError::EmptyInput
        );
        assert_eq!(
            ConversionError::from(ParseAmountError::InvalidFormat),
            ConversionError::UnparseableAmount
        );
    }
}
