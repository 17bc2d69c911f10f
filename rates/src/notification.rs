//! Transient messages shown to the user as toasts.

use crate::conversion_state::ConversionError;

/// A toast message and the colors it is drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub background_color: &'static str,
    pub text_color: &'static str,
}

impl Notification {
    /// A warning about missing or malformed input.
    pub fn warning(err: ConversionError) -> Self {
        let background_color = match err {
            ConversionError::EmptyInput => "#EA7773",
            ConversionError::UnparseableAmount => "#F4BE2C",
        };
        Self {
            message: err.to_string(),
            background_color,
            text_color: "#000000",
        }
    }
}

impl From<ConversionError> for Notification {
    fn from(err: ConversionError) -> Self {
        Self::warning(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_warning() {
        let n = Notification::from(ConversionError::EmptyInput);
        assert_eq!(n.message, "Enter a value to convert");
        assert_eq!(n.background_color, "#EA7773");
        assert_eq!(n.text_color, "#000000");
    }

    #[test]
    fn unparseable_amount_warning() {
        let n = Notification::from(ConversionError::UnparseableAmount);
        assert_eq!(n.message, "Not a valid number to convert");
        assert_eq!(n.background_color, "#F4BE2C");
        assert_eq!(n.text_color, "#000000");
    }
}
