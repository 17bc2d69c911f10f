//! Platform-independent core of the currency converter: the rate table,
//! amount parsing and formatting, the converter's state machine, and the
//! notifications and color schemes the UI renders.

pub mod conversion_state;
pub mod converted_amount;
pub mod currency_rate;
pub mod notification;
pub mod prefs;
pub mod theme;
