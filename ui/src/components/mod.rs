//! Shared building blocks of the converter screen.
pub mod amount_input;
pub mod currency_tile;
pub mod toast;
