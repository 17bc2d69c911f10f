//! Defines the static table of target currencies and their multipliers.

/// The currency every amount is entered in.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct BaseCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
}

/// Indian Rupee. All multipliers in [`RATE_TABLE`] are per one rupee.
pub const BASE_CURRENCY: BaseCurrency = BaseCurrency {
    name: "Indian Rupee",
    symbol: "₹",
};

/// A target currency and the constant that converts one base unit into it.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CurrencyRate {
    pub name: &'static str,
    pub flag: &'static str,
    pub symbol: &'static str,
    /// Target units per one unit of [`BASE_CURRENCY`].
    pub value: f64,
}

impl CurrencyRate {
    pub const fn new(
        name: &'static str,
        flag: &'static str,
        symbol: &'static str,
        value: f64,
    ) -> Self {
        Self {
            name,
            flag,
            symbol,
            value,
        }
    }
}

/// All target currencies, in display order. Names are unique.
pub const RATE_TABLE: [CurrencyRate; 9] = [
    CurrencyRate::new("United States Dollar", "🇺🇸", "$", 0.012),
    CurrencyRate::new("Euro", "🇪🇺", "€", 0.011),
    CurrencyRate::new("Great British Pound", "🇬🇧", "£", 0.0095),
    CurrencyRate::new("Russian Ruble", "🇷🇺", "₽", 1.1),
    CurrencyRate::new("Australian Dollar", "🇦🇺", "A$", 0.018),
    CurrencyRate::new("Canadian Dollar", "🇨🇦", "C$", 0.016),
    CurrencyRate::new("Japanese Yen", "🇯🇵", "¥", 1.8),
    CurrencyRate::new("Kuwaiti Dinar", "🇰🇼", "KD", 0.0037),
    CurrencyRate::new("Bitcoin", "🪙", "₿", 0.000_000_18),
];

/// Returns the rate table for enumeration.
pub fn all() -> &'static [CurrencyRate] {
    &RATE_TABLE
}

/// Looks up a rate by its (unique) name.
pub fn find(name: &str) -> Option<&'static CurrencyRate> {
    RATE_TABLE.iter().find(|rate| rate.name == name)
}
