use dioxus::prelude::*;
use rates::currency_rate::CurrencyRate;

/// A pressable tile showing a currency's flag and name.
#[component]
pub fn CurrencyTile(
    rate: CurrencyRate,
    selected: bool,
    on_select: EventHandler<CurrencyRate>,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: if selected { "currency-tile selected" } else { "currency-tile" },
            "aria-pressed": if selected { "true" } else { "false" },
            onclick: move |_| on_select.call(rate),
            span {
                class: "flag",
                "{rate.flag}"
            }
            span {
                class: "currency-name",
                "{rate.name}"
            }
        }
    }
}
