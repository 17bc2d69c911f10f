// ui/src/components/amount_input.rs
use dioxus::prelude::*;
use rates::currency_rate::BASE_CURRENCY;

/// The base-currency amount field.
///
/// Text is forwarded exactly as typed; it is only validated when a currency
/// is picked. `inputmode` brings up the numeric keyboard on touch devices.
#[component]
pub fn AmountInput(value: String, on_input: EventHandler<String>, placeholder: String) -> Element {
    rsx! {
        div {
            class: "amount-row",
            span {
                class: "base-symbol",
                title: "{BASE_CURRENCY.name}",
                "{BASE_CURRENCY.symbol}"
            }
            input {
                r#type: "text",
                class: "amount-input",
                inputmode: "decimal",
                autocomplete: "off",
                "aria-label": "Amount in {BASE_CURRENCY.name}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |event| on_input.call(event.value()),
            }
        }
    }
}
