//=============================================================================
// File: src/screens/converter.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::amount_input::AmountInput;
use crate::components::currency_tile::CurrencyTile;
use dioxus::prelude::*;
use rates::conversion_state::ConversionState;
use rates::currency_rate;
use rates::currency_rate::CurrencyRate;
use rates::notification::Notification;

#[component]
pub fn ConverterScreen() -> Element {
    // Owned by this screen; created on mount, dropped with it.
    let mut state = use_signal(ConversionState::new);
    let mut app_state_mut = use_context::<AppStateMut>();

    let on_input = move |text: String| {
        let next = state.peek().clone().on_input_change(text);
        state.set(next);
    };

    let mut convert = move |rate: CurrencyRate| {
        let next = state.peek().on_currency_selected(&rate);
        match next {
            Ok(next) => state.set(next),
            Err(err) => app_state_mut.show_toast(Notification::from(err)),
        }
    };

    let input_text = state.read().input_text().to_owned();
    let has_result = state.read().phase().is_has_result();
    let result_text = state.read().result_text().unwrap_or_default().to_owned();

    rsx! {
        section {
            class: "converter",
            div {
                class: "top-container",
                AmountInput {
                    value: input_text,
                    on_input,
                    placeholder: "Enter amount in Rupees",
                }
                if has_result {
                    p {
                        class: "result-text",
                        "{result_text}"
                    }
                }
            }
            div {
                class: "currency-grid",
                for rate in currency_rate::all().iter().copied() {
                    CurrencyTile {
                        key: "{rate.name}",
                        rate,
                        selected: state.read().is_selected(&rate),
                        on_select: move |rate: CurrencyRate| convert(rate),
                    }
                }
            }
        }
    }
}
