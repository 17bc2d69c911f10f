// The client-side Dioxus application logic.

use dioxus::prelude::*;
use dioxus_logger::tracing;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use app_state::AppState;
use app_state_mut::AppStateMut;
use components::toast::ToastHost;
use hooks::use_prefers_dark::use_prefers_dark;
use rates::prefs::user_prefs::UserPrefs;
use screens::converter::ConverterScreen;

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    // Colors come from the --cc-* variables injected by AppBody.
    let responsive_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
        font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
        background-color: var(--cc-background);
    }

    /* --- APP FRAME --- */
    .app-main-container {
        position: fixed;
        top: 0; left: 0; right: 0; bottom: 0;
        padding: env(safe-area-inset-top) 0 env(safe-area-inset-bottom) 0;

        display: flex;
        flex-direction: column;
        overflow: hidden;
        color: var(--cc-text);
        background-color: var(--cc-background);
    }

    .app-main-container header {
        flex-shrink: 0;
        padding: 0.75rem 1rem 0 1rem;
    }

    .app-main-container header h1 {
        margin: 0;
        font-size: 1.5rem;
        text-align: center;
    }

    /* --- CONTENT AREA --- */
    .app-main-container .content {
        flex: 1;
        display: flex;
        flex-direction: column;
        overflow-y: auto;
        min-height: 0;
        padding: 0 1rem;
    }

    .converter { flex: 1; display: flex; flex-direction: column; }

    .top-container {
        flex: 1;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: space-evenly;
        min-height: 10rem;
    }

    .amount-row { display: flex; flex-direction: row; align-items: center; }

    .base-symbol {
        margin-right: 8px;
        font-size: 22px;
        font-weight: 800;
    }

    .amount-input {
        height: 40px;
        width: 200px;
        padding: 8px;
        border: 1px solid var(--cc-input-border);
        border-radius: 4px;
        color: #000000;
        background-color: var(--cc-input-background);
    }

    .result-text {
        margin: 0;
        font-size: 32px;
        font-weight: 800;
        color: var(--cc-result-text);
    }

    /* --- CURRENCY TILES --- */
    .currency-grid {
        flex: 3;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        align-content: start;
    }

    .currency-tile {
        margin: 12px;
        min-height: 60px;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        border: none;
        border-radius: 12px;
        cursor: pointer;
        background-color: var(--cc-tile-background);
        box-shadow: 1px 1px 1px color-mix(in srgb, var(--cc-tile-shadow), transparent 90%);
    }

    .currency-tile.selected { background-color: var(--cc-selected-tile-background); }

    .currency-tile .flag {
        font-size: 28px;
        margin-bottom: 4px;
    }

    .currency-tile .currency-name {
        font-size: 14px;
        color: var(--cc-tile-text);
    }

    .currency-tile.selected .currency-name { color: var(--cc-selected-tile-text); }

    /* --- TOAST --- */
    .toast {
        position: fixed;
        left: 1rem; right: 1rem;
        bottom: calc(1rem + env(safe-area-inset-bottom));
        padding: 0.875rem 1rem;
        border-radius: 4px;
        box-shadow: 0 4px 12px rgba(0,0,0,0.25);
        z-index: 1000;
        cursor: pointer;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0, viewport-fit=cover",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

/// Provides the app-wide contexts and picks the color scheme.
#[component]
fn AppBody() -> Element {
    let app_state = use_context_provider(|| AppState::new(UserPrefs::default()));
    use_hook(|| tracing::info!("prefs: {:#?}", app_state.prefs));

    let toast = use_signal(|| None);
    let next_toast_id = use_signal(|| 0);
    use_context_provider(|| AppStateMut::new(toast, next_toast_id));

    let theme_preference = app_state.prefs.theme_preference();
    let prefers_dark = use_prefers_dark();
    let theme = use_memo(move || theme_preference.resolve(prefers_dark()));

    use_effect(move || {
        tracing::debug!("using {} theme ({:?})", theme().name(), theme_preference);
    });

    let theme_css = theme().style().to_css_vars();

    rsx! {
        style {
            "{theme_css}"
        }
        div {
            class: "app-main-container",
            "data-theme": theme().name(),
            header {
                h1 {
                    "Currency Converter"
                }
            }
            div {
                class: "content",
                ConverterScreen {}
            }
            ToastHost {}
        }
    }
}
