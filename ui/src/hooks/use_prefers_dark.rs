//=============================================================================
// File: src/hooks/use_prefers_dark.rs
//=============================================================================

// Conditionally export the correct module based on the target platform.

#[cfg(target_arch = "wasm32")]
pub use self::wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use self::webview::*;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// # WebAssembly (WASM) Implementation
/// Queries the browser's media matcher directly through `web_sys`.
#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use super::DARK_QUERY;
    use dioxus::prelude::*;

    pub fn use_prefers_dark() -> Signal<bool> {
        let mut prefers_dark = use_signal(|| false);

        use_effect(move || {
            let matches = web_sys::window()
                .and_then(|window| window.match_media(DARK_QUERY).ok().flatten())
                .map(|query_list| query_list.matches())
                .unwrap_or(false);
            prefers_dark.set(matches);
        });

        prefers_dark
    }
}

/// # Desktop/Mobile Implementation
/// Both renderers draw into a webview, so the answer comes from evaluating
/// the same media query there. Stays `false` if no webview answers.
#[cfg(not(target_arch = "wasm32"))]
mod webview {
    use super::DARK_QUERY;
    use dioxus::prelude::*;
    use dioxus_logger::tracing;

    pub fn use_prefers_dark() -> Signal<bool> {
        let mut prefers_dark = use_signal(|| false);

        use_effect(move || {
            spawn(async move {
                let js_code = format!("return window.matchMedia('{DARK_QUERY}').matches;");
                match document::eval(&js_code).join::<bool>().await {
                    Ok(matches) => prefers_dark.set(matches),
                    Err(e) => tracing::debug!("color scheme query failed: {:?}", e),
                }
            });
        });

        prefers_dark
    }
}
