use dioxus_logger::tracing;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(tracing::Level::INFO).expect("failed to init logger");
    tracing::info!("starting currency converter (web)");
    dioxus::launch(ui::App);
}
