fn main() {
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::logger::tracing::info!("starting currency converter (mobile)");
    dioxus::launch(ui::App);
}
