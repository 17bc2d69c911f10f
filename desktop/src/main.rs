use dioxus_logger::tracing;

fn main() {
    dioxus_logger::init(tracing::Level::INFO).expect("failed to init logger");
    tracing::info!("starting currency converter (desktop)");

    // A phone-sized window; the layout is designed for portrait screens.
    #[cfg(feature = "desktop")]
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::WindowBuilder::new()
                    .with_title("Currency Converter")
                    .with_inner_size(dioxus::desktop::LogicalSize::new(420.0, 760.0)),
            ),
        )
        .launch(ui::App);

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(ui::App);
}
