//! Custodial Relay: a desktop console for the custodial USDT module

use eframe::egui;

mod app;
mod ui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Custodial Relay");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Custodial Relay")
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([520.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Custodial Relay",
        native_options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc)))),
    )
}
