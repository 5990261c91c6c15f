//! Rusty-Passkey: a Rust-native passkey smart-wallet demo for Solana devnet

use eframe::egui;

mod app;
mod bridge;
mod state;
mod ui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Rusty-Passkey");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Rusty-Passkey")
            .with_inner_size([720.0, 780.0])
            .with_min_inner_size([560.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty-Passkey",
        native_options,
        Box::new(|cc| {
            let app = app::App::new(cc)?;
            Ok(Box::new(app) as Box<dyn eframe::App>)
        }),
    )
}
