// main.rs - Desktop front end for the Fibonacci grid

use eframe::egui;
use tracing_subscriber::EnvFilter;

mod highlight;  // Timed cell colouring
mod ui;         // Window layout and input handling

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fibonacci Grid",
        options,
        Box::new(|_cc| Box::new(ui::FibGridApp::default())),
    )
}
