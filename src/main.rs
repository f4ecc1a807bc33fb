//! Desktop front end for the rad-canvas UI tree builder.

mod app;
mod highlight;

use crate::app::RadCanvasApp;

use eframe::egui;
use rad_canvas::BuilderConfig;
use tracing_subscriber::EnvFilter;

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rad_canvas=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> eframe::Result<()> {
    setup_logging();
    let config = BuilderConfig::load();

    let mut native_options = eframe::NativeOptions::default();
    // palette + canvas + inspector
    native_options.viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(1280.0, 800.0))
        .with_min_inner_size(egui::vec2(900.0, 600.0))
        .with_resizable(true);

    tracing::info!("starting rad-canvas");
    eframe::run_native(
        "rad-canvas UI Builder",
        native_options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(RadCanvasApp::new(&cc.egui_ctx, config)))
        }),
    )
}
