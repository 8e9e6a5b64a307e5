mod app;
mod color;
mod data;
mod error;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::LaunchBoardApp;
use eframe::egui;

/// The launch records table, read once at startup from the working
/// directory. No flags, no environment variables.
const DATA_FILE: &str = "spacex_launch_geo.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dataset = data::loader::load_file(Path::new(DATA_FILE))
        .with_context(|| format!("loading launch records from '{DATA_FILE}'"))?;
    log::info!(
        "Loaded {} launch records across {} sites",
        dataset.len(),
        dataset.sites.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchBoardApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard UI: {e}"))
}
