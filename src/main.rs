mod app;
mod charts;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::LaunchBoardApp;
use eframe::egui;
use state::AppState;

/// Fixed dataset path, resolved against the working directory.
const DATA_PATH: &str = "launch_records.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let dataset = match data::loader::load_file(Path::new(DATA_PATH)) {
        Ok(ds) => {
            log::info!(
                "Loaded {} launch records from {DATA_PATH} ({} sites)",
                ds.len(),
                ds.sites.len()
            );
            ds
        }
        Err(e) => {
            log::error!("Failed to load {DATA_PATH}: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchBoardApp::new(AppState::new(dataset))))),
    )
}
