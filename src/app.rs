use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchBoardApp {
    pub state: AppState,
}

impl LaunchBoardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: controls ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::control_panel(ui, &mut self.state);
            });

        // ---- Central panel: the two chart regions ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let region_height = ((ui.available_height() - 64.0) / 2.0).max(160.0);
            plot::proportion_region(ui, &self.state, region_height);
            ui.separator();
            plot::scatter_region(ui, &self.state, region_height);
        });
    }
}
