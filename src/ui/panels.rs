use eframe::egui::{self, RichText, ScrollArea, SliderClamping, Ui};

use crate::data::model::SiteSelection;
use crate::state::AppState;

/// Fixed display bounds of the payload slider (kg), independent of the
/// dataset's observed range.
const PAYLOAD_SLIDER_MIN: f64 = 0.0;
const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;
const PAYLOAD_TICKS: [f64; 5] = [0.0, 2500.0, 5000.0, 7500.0, 10_000.0];

// ---------------------------------------------------------------------------
// Left side panel – dashboard controls
// ---------------------------------------------------------------------------

/// Render the control panel: site selector, payload range, booster legend.
pub fn control_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    // Clone what we need so we can mutate state inside the closures.
    let sites = state.dataset.sites.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Site selector ----
            ui.strong("Launch site");
            let current = state.site.clone();
            egui::ComboBox::from_id_salt("site_select")
                .selected_text(current.to_string())
                .show_ui(ui, |ui: &mut Ui| {
                    if ui
                        .selectable_label(current == SiteSelection::AllSites, "All Sites")
                        .clicked()
                    {
                        state.set_site(SiteSelection::AllSites);
                    }
                    for site in &sites {
                        let is_selected =
                            matches!(&current, SiteSelection::Site(s) if s == site);
                        if ui.selectable_label(is_selected, site).clicked() {
                            state.set_site(SiteSelection::Site(site.clone()));
                        }
                    }
                });
            ui.separator();

            // ---- Payload range ----
            ui.strong("Payload range (kg)");
            let (mut low, mut high) = state.payload_range;
            let mut changed = ui
                .add(
                    egui::Slider::new(&mut low, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
                        .step_by(PAYLOAD_SLIDER_STEP)
                        .clamping(SliderClamping::Always)
                        .text("Min"),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut high, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
                        .step_by(PAYLOAD_SLIDER_STEP)
                        .clamping(SliderClamping::Always)
                        .text("Max"),
                )
                .changed();
            ui.horizontal(|ui: &mut Ui| {
                for tick in PAYLOAD_TICKS {
                    ui.weak(format!("{tick:.0}"));
                    ui.add_space(12.0);
                }
            });
            if changed {
                state.set_payload_range(low, high);
            }
            ui.separator();

            // ---- Booster colour legend ----
            ui.strong("Booster version");
            for (label, color) in state.color_map.legend_entries() {
                ui.label(RichText::new(label).color(color));
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Launch Records Dashboard");
        ui.separator();
        ui.label(format!(
            "{} launches loaded, {} in payload view",
            state.dataset.len(),
            state.scatter.len()
        ));
    });
}
