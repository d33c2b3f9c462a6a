use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, MarkerShape, Plot, Points};

use crate::color::generate_palette;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart regions (central panel)
// ---------------------------------------------------------------------------
// Both regions are redrawn wholesale from the current chart descriptions in
// `AppState`; no chart state lives here.

/// Render the proportion chart region as one bar per slice with a legend.
pub fn proportion_region(ui: &mut Ui, state: &AppState, height: f32) {
    let chart = &state.proportion;
    ui.strong(&chart.title);

    let palette = generate_palette(chart.slices.len());

    Plot::new("proportion_chart")
        .legend(Legend::default())
        .height(height)
        .show_axes([false, true])
        .show(ui, |plot_ui| {
            for (i, slice) in chart.slices.iter().enumerate() {
                let bar = Bar::new(i as f64, slice.value)
                    .width(0.6)
                    .fill(palette[i])
                    .name(&slice.label);
                plot_ui.bar_chart(
                    BarChart::new(vec![bar])
                        .color(palette[i])
                        .name(&slice.label),
                );
            }
        });
}

/// Render the scatter chart region: one `Points` series per booster
/// version category, coloured via the startup colour map.
pub fn scatter_region(ui: &mut Ui, state: &AppState, height: f32) {
    let chart = &state.scatter;
    ui.strong(&chart.title);

    Plot::new("scatter_chart")
        .legend(Legend::default())
        .height(height)
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Launch Outcome")
        .include_y(-0.2)
        .include_y(1.2)
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let color = state.color_map.color_for(&series.category);
                plot_ui.points(
                    Points::new(series.points.clone())
                        .color(color)
                        .name(&series.category)
                        .shape(MarkerShape::Circle)
                        .radius(3.0),
                );
            }
        });
}
