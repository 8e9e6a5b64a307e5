use std::f64::consts::TAU;

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points, Polygon};

use crate::color::generate_palette;
use crate::data::model::SiteSelection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Success pie (upper chart)
// ---------------------------------------------------------------------------

/// Render the success-count pie from the cached slices.
pub fn success_pie(ui: &mut Ui, state: &AppState, height: f32) {
    let title = match &state.selection {
        SiteSelection::AllSites => "Total Success Launches by Site".to_string(),
        SiteSelection::Site(site) => format!("Total Success Launches for {site}"),
    };
    ui.heading(title);

    let total: u64 = state.pie_slices.iter().map(|s| s.count).sum();

    Plot::new("success_pie")
        .height(height)
        .legend(Legend::default())
        .data_aspect(1.0)
        .include_x(-1.3)
        .include_x(1.3)
        .include_y(-1.3)
        .include_y(1.3)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            // All-zero data renders an empty plot, not an error.
            if total == 0 {
                return;
            }

            let colors = generate_palette(state.pie_slices.len());
            let mut start = 0.0;

            for (slice, color) in state.pie_slices.iter().zip(colors) {
                let sweep = slice.count as f64 / total as f64;
                if slice.count == 0 {
                    // Zero-area slice: present in the summary, nothing to draw.
                    continue;
                }

                plot_ui.polygon(
                    Polygon::new(sector_points(start, start + sweep))
                        .name(format!("{} ({})", slice.label, slice.count))
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );
                start += sweep;
            }
        });
}

/// Unit-circle sector covering `[start, end]` of the pie, as fractions of a
/// full turn. Starts at 12 o'clock and advances clockwise.
fn sector_points(start: f64, end: f64) -> PlotPoints<'static> {
    let steps = (((end - start) * 72.0).ceil() as usize).max(2);
    let angle = |frac: f64| TAU * (0.25 - frac);

    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let a = angle(start + (end - start) * i as f64 / steps as f64);
        points.push([a.cos(), a.sin()]);
    }
    PlotPoints::from(points)
}

// ---------------------------------------------------------------------------
// Payload / outcome scatter (lower chart)
// ---------------------------------------------------------------------------

/// Render the payload-versus-outcome scatter, one series per booster
/// version so the legend doubles as the colour key.
pub fn payload_scatter(ui: &mut Ui, state: &AppState) {
    ui.heading("Payload vs. Launch Outcome");

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Class")
        .include_y(-0.5)
        .include_y(1.5)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for booster in &state.dataset.boosters {
                let points: Vec<[f64; 2]> = state
                    .scatter_indices
                    .iter()
                    .map(|&idx| &state.dataset.records[idx])
                    .filter(|rec| rec.booster_version == *booster)
                    .map(|rec| [rec.payload_mass_kg, rec.outcome.class() as f64])
                    .collect();

                if points.is_empty() {
                    continue;
                }

                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(booster)
                        .color(state.booster_colors.color_for(booster))
                        .shape(MarkerShape::Circle)
                        .radius(4.0),
                );
            }
        });
}
