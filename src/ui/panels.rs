use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::data::filter::{PayloadRange, PAYLOAD_MAX_KG, PAYLOAD_MIN_KG, PAYLOAD_STEP_KG};
use crate::data::model::{SiteSelection, ALL_SITES};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – dashboard controls
// ---------------------------------------------------------------------------

/// Render the control panel: site dropdown and payload range sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    // ---- Site dropdown ----
    ui.strong("Launch Site");
    let current = state.selection.clone();
    // Clone so the dropdown can mutate state while listing the sites.
    let sites = state.dataset.sites.clone();

    egui::ComboBox::from_id_salt("site_select")
        .selected_text(current.label().to_string())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == SiteSelection::AllSites, ALL_SITES)
                .clicked()
            {
                state.select_site(SiteSelection::AllSites);
            }
            for site in &sites {
                let is_selected = matches!(&current, SiteSelection::Site(s) if s == site);
                if ui.selectable_label(is_selected, site).clicked() {
                    state.select_site(SiteSelection::Site(site.clone()));
                }
            }
        });

    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (kg)");
    let mut low = state.payload_range.low;
    let mut high = state.payload_range.high;

    let low_changed = ui
        .add(
            Slider::new(&mut low, PAYLOAD_MIN_KG..=PAYLOAD_MAX_KG)
                .step_by(PAYLOAD_STEP_KG)
                .text("min"),
        )
        .changed();
    let high_changed = ui
        .add(
            Slider::new(&mut high, PAYLOAD_MIN_KG..=PAYLOAD_MAX_KG)
                .step_by(PAYLOAD_STEP_KG)
                .text("max"),
        )
        .changed();

    if low_changed || high_changed {
        state.set_payload_range(PayloadRange::new(low, high));
    }

    if ui.small_button("Reset range").clicked() {
        state.reset_payload_range();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(format!(
            "{} launches loaded, {} in payload window",
            state.dataset.len(),
            state.scatter_indices.len()
        ));

        ui.separator();
        ui.label(format!("Site: {}", state.selection));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
