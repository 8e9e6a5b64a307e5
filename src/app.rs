use eframe::egui;

use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchBoardApp {
    pub state: AppState,
}

impl LaunchBoardApp {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
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
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: pie above, scatter below ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let pie_height = ui.available_height() * 0.45;
            charts::success_pie(ui, &self.state, pie_height);
            ui.separator();
            charts::payload_scatter(ui, &self.state);
        });
    }
}
