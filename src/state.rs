use crate::color::ColorMap;
use crate::data::filter::{filtered_indices, PayloadRange};
use crate::data::model::{Dataset, SiteSelection};
use crate::data::summary::{success_summary, PieSlice};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. The dataset is loaded once
/// at startup and never mutated; everything else is derived from the two
/// control values.
pub struct AppState {
    /// The loaded launch records.
    pub dataset: Dataset,

    /// Current site dropdown value.
    pub selection: SiteSelection,

    /// Current payload slider values.
    pub payload_range: PayloadRange,

    /// Pie slices for the current selection (cached).
    pub pie_slices: Vec<PieSlice>,

    /// Indices of records shown in the scatter chart (cached).
    pub scatter_indices: Vec<usize>,

    /// Booster version colours, fixed for the dataset's lifetime.
    pub booster_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the initial state: all sites selected, payload range seeded
    /// from the dataset's min/max payload, both charts computed.
    pub fn new(dataset: Dataset) -> Self {
        let booster_colors = ColorMap::new(&dataset.boosters);
        let payload_range = PayloadRange::new(dataset.min_payload_kg, dataset.max_payload_kg);

        let mut state = AppState {
            dataset,
            selection: SiteSelection::AllSites,
            payload_range,
            pie_slices: Vec::new(),
            scatter_indices: Vec::new(),
            booster_colors,
            status_message: None,
        };
        state.refresh_pie();
        state.refresh_scatter();
        state
    }

    /// The site dropdown changed: both charts depend on it.
    pub fn select_site(&mut self, selection: SiteSelection) {
        if self.selection == selection {
            return;
        }
        self.selection = selection;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// A payload slider moved: only the scatter chart depends on the range.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        if self.payload_range == range {
            return;
        }
        self.payload_range = range;
        self.refresh_scatter();
    }

    /// Restore the dataset-derived default payload window.
    pub fn reset_payload_range(&mut self) {
        self.set_payload_range(PayloadRange::new(
            self.dataset.min_payload_kg,
            self.dataset.max_payload_kg,
        ));
    }

    fn refresh_pie(&mut self) {
        match success_summary(&self.dataset, &self.selection) {
            Ok(slices) => {
                self.pie_slices = slices;
                self.status_message = None;
            }
            Err(e) => {
                // Render nothing rather than crash the session.
                log::error!("success summary failed: {e}");
                self.pie_slices.clear();
                self.status_message = Some(e.to_string());
            }
        }
    }

    fn refresh_scatter(&mut self) {
        self.scatter_indices = filtered_indices(&self.dataset, &self.selection, self.payload_range);
    }
}
