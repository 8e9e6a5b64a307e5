use super::model::{Dataset, SiteSelection};

// ---------------------------------------------------------------------------
// Payload range – the slider value
// ---------------------------------------------------------------------------

/// Slider domain exposed by the UI.
pub const PAYLOAD_MIN_KG: f64 = 0.0;
pub const PAYLOAD_MAX_KG: f64 = 10_000.0;
pub const PAYLOAD_STEP_KG: f64 = 1_000.0;

/// User-adjustable payload mass window. Defaults to the dataset's own
/// min/max payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// Membership is an open interval: a record sitting exactly on either
    /// bound is excluded. `low >= high` admits nothing.
    pub fn contains_open(&self, mass_kg: f64) -> bool {
        mass_kg > self.low && mass_kg < self.high
    }
}

// ---------------------------------------------------------------------------
// Scatter filter
// ---------------------------------------------------------------------------

/// Return indices (in dataset order) of records inside the payload window
/// and, when a specific site is selected, launched from that site. The two
/// predicates are independent and applied conjunctively.
///
/// An empty result is valid output: the scatter chart renders empty. A site
/// name not present in the dataset simply matches nothing.
pub fn filtered_indices(
    dataset: &Dataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| range.contains_open(rec.payload_mass_kg))
        .filter(|(_, rec)| match selection {
            SiteSelection::AllSites => true,
            SiteSelection::Site(site) => rec.launch_site == *site,
        })
        .map(|(i, _)| i)
        .collect()
}
