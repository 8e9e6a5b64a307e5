use super::model::{Dataset, Outcome, SiteSelection};
use crate::error::SelectionError;

// ---------------------------------------------------------------------------
// Pie chart query
// ---------------------------------------------------------------------------

/// One labeled slice of the success pie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSlice {
    pub label: String,
    pub count: u64,
}

/// Aggregate launch outcomes for the pie chart.
///
/// * "All Sites": one slice per distinct site present in the records, in
///   `Dataset::sites` order, counting that site's successful launches. A
///   site whose launches all failed still gets a slice with count 0.
/// * Specific site: exactly two slices, "Failure" then "Success", counting
///   that site's records by outcome. Both are emitted even when one count
///   is zero so the two-slice pie stays well-formed.
///
/// A site name that is not in the dataset is a [`SelectionError`] rather
/// than a silent empty result.
pub fn success_summary(
    dataset: &Dataset,
    selection: &SiteSelection,
) -> Result<Vec<PieSlice>, SelectionError> {
    match selection {
        SiteSelection::AllSites => Ok(dataset
            .sites
            .iter()
            .map(|site| {
                let count = dataset
                    .records
                    .iter()
                    .filter(|rec| rec.launch_site == *site && rec.outcome.is_success())
                    .count() as u64;
                PieSlice {
                    label: site.clone(),
                    count,
                }
            })
            .collect()),

        SiteSelection::Site(site) => {
            if !dataset.contains_site(site) {
                return Err(SelectionError { site: site.clone() });
            }

            let mut failures = 0u64;
            let mut successes = 0u64;
            for rec in dataset.records.iter().filter(|r| r.launch_site == *site) {
                match rec.outcome {
                    Outcome::Failure => failures += 1,
                    Outcome::Success => successes += 1,
                }
            }

            Ok(vec![
                PieSlice {
                    label: Outcome::Failure.to_string(),
                    count: failures,
                },
                PieSlice {
                    label: Outcome::Success.to_string(),
                    count: successes,
                },
            ])
        }
    }
}
