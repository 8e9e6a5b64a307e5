use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – binary launch classification
// ---------------------------------------------------------------------------

/// Result of a launch attempt. Stored in the source table as the `class`
/// column: 0 = failure, 1 = success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Interpret a raw `class` value. Anything other than 0 or 1 is invalid.
    pub fn from_class(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// The raw `class` value, also the scatter plot's y coordinate.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single historical launch. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Named facility the launch occurred from.
    pub launch_site: String,
    /// Cargo mass in kilograms. Non-negative and finite.
    pub payload_mass_kg: f64,
    /// First-stage hardware identifier, used to color the scatter plot.
    pub booster_version: String,
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// All launch records plus values derived once at load time. Built once at
/// startup and only ever read afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All launches, in file order.
    pub records: Vec<LaunchRecord>,
    /// Sorted distinct launch sites present in `records`.
    pub sites: Vec<String>,
    /// Sorted distinct booster versions present in `records`.
    pub boosters: Vec<String>,
    /// Smallest payload mass in `records`; seeds the range slider.
    pub min_payload_kg: f64,
    /// Largest payload mass in `records`; seeds the range slider.
    pub max_payload_kg: f64,
}

impl Dataset {
    /// Build the derived indices from loaded records.
    ///
    /// Returns `None` for an empty record list: the payload bounds and the
    /// site dropdown cannot be derived from nothing.
    pub fn from_records(records: Vec<LaunchRecord>) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mut sites: BTreeSet<&str> = BTreeSet::new();
        let mut boosters: BTreeSet<&str> = BTreeSet::new();
        let mut min_payload_kg = f64::INFINITY;
        let mut max_payload_kg = f64::NEG_INFINITY;

        for rec in &records {
            sites.insert(&rec.launch_site);
            boosters.insert(&rec.booster_version);
            min_payload_kg = min_payload_kg.min(rec.payload_mass_kg);
            max_payload_kg = max_payload_kg.max(rec.payload_mass_kg);
        }

        let sites: Vec<String> = sites.into_iter().map(str::to_string).collect();
        let boosters: Vec<String> = boosters.into_iter().map(str::to_string).collect();

        Some(Dataset {
            records,
            sites,
            boosters,
            min_payload_kg,
            max_payload_kg,
        })
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn contains_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }
}

// ---------------------------------------------------------------------------
// SiteSelection – the dropdown value
// ---------------------------------------------------------------------------

/// Label of the sentinel dropdown entry that selects every site at once.
pub const ALL_SITES: &str = "All Sites";

/// Current value of the site dropdown: the sentinel, or one of the distinct
/// sites in the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    AllSites,
    Site(String),
}

impl SiteSelection {
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::AllSites => ALL_SITES,
            SiteSelection::Site(name) => name,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, payload: f64, booster: &str, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            booster_version: booster.to_string(),
            outcome,
        }
    }

    #[test]
    fn derives_payload_bounds_and_distinct_sites() {
        let ds = Dataset::from_records(vec![
            record("KSC LC-39A", 4200.0, "F9 FT", Outcome::Success),
            record("CCAFS LC-40", 500.0, "F9 v1.0", Outcome::Failure),
            record("KSC LC-39A", 9600.0, "F9 B5", Outcome::Success),
        ])
        .unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.min_payload_kg, 500.0);
        assert_eq!(ds.max_payload_kg, 9600.0);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(ds.boosters, vec!["F9 B5", "F9 FT", "F9 v1.0"]);
        assert!(ds.contains_site("CCAFS LC-40"));
        assert!(!ds.contains_site("VAFB SLC-4E"));
    }

    #[test]
    fn payload_bounds_cover_every_record() {
        let ds = Dataset::from_records(vec![
            record("A", 1000.0, "v1", Outcome::Success),
            record("B", 2500.0, "v1", Outcome::Failure),
        ])
        .unwrap();

        for rec in &ds.records {
            assert!(ds.min_payload_kg <= rec.payload_mass_kg);
            assert!(rec.payload_mass_kg <= ds.max_payload_kg);
        }
    }

    #[test]
    fn empty_record_list_is_rejected() {
        assert!(Dataset::from_records(Vec::new()).is_none());
    }

    #[test]
    fn outcome_round_trips_through_class() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::Success.class(), 1);
        assert_eq!(Outcome::Failure.to_string(), "Failure");
    }

    #[test]
    fn selection_labels() {
        assert_eq!(SiteSelection::AllSites.label(), ALL_SITES);
        assert_eq!(
            SiteSelection::Site("KSC LC-39A".to_string()).to_string(),
            "KSC LC-39A"
        );
    }
}
