use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – binary launch result
// ---------------------------------------------------------------------------

/// Launch outcome. The source data encodes this as a `class` column
/// with 1 = success, 0 = failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Decode the dataset's `class` value. Anything other than 0 or 1
    /// is rejected by the loader.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// The numeric `class` encoding, used as the scatter chart's y value.
    pub fn as_class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "Success"),
            Outcome::Failure => write!(f, "Failure"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch attempt (one row of the source table).
#[derive(Debug, Clone)]
pub struct LaunchRecord {
    /// Launch site identifier.
    pub site: String,
    /// Payload mass in kilograms.
    pub payload_mass_kg: f64,
    /// Binary success/failure flag.
    pub outcome: Outcome,
    /// Booster version category, used to color scatter points.
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// SiteSelection – the site control's value
// ---------------------------------------------------------------------------

/// Value of the site selector: either the aggregate over every site or a
/// single named site. Only the UI renders the "All Sites" label; the filter
/// engine matches on the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    AllSites,
    Site(String),
}

impl SiteSelection {
    /// Whether a record at `site` falls under this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::AllSites => true,
            SiteSelection::Site(name) => name == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::AllSites => write!(f, "All Sites"),
            SiteSelection::Site(name) => write!(f, "{name}"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with the values derived once at load time:
/// the sorted set of launch sites and the observed payload-mass bounds.
/// Immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launch records (rows).
    pub records: Vec<LaunchRecord>,
    /// Sorted, de-duplicated launch sites present in the data.
    pub sites: Vec<String>,
    /// Smallest payload mass observed (0.0 for an empty dataset).
    pub payload_min: f64,
    /// Largest payload mass observed (0.0 for an empty dataset).
    pub payload_max: f64,
}

impl LaunchDataset {
    /// Build the dataset and its derived indices from the loaded rows.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let site_set: BTreeSet<&str> = records.iter().map(|r| r.site.as_str()).collect();
        let sites: Vec<String> = site_set.into_iter().map(String::from).collect();

        let mut payload_min = f64::INFINITY;
        let mut payload_max = f64::NEG_INFINITY;
        for r in &records {
            payload_min = payload_min.min(r.payload_mass_kg);
            payload_max = payload_max.max(r.payload_mass_kg);
        }
        if records.is_empty() {
            payload_min = 0.0;
            payload_max = 0.0;
        }

        LaunchDataset {
            records,
            sites,
            payload_min,
            payload_max,
        }
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted set of booster version categories present in the data.
    pub fn booster_categories(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .map(|r| r.booster_category.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, mass: f64, outcome: Outcome, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: mass,
            outcome,
            booster_category: booster.to_string(),
        }
    }

    #[test]
    fn derives_sorted_unique_sites_and_payload_bounds() {
        let ds = LaunchDataset::from_records(vec![
            record("KSC LC-39A", 4200.0, Outcome::Success, "FT"),
            record("CCAFS LC-40", 500.0, Outcome::Failure, "v1.0"),
            record("KSC LC-39A", 9600.0, Outcome::Success, "B5"),
        ]);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(ds.payload_min, 500.0);
        assert_eq!(ds.payload_max, 9600.0);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn empty_dataset_has_zero_bounds() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.sites.is_empty());
        assert_eq!((ds.payload_min, ds.payload_max), (0.0, 0.0));
    }

    #[test]
    fn outcome_class_round_trip() {
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::Success.as_class(), 1);
        assert_eq!(Outcome::Failure.as_class(), 0);
    }

    #[test]
    fn site_selection_matching() {
        let all = SiteSelection::AllSites;
        let one = SiteSelection::Site("VAFB SLC-4E".to_string());
        assert!(all.matches("anything"));
        assert!(one.matches("VAFB SLC-4E"));
        assert!(!one.matches("KSC LC-39A"));
        assert_eq!(all.to_string(), "All Sites");
        assert_eq!(one.to_string(), "VAFB SLC-4E");
    }

    #[test]
    fn booster_categories_are_sorted_and_unique() {
        let ds = LaunchDataset::from_records(vec![
            record("A", 1.0, Outcome::Success, "FT"),
            record("A", 2.0, Outcome::Failure, "B4"),
            record("B", 3.0, Outcome::Success, "FT"),
        ]);
        let cats: Vec<String> = ds.booster_categories().into_iter().collect();
        assert_eq!(cats, vec!["B4", "FT"]);
    }
}
