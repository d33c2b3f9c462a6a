use crate::charts::{self, ProportionChart, ScatterChart};
use crate::color::ColorMap;
use crate::data::filter::{payload_filtered_indices, site_outcome_counts};
use crate::data::model::{LaunchDataset, SiteSelection};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Each control maps to the charts that depend on it: the site selector
/// feeds both charts, the payload range feeds only the scatter chart.  A
/// setter recomputes exactly its dependent charts, synchronously, so a chart
/// region is never observed between "stale" and "rendered".
pub struct AppState {
    /// Loaded dataset; read-only for the process lifetime.
    pub dataset: LaunchDataset,

    /// Current value of the site selector.
    pub site: SiteSelection,

    /// Current payload-mass range `(low, high)` in kg, `low <= high`.
    pub payload_range: (f64, f64),

    /// Booster version category → colour, fixed at startup.
    pub color_map: ColorMap,

    /// Current proportion chart description.
    pub proportion: ProportionChart,

    /// Current scatter chart description.
    pub scatter: ScatterChart,
}

impl AppState {
    /// Build the initial state: selector on `AllSites`, range set to the
    /// dataset's observed payload bounds, both charts computed before first
    /// display.
    pub fn new(dataset: LaunchDataset) -> Self {
        let site = SiteSelection::AllSites;
        let payload_range = (dataset.payload_min, dataset.payload_max);
        let color_map = ColorMap::new(&dataset.booster_categories());
        let proportion = compute_proportion(&dataset, &site);
        let scatter = compute_scatter(&dataset, &site, payload_range);

        Self {
            dataset,
            site,
            payload_range,
            color_map,
            proportion,
            scatter,
        }
    }

    /// Site control changed: both charts are stale, recompute them.
    pub fn set_site(&mut self, selection: SiteSelection) {
        if self.site == selection {
            return;
        }
        self.site = selection;
        self.proportion = compute_proportion(&self.dataset, &self.site);
        self.scatter = compute_scatter(&self.dataset, &self.site, self.payload_range);
    }

    /// Payload range changed: only the scatter chart is stale.  A reversed
    /// range is normalised to `low <= high`.
    pub fn set_payload_range(&mut self, low: f64, high: f64) {
        let range = if low <= high { (low, high) } else { (high, low) };
        if self.payload_range == range {
            return;
        }
        self.payload_range = range;
        self.scatter = compute_scatter(&self.dataset, &self.site, self.payload_range);
    }
}

fn compute_proportion(dataset: &LaunchDataset, selection: &SiteSelection) -> ProportionChart {
    let counts = site_outcome_counts(dataset, selection);
    charts::proportion_chart(selection, &counts)
}

fn compute_scatter(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    (low, high): (f64, f64),
) -> ScatterChart {
    let indices = payload_filtered_indices(dataset, selection, low, high);
    charts::scatter_chart(indices.iter().map(|&i| &dataset.records[i]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn record(site: &str, mass: f64, outcome: Outcome, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: mass,
            outcome,
            booster_category: booster.to_string(),
        }
    }

    fn state() -> AppState {
        AppState::new(LaunchDataset::from_records(vec![
            record("A", 500.0, Outcome::Success, "v1.0"),
            record("A", 2000.0, Outcome::Failure, "v1.1"),
            record("B", 4200.0, Outcome::Success, "FT"),
        ]))
    }

    #[test]
    fn initial_state_uses_defaults_and_computes_both_charts() {
        let s = state();
        assert_eq!(s.site, SiteSelection::AllSites);
        assert_eq!(s.payload_range, (500.0, 4200.0));
        assert_eq!(s.proportion.title, "Total Successful Launches by Site");
        assert_eq!(s.proportion.slices.len(), 2);
        assert_eq!(s.scatter.len(), 3);
    }

    #[test]
    fn site_change_recomputes_both_charts() {
        let mut s = state();
        s.set_site(SiteSelection::Site("A".to_string()));
        assert_eq!(s.proportion.title, "Total Success vs Failure for A");
        assert_eq!(s.proportion.slices[0].value, 1.0);
        assert_eq!(s.proportion.slices[1].value, 1.0);
        assert_eq!(s.scatter.len(), 2);
    }

    #[test]
    fn payload_change_recomputes_only_the_scatter_chart() {
        let mut s = state();
        let proportion_before = s.proportion.clone();

        s.set_payload_range(1000.0, 5000.0);
        assert_eq!(s.proportion, proportion_before);
        assert_eq!(s.scatter.len(), 2);

        s.set_payload_range(9000.0, 9500.0);
        assert!(s.scatter.is_empty());
        assert_eq!(s.proportion, proportion_before);
    }

    #[test]
    fn reversed_payload_range_is_normalised() {
        let mut s = state();
        s.set_payload_range(5000.0, 1000.0);
        assert_eq!(s.payload_range, (1000.0, 5000.0));
        assert_eq!(s.scatter.len(), 2);
    }
}
