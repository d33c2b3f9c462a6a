use super::model::{LaunchDataset, SiteSelection};

// ---------------------------------------------------------------------------
// Pure filter operations; each one is a full pass over the table
// ---------------------------------------------------------------------------

/// Aggregate outcomes for the proportion chart.
///
/// * `AllSites`: one `(site, success count)` entry per distinct site, in the
///   dataset's sorted site order.  Sites with no successes still appear.
/// * `Site(name)`: exactly two entries, `("Success", n)` then `("Failure", n)`,
///   counting records at that site by outcome.
pub fn site_outcome_counts(dataset: &LaunchDataset, selection: &SiteSelection) -> Vec<(String, u32)> {
    match selection {
        SiteSelection::AllSites => dataset
            .sites
            .iter()
            .map(|site| {
                let successes = dataset
                    .records
                    .iter()
                    .filter(|r| r.site == *site && r.outcome.is_success())
                    .count() as u32;
                (site.clone(), successes)
            })
            .collect(),
        SiteSelection::Site(name) => {
            let mut successes = 0u32;
            let mut failures = 0u32;
            for r in dataset.records.iter().filter(|r| r.site == *name) {
                if r.outcome.is_success() {
                    successes += 1;
                } else {
                    failures += 1;
                }
            }
            vec![
                ("Success".to_string(), successes),
                ("Failure".to_string(), failures),
            ]
        }
    }
}

/// Return indices of records whose payload mass lies in `[low, high]`
/// (inclusive on both ends), restricted to the selected site unless the
/// selection is `AllSites`.
pub fn payload_filtered_indices(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    low: f64,
    high: f64,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            selection.matches(&r.site) && r.payload_mass_kg >= low && r.payload_mass_kg <= high
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchDataset, LaunchRecord, Outcome};

    fn record(site: &str, mass: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: mass,
            outcome,
            booster_category: "FT".to_string(),
        }
    }

    /// Site A: 3 successes + 1 failure, site B: 0 successes + 2 failures.
    fn two_site_dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("A", 100.0, Outcome::Success),
            record("A", 600.0, Outcome::Success),
            record("A", 1200.0, Outcome::Success),
            record("A", 2000.0, Outcome::Failure),
            record("B", 300.0, Outcome::Failure),
            record("B", 900.0, Outcome::Failure),
        ])
    }

    #[test]
    fn all_sites_counts_successes_per_site() {
        let ds = two_site_dataset();
        let counts = site_outcome_counts(&ds, &SiteSelection::AllSites);
        assert_eq!(counts, vec![("A".to_string(), 3), ("B".to_string(), 0)]);

        let total: u32 = counts.iter().map(|(_, n)| n).sum();
        let expected = ds.records.iter().filter(|r| r.outcome.is_success()).count() as u32;
        assert_eq!(total, expected);
    }

    #[test]
    fn single_site_counts_sum_to_site_total() {
        let ds = two_site_dataset();
        let counts = site_outcome_counts(&ds, &SiteSelection::Site("A".to_string()));
        assert_eq!(
            counts,
            vec![("Success".to_string(), 3), ("Failure".to_string(), 1)]
        );
        let site_total: u32 = counts.iter().map(|(_, n)| n).sum();
        assert_eq!(site_total, 4);

        let counts = site_outcome_counts(&ds, &SiteSelection::Site("B".to_string()));
        assert_eq!(
            counts,
            vec![("Success".to_string(), 0), ("Failure".to_string(), 2)]
        );
    }

    #[test]
    fn payload_filter_is_inclusive_on_both_ends() {
        let ds = two_site_dataset();
        let hits = payload_filtered_indices(&ds, &SiteSelection::AllSites, 500.0, 1500.0);
        let masses: Vec<f64> = hits.iter().map(|&i| ds.records[i].payload_mass_kg).collect();
        assert_eq!(masses, vec![600.0, 1200.0, 900.0]);

        // Exact-boundary matches are kept.
        let hits = payload_filtered_indices(&ds, &SiteSelection::AllSites, 600.0, 1200.0);
        let masses: Vec<f64> = hits.iter().map(|&i| ds.records[i].payload_mass_kg).collect();
        assert_eq!(masses, vec![600.0, 1200.0, 900.0]);
    }

    #[test]
    fn payload_filter_restricts_to_selected_site() {
        let ds = two_site_dataset();
        let selection = SiteSelection::Site("A".to_string());
        let hits = payload_filtered_indices(&ds, &selection, 500.0, 1500.0);
        assert!(hits.iter().all(|&i| ds.records[i].site == "A"));
        let masses: Vec<f64> = hits.iter().map(|&i| ds.records[i].payload_mass_kg).collect();
        assert_eq!(masses, vec![600.0, 1200.0]);
    }

    #[test]
    fn full_payload_range_returns_the_site_restricted_table() {
        let ds = two_site_dataset();
        let hits =
            payload_filtered_indices(&ds, &SiteSelection::AllSites, ds.payload_min, ds.payload_max);
        assert_eq!(hits.len(), ds.len());

        let selection = SiteSelection::Site("B".to_string());
        let hits = payload_filtered_indices(&ds, &selection, ds.payload_min, ds.payload_max);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn empty_range_match_is_not_an_error() {
        let ds = two_site_dataset();
        let hits = payload_filtered_indices(&ds, &SiteSelection::AllSites, 5000.0, 9000.0);
        assert!(hits.is_empty());
    }

    #[test]
    fn filter_operations_are_idempotent() {
        let ds = two_site_dataset();
        let selection = SiteSelection::Site("A".to_string());
        assert_eq!(
            site_outcome_counts(&ds, &selection),
            site_outcome_counts(&ds, &selection)
        );
        assert_eq!(
            payload_filtered_indices(&ds, &selection, 0.0, 2500.0),
            payload_filtered_indices(&ds, &selection, 0.0, 2500.0)
        );
    }
}
