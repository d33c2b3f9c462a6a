use std::collections::BTreeMap;

use crate::data::model::{LaunchRecord, SiteSelection};

// ---------------------------------------------------------------------------
// Declarative chart descriptions
// ---------------------------------------------------------------------------
// Builders are pure: they map filter-engine output to a description and know
// nothing about rendering.  `ui::plot` turns descriptions into egui_plot
// marks.

/// One slice of the proportion chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

/// Categorical breakdown chart (successes by site, or success vs failure
/// for one site).
#[derive(Debug, Clone, PartialEq)]
pub struct ProportionChart {
    pub title: String,
    pub slices: Vec<Slice>,
}

/// One scatter series: every record sharing a booster version category,
/// drawn in one color with one legend entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub category: String,
    /// `[payload mass (kg), outcome class (0|1)]` per record.
    pub points: Vec<[f64; 2]>,
}

/// Payload mass vs outcome chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    /// Total number of records plotted.
    pub fn len(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Build the proportion chart from `filter::site_outcome_counts` output.
/// An empty count list yields an empty chart.
pub fn proportion_chart(selection: &SiteSelection, counts: &[(String, u32)]) -> ProportionChart {
    let title = match selection {
        SiteSelection::AllSites => "Total Successful Launches by Site".to_string(),
        SiteSelection::Site(site) => format!("Total Success vs Failure for {site}"),
    };

    ProportionChart {
        title,
        slices: counts
            .iter()
            .map(|(label, value)| Slice {
                label: label.clone(),
                value: f64::from(*value),
            })
            .collect(),
    }
}

/// Build the scatter chart from the payload-filtered record subset:
/// one point per record, grouped into per-booster-category series so each
/// category gets one color and one legend entry.
pub fn scatter_chart<'a>(records: impl IntoIterator<Item = &'a LaunchRecord>) -> ScatterChart {
    let mut by_category: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for r in records {
        by_category
            .entry(r.booster_category.as_str())
            .or_default()
            .push([r.payload_mass_kg, f64::from(r.outcome.as_class())]);
    }

    ScatterChart {
        title: "Payload Mass vs Launch Success".to_string(),
        series: by_category
            .into_iter()
            .map(|(category, points)| ScatterSeries {
                category: category.to_string(),
                points,
            })
            .collect(),
    }
}
