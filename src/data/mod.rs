/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, sites, payload bounds
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site/outcome aggregation, payload range subset
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
