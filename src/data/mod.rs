/// Data layer: core types, loading, classification and ranking.
///
/// Architecture:
/// ```text
///  co2_data_clean.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse `;`-delimited file → EmissionTable (sorted by year)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ classify  │  value → Bucket          (map view)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate │  filter EU → mean per country → top 10 → Bucket
///   └───────────┘
/// ```

pub mod aggregate;
pub mod classify;
pub mod filter;
pub mod loader;
pub mod model;
