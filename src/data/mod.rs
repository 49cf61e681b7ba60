/// Data layer: core types, loading, caching and aggregates.
///
/// Architecture:
/// ```text
///   android-games.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV, infer schema, normalize Installs → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  path → Arc<Dataset>, reloaded when the file changes
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  top-N by column, max/min/mean, missing-value scan
///   └──────────┘
/// ```

pub mod cache;
pub mod loader;
pub mod model;
pub mod stats;
