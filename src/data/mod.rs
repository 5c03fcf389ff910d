/// Data layer: core types, loading, year selection and aggregation.
///
/// Architecture:
/// ```text
///   remote / local .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → CrimeDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  keep the most recent reporting years
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  aggregate    │  sums / group-by / pivot per chart
///   └──────────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;

use thiserror::Error;

/// Failures raised by the data layer itself (IO and CSV errors pass through
/// `anyhow` with context instead).
#[derive(Debug, Error)]
pub enum DataError {
    #[error("CSV missing '{0}' column")]
    MissingColumn(String),

    #[error("no reporting years in dataset")]
    NoYears,
}
