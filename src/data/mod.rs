/// Data layer: core types, loading, and sample extraction.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read file → raw string rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  extract  │  skip headers, parse, drop malformed rows
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ SampleSet  │  Vec<Sample>, source order
///   └───────────┘
/// ```

pub mod extract;
pub mod loader;
pub mod model;
