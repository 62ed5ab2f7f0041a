/// Data layer: core types, loading, classification, filtering, export.
///
/// Architecture:
/// ```text
///  .csv / .xlsx
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → ContactDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ ContactDataset │  Vec<Record>, column order, distinct titles
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ classify  │  flag executive titles → initial selection
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply title selection → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  filtered rows → CSV bytes
///   └──────────┘
/// ```

pub mod classify;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
