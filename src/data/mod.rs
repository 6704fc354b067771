/// Data layer: core types, workbook loading, and memoization.
///
/// Architecture:
/// ```text
///  .xlsx workbook
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  calamine parse → per-network sorted tables
///   └──────────┘
///        │
///        ▼
///   ┌───────────────────┐
///   │ DatasetCollection  │  Facebook / Instagram / LinkedIn datasets
///   └───────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  memoize by source identity (path+mtime or byte hash)
///   └──────────┘
/// ```

pub mod cache;
pub mod loader;
pub mod model;
