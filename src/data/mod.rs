/// Data layer: core types, loading, and the two chart queries.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<LaunchRecord>, derived sites + payload bounds
///   └──────────┘
///      │      │
///      ▼      ▼
///   ┌────────┐ ┌────────┐
///   │ summary │ │ filter  │  site selection → pie slices,
///   └────────┘ └────────┘  payload window → scatter indices
/// ```
pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
