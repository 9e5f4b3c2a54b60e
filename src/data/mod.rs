//! Data layer: table types, the file registry, and text loading.
//!
//! Architecture:
//! ```text
//!   registry      (data source, particle) → relative path
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  3 header lines + whitespace floats → DoseTable (eV)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ DoseTable  │  energy column + one column per geometry
//!   └───────────┘
//! ```

pub mod loader;
pub mod model;
pub mod registry;
