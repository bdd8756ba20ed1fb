//! Sample dataset generator for grid/table UIs.
//!
//! This crate fabricates a mock relational dataset - a flat collection of
//! [`Record`](mockgrid_core::Record)s plus self-referential parent/child
//! links - for exercising data grid components without a real backend.
//!
//! # Architecture
//!
//! ```text
//! Catalogs (reference tables)
//!        │
//!        ▼
//! ┌──────────────────┐      ┌──────────────────────┐
//! │  RecordFactory   │      │  hierarchy           │
//! │                  │      │                      │
//! │  - catalogs      │      │  - assign_parents    │
//! │  - rng (StdRng)  │      │  - generate_tree     │
//! └────────┬─────────┘      └──────────┬───────────┘
//!          │                           │
//!          └────────►  DatasetGenerator ◄──────────
//!                            │
//!                            ▼
//!                      Vec<Record> / Vec<TreeNode>
//! ```
//!
//! # Example
//!
//! ```rust
//! use mockgrid_generator::DatasetGenerator;
//! use mockgrid_core::Catalogs;
//!
//! let mut generator = DatasetGenerator::new(Catalogs::default(), 42);
//! let records = generator.generate(100);
//!
//! assert_eq!(records.len(), 100);
//! ```
//!
//! The convenience entry points [`generate_sample_data`] and
//! [`generate_columns`] mirror the simplest consumer usage: an
//! entropy-seeded dataset over the default catalogs, and the matching column
//! schema.

pub mod dataset;
pub mod factory;
pub mod generators;
pub mod hierarchy;

// Re-exports for convenience
pub use dataset::{generate_columns, generate_sample_data, DatasetGenerator, DEFAULT_RECORD_COUNT};
pub use factory::RecordFactory;
pub use hierarchy::{
    assign_parents, generate_tree, HierarchyStrategy, StrategyParseError,
    DEFAULT_AVG_CHILDREN_PER_PARENT, DEFAULT_MAX_LEVEL, DEFAULT_PARENT_PERCENTAGE,
};
