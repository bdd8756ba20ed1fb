//! Core data model for the mockgrid sample-data framework.
//!
//! This crate defines the shapes shared by the generator and any consuming
//! grid component:
//!
//! - [`Record`] - one generated data row with typed payload fields
//! - [`TreeNode`] - the narrower node shape emitted by the recursive-tree
//!   hierarchy strategy
//! - [`ColumnDescriptor`] - per-column display/sort/filter/edit metadata
//! - [`Catalogs`] - the injectable reference tables (names, domains,
//!   statuses, tags, countries, departments) that field generation and the
//!   column schema draw from
//!
//! The column schema and the catalogs are kept in the same crate so the two
//! cannot drift apart: select-filter options are built from the same tables
//! the record factory samples.

pub mod catalogs;
pub mod columns;
pub mod record;

pub use catalogs::{CatalogError, Catalogs};
pub use columns::{grid_columns, ColumnDescriptor, ColumnFormat, DataType, FilterType};
pub use record::{Record, TreeNode};
