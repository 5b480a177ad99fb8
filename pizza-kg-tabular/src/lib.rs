//! Tabular source reader for the pizza-restaurant dataset.
//!
//! This crate parses a delimited text file into an in-memory columnar batch
//! whose cells are nullable text. Mapping rules read it one column at a time.
//!
//! # Design
//!
//! - **Columnar storage**: one `Vec<Option<String>>` per column, not per row
//! - **Text only**: every cell is an opaque string at this layer, including
//!   prices and currencies; datatypes are attached later by mapping rules
//! - **Nulls are explicit**: empty cells and the conventional missing-value
//!   tokens (`NaN`, `NA`, `NULL`, ...) are read as `None`
//! - **Fail fast**: a malformed row aborts the read, no partial batch is returned

pub mod batch;
pub mod error;
pub mod reader;

pub use batch::{BatchSchema, Column, ColumnBatch, FieldInfo};
pub use error::{Result, TabularError};
pub use reader::{read_csv, read_csv_path, CsvOptions, DEFAULT_NA_VALUES};

/// Header schema of the pizza-restaurant dataset, in file order.
pub const PIZZA_COLUMNS: &[&str] = &[
    "name",
    "address",
    "city",
    "country",
    "postcode",
    "state",
    "categories",
    "menu item",
    "item value",
    "currency",
    "item description",
];
