//! Mapcel data ingestion.
//!
//! Reads delimited text (CSV by default) into a [`RawTable`]: the first
//! record becomes the header row and every later record is kept verbatim,
//! ragged rows included. Semantic interpretation happens downstream.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use mapcel_ingest::read_csv_table;
//!
//! let table = read_csv_table(Path::new("sites.csv"))?;
//! println!("{} columns, {} rows", table.headers.len(), table.rows.len());
//! ```
//!
//! [`RawTable`]: mapcel_model::RawTable

mod error;
mod reader;

pub use error::{IngestError, Result};
pub use reader::{
    IngestOptions, MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit,
    read_csv_reader, read_csv_table, read_csv_table_with_options, validate_encoding,
};
