//! Coordinate validation.
//!
//! Checks every latitude and longitude cell of a table and reports each
//! failure as a [`ValidationError`] carrying the display row, the column
//! name and the raw cell text.
//!
//! [`ValidationError`]: mapcel_model::ValidationError

#![deny(unsafe_code)]

mod coordinate;
mod dataset;
mod parse;

pub use coordinate::{CoordinateIssue, validate_coordinate};
pub use dataset::{validate_dataset, validate_table};
pub use parse::parse_coordinate;
