//! locflat Core - Feature flattening, identifier normalization and configuration
//!
//! This crate contains the conversion logic used by the `locflat` CLI.

pub mod config;
pub mod error;
pub mod flatten;
pub mod io;
pub mod models;
pub mod normalize;

pub use error::{FlattenError, Result};
pub use flatten::{flatten_document, flatten_features, Flattened};
pub use io::{convert_file, plan_conversion, read_document, render_records, write_records};
pub use models::{ConversionReport, LocationRecord};
pub use normalize::create_id;
