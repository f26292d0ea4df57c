// src/process/mod.rs
pub mod convert;
pub mod mapper;
pub mod raw_table;
pub mod reader;
pub mod utils;

use anyhow::Result;
use std::{path::Path, time::Instant};
use tracing::info;

use crate::config::ConvertOptions;
use crate::output::write_json;

pub use raw_table::RawTable;
pub use reader::ReaderMode;

/// What a finished run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub records: usize,
}

/// Read `input`, convert every row into a [`crate::CelestialBody`] and write the
/// array to `output`.
///
/// - The whole table is loaded before anything is converted, and the whole
///   array is built before anything is written; a failure at any step leaves
///   `output` untouched.
/// - Numeric cells are only cleaned when `options.clean_numbers` is set;
///   otherwise `"1,234"` fails the cast.
#[tracing::instrument(
    level = "info",
    skip(input, output, options),
    fields(input = %input.as_ref().display(), output = %output.as_ref().display())
)]
pub fn convert_csv_to_json<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ConvertOptions,
) -> Result<ConversionSummary> {
    let start = Instant::now();

    let table = reader::load_csv(&input, options.reader_mode)?;
    let bodies = convert::convert_table(&table, options.clean_numbers)?;
    write_json(&output, &bodies)?;

    info!(
        records = bodies.len(),
        cleaned = options.clean_numbers,
        elapsed = ?start.elapsed(),
        "converted"
    );
    Ok(ConversionSummary {
        records: bodies.len(),
    })
}
