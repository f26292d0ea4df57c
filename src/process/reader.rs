// src/process/reader.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::{fs, io::Cursor, path::Path};
use tracing::{debug, warn};

use crate::error::ConvertError;
use crate::process::raw_table::RawTable;

const BOM: char = '\u{feff}';

/// How the first row and first column of a source file are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderMode {
    /// First row names the columns; every column is kept.
    HeaderKeyed,
    /// Like `HeaderKeyed`, but the first cell of every row (header included)
    /// is a positional index and gets discarded.
    DropLeadingColumn,
}

/// Read `path` fully into memory and split it into header + data rows.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_csv<P: AsRef<Path>>(path: P, mode: ReaderMode) -> Result<RawTable> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read CSV file: {:?}", path.as_ref()))?;
    load_csv_from_str(&text, mode)
        .with_context(|| format!("Failed to parse CSV file: {:?}", path.as_ref()))
}

/// Same as [`load_csv`], over text already in memory.
pub fn load_csv_from_str(text: &str, mode: ReaderMode) -> Result<RawTable> {
    let text = text.strip_prefix(BOM).unwrap_or(text);

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // short or long rows are the mapper's problem, not ours
        .from_reader(Cursor::new(text.as_bytes()));

    let skip = match mode {
        ReaderMode::HeaderKeyed => 0,
        ReaderMode::DropLeadingColumn => 1,
    };

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error at record {}", idx))?;
        let cells: Vec<String> = record.iter().skip(skip).map(|s| s.to_string()).collect();

        if headers.is_none() {
            headers = Some(cells);
        } else {
            rows.push(cells);
        }
    }

    let headers = match (headers, mode) {
        (Some(h), _) => h,
        (None, ReaderMode::HeaderKeyed) => {
            warn!("CSV input is empty; no records will be produced");
            Vec::new()
        }
        (None, ReaderMode::DropLeadingColumn) => return Err(ConvertError::MissingHeader.into()),
    };

    debug!(columns = headers.len(), rows = rows.len(), "loaded CSV");
    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn header_keyed_keeps_every_column() -> Result<()> {
        let table = load_csv_from_str("name,type\nEarth,Terrestrial\n", ReaderMode::HeaderKeyed)?;
        assert_eq!(table.headers, vec!["name", "type"]);
        assert_eq!(table.rows, vec![vec!["Earth", "Terrestrial"]]);
        Ok(())
    }

    #[test]
    fn drop_leading_column_slices_header_and_rows() -> Result<()> {
        let table = load_csv_from_str(
            "idx,name,type\n0,Mars,Terrestrial\n1,Jupiter,Gas Giant\n",
            ReaderMode::DropLeadingColumn,
        )?;
        assert_eq!(table.headers, vec!["name", "type"]);
        assert_eq!(
            table.rows,
            vec![vec!["Mars", "Terrestrial"], vec!["Jupiter", "Gas Giant"]]
        );
        Ok(())
    }

    #[test]
    fn byte_order_mark_is_stripped() -> Result<()> {
        for mode in [ReaderMode::HeaderKeyed, ReaderMode::DropLeadingColumn] {
            let table = load_csv_from_str("\u{feff}idx,name\n0,Venus\n", mode)?;
            assert!(!table.headers[0].starts_with(BOM));
        }
        let table = load_csv_from_str("\u{feff}name\nVenus\n", ReaderMode::HeaderKeyed)?;
        assert_eq!(table.headers, vec!["name"]);
        Ok(())
    }

    #[test]
    fn uneven_rows_are_kept_verbatim() -> Result<()> {
        let table = load_csv_from_str("a,b,c\n1,2\n1,2,3,4\n", ReaderMode::HeaderKeyed)?;
        assert_eq!(table.rows[0].len(), 2);
        assert_eq!(table.rows[1].len(), 4);
        Ok(())
    }

    #[test]
    fn quoted_cells_keep_commas_and_spaces() -> Result<()> {
        let table = load_csv_from_str(
            "name,radius_km\n\" Ceres \",\"1,234 km\"\n",
            ReaderMode::HeaderKeyed,
        )?;
        assert_eq!(table.rows[0], vec![" Ceres ", "1,234 km"]);
        Ok(())
    }

    #[test]
    fn empty_input_depends_on_mode() -> Result<()> {
        let table = load_csv_from_str("", ReaderMode::HeaderKeyed)?;
        assert!(table.headers.is_empty() && table.rows.is_empty());

        let err = load_csv_from_str("", ReaderMode::DropLeadingColumn).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConvertError>(),
            Some(ConvertError::MissingHeader)
        ));
        Ok(())
    }

    #[test]
    fn load_csv_reads_from_disk() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(b"idx,name\n0,Pluto\n")?;
        let table = load_csv(tmp.path(), ReaderMode::DropLeadingColumn)?;
        assert_eq!(table.rows, vec![vec!["Pluto"]]);
        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_csv("/definitely/not/here.csv", ReaderMode::HeaderKeyed).unwrap_err();
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }
}
