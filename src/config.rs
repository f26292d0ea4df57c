// src/config.rs

use std::path::{Path, PathBuf};

use crate::process::reader::ReaderMode;

/// How a single conversion run reads and cleans its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub reader_mode: ReaderMode,
    /// Strip thousands separators and pull the first number out of noisy cells.
    pub clean_numbers: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Variant::Cleaned.options()
    }
}

/// Input and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConvertPaths {
    pub fn resolve(base: impl AsRef<Path>, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            input: base.join(input),
            output: base.join(output),
        }
    }
}

/// The four converter generations, each one adding to the previous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Header-keyed, paths relative to the working directory.
    Basic,
    /// Header-keyed, paths relative to the crate directory.
    Robust,
    /// Drops a leading index column, tolerates a BOM.
    LeadingIndex,
    /// `LeadingIndex` plus numeric cleaning.
    Cleaned,
}

impl Variant {
    pub fn options(self) -> ConvertOptions {
        match self {
            Variant::Basic | Variant::Robust => ConvertOptions {
                reader_mode: ReaderMode::HeaderKeyed,
                clean_numbers: false,
            },
            Variant::LeadingIndex => ConvertOptions {
                reader_mode: ReaderMode::DropLeadingColumn,
                clean_numbers: false,
            },
            Variant::Cleaned => ConvertOptions {
                reader_mode: ReaderMode::DropLeadingColumn,
                clean_numbers: true,
            },
        }
    }

    /// Hard-coded locations for this variant.
    ///
    /// `Basic` resolves against the working directory; the rest are anchored
    /// at the crate directory, where `csv_folder/` lives.
    pub fn paths(self) -> ConvertPaths {
        match self {
            Variant::Basic => ConvertPaths::resolve("", "csv_folder/planets.csv", "planets.json"),
            Variant::Robust => ConvertPaths::resolve(
                project_root(),
                "csv_folder/planets.csv",
                "planets.json",
            ),
            Variant::LeadingIndex | Variant::Cleaned => ConvertPaths::resolve(
                project_root(),
                "csv_folder/SolarSystem-extracted.csv",
                "SolarSystem-extracted.json",
            ),
        }
    }

    pub fn success_message(self, paths: &ConvertPaths) -> String {
        let (input, output) = (paths.input.display(), paths.output.display());
        match self {
            Variant::Basic | Variant::Robust => {
                format!("Successfully converted {} to {}!", input, output)
            }
            Variant::LeadingIndex => format!(
                "Successfully converted {} to {}, ignoring the first column!",
                input, output
            ),
            Variant::Cleaned => format!(
                "Successfully converted and cleaned {} to {}!",
                input, output
            ),
        }
    }
}

fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}
