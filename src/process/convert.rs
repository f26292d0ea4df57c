use crate::error::ConvertError;
use crate::process::mapper::{map_row, RowMap};
use crate::process::raw_table::RawTable;
use crate::process::utils::clean_and_extract_number;
use crate::schema::CelestialBody;

/// Build one typed record from a name-keyed row.
///
/// `row` is the 1-based data row number, used only in error messages.
pub fn to_celestial_body(
    map: &RowMap,
    row: usize,
    clean_numbers: bool,
) -> Result<CelestialBody, ConvertError> {
    let fields = Fields {
        map,
        row,
        clean_numbers,
    };

    Ok(CelestialBody {
        name: fields.text("name")?,
        satellites: fields.integer("satellites")?,
        radius_km: fields.float("radius_km")?,
        semi_major_axis_au: fields.float("semi_major_axis_au")?,
        eccentricity: fields.float("eccentricity")?,
        inclination_deg: fields.float("inclination_deg")?,
        argument_of_periapsis_deg: fields.float("argument_of_periapsis_deg")?,
        longitude_of_ascending_node_deg: fields.float("longitude_of_ascending_node_deg")?,
        mean_anomaly_deg: fields.float("mean_anomaly_deg")?,
        density_g_cm3: fields.float("density_g_cm3")?,
        body_type: fields.text("type")?,
    })
}

/// Convert every data row of `table`, stopping at the first bad one.
pub fn convert_table(
    table: &RawTable,
    clean_numbers: bool,
) -> Result<Vec<CelestialBody>, ConvertError> {
    table
        .rows
        .iter()
        .enumerate()
        .map(|(i, cells)| to_celestial_body(&map_row(&table.headers, cells), i + 1, clean_numbers))
        .collect()
}

struct Fields<'a> {
    map: &'a RowMap,
    row: usize,
    clean_numbers: bool,
}

impl Fields<'_> {
    fn raw(&self, column: &str) -> Result<&str, ConvertError> {
        self.map
            .get(column)
            .map(String::as_str)
            .ok_or_else(|| ConvertError::MissingColumn {
                column: column.to_string(),
                row: self.row,
            })
    }

    fn text(&self, column: &str) -> Result<String, ConvertError> {
        self.raw(column).map(str::to_string)
    }

    /// Raw or cleaned cell text, before casting.
    fn numeric_cell(&self, column: &str) -> Result<String, ConvertError> {
        let raw = self.raw(column)?;
        Ok(if self.clean_numbers {
            clean_and_extract_number(raw)
        } else {
            raw.to_string()
        })
    }

    // surrounding whitespace is tolerated, as a plain numeric cast allows
    fn integer(&self, column: &str) -> Result<i64, ConvertError> {
        let value = self.numeric_cell(column)?;
        let parsed = value.trim().parse::<i64>();
        match parsed {
            Ok(v) => Ok(v),
            Err(_) => Err(ConvertError::InvalidInteger {
                column: column.to_string(),
                value,
                row: self.row,
            }),
        }
    }

    /// JSON has no NaN or infinity, so those cells fail like any other bad number.
    fn float(&self, column: &str) -> Result<f64, ConvertError> {
        let value = self.numeric_cell(column)?;
        let parsed = value.trim().parse::<f64>();
        match parsed {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(ConvertError::InvalidFloat {
                column: column.to_string(),
                value,
                row: self.row,
            }),
        }
    }
}
