use std::collections::HashMap;

/// Column name → raw cell text for a single data row.
pub type RowMap = HashMap<String, String>;

/// Pair `headers` with `row` by position.
///
/// Stops at the shorter of the two, so a short row simply lacks its
/// trailing keys. A repeated header name keeps the later cell.
pub fn map_row(headers: &[String], row: &[String]) -> RowMap {
    headers
        .iter()
        .zip(row.iter())
        .map(|(h, v)| (h.clone(), v.clone()))
        .collect()
}
