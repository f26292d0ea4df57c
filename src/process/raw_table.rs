#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Column names from the first row, after any leading index column is dropped.
    pub headers: Vec<String>,
    /// Each data row, as a Vec of Strings (one per field). Widths may differ from `headers`.
    pub rows: Vec<Vec<String>>,
}
