use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Optional minus, digits, optional point and fraction.
static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?[0-9]+\.?[0-9]*").expect("number pattern is valid"));

/// What a cell cleans to when nothing numeric can be found in it.
pub const FALLBACK_NUMBER: &str = "0";

/// Drop thousands separators, then keep the first numeric token.
///
/// `"1,234 km"` → `"1234"`, `"~5.2 (est.)"` → `"5.2"`. Cells with no digits
/// at all become [`FALLBACK_NUMBER`]; anything after the first token is lost.
pub fn clean_and_extract_number(raw: &str) -> String {
    let no_commas = raw.replace(',', "");
    match NUMBER.find(&no_commas) {
        Some(m) => m.as_str().to_string(),
        None => {
            debug!(raw, "no number found in cell, using {}", FALLBACK_NUMBER);
            FALLBACK_NUMBER.to_string()
        }
    }
}
