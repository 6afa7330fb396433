//! Record and cell parsing.

use csv::ReaderBuilder;

/// Reads every non-blank record of `text`, trimming each cell.
///
/// Quoted cells may hold the delimiter, line breaks, and `""` escapes. Rows
/// may have differing lengths.
pub(crate) fn read_records(text: &str, delimiter: u8) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for record in reader.records() {
        let cells: Vec<String> = record?
            .iter()
            .map(|cell| cell.trim().to_owned())
            .collect();
        if cells.iter().any(|cell| !cell.is_empty()) {
            records.push(cells);
        }
    }
    Ok(records)
}

/// Parses a distance cell, returning `None` for blanks, garbage, and values
/// that cannot be tour weights.
pub(crate) fn parse_distance(cell: &str) -> Option<f64> {
    cell.parse::<f64>()
        .ok()
        .filter(|distance| distance.is_finite() && *distance > 0.0)
}
