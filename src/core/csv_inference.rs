use chrono::DateTime;
use tracing::{debug, warn};

use crate::core::{CellValue, ColumnKind, ColumnMeta, ColumnMetadata, Dataset, Row};
use crate::error::DashboardResult;

pub const TIME_SCALE: &str = "time";
pub const LINEAR_SCALE: &str = "linear";
pub const BAND_SCALE: &str = "band";

/// Rows and column metadata produced from one artifact body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCsv {
    pub dataset: Dataset,
    pub metadata: ColumnMetadata,
}

/// Turns raw artifact text into typed rows plus per-column metadata.
pub trait CsvParser {
    fn parse(&self, text: &str) -> DashboardResult<ParsedCsv>;
}

/// Header-first CSV parser that infers `time`, `number` or `category` per column.
///
/// A column is `time` when every non-empty cell is a 10-digit Unix-seconds
/// value or an RFC 3339 timestamp, `number` when every non-empty cell is a
/// finite number, and `category` otherwise (including all-empty columns).
#[derive(Debug, Clone, Copy, Default)]
pub struct InferringCsvParser;

impl CsvParser for InferringCsvParser {
    fn parse(&self, text: &str) -> DashboardResult<ParsedCsv> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();
        if headers.is_empty() {
            return Ok(ParsedCsv::default());
        }

        let mut raw_rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record?;
            raw_rows.push(record.iter().map(str::to_owned).collect());
        }

        let kinds: Vec<ColumnKind> = (0..headers.len())
            .map(|index| {
                infer_column_kind(
                    raw_rows
                        .iter()
                        .map(|row| row.get(index).map_or("", String::as_str)),
                )
            })
            .collect();

        let mut metadata = ColumnMetadata::new();
        for (name, kind) in headers.iter().zip(&kinds) {
            if metadata.contains(name) {
                warn!(column = %name, "duplicate csv header, keeping the last column");
            }
            metadata.insert(name.clone(), ColumnMeta::new(kind.clone(), scale_for(kind)));
        }

        let rows = raw_rows
            .iter()
            .map(|raw| {
                headers
                    .iter()
                    .zip(&kinds)
                    .enumerate()
                    .map(|(index, (name, kind))| {
                        let cell = raw.get(index).map_or("", String::as_str);
                        (name.clone(), typed_cell(cell, kind))
                    })
                    .collect::<Row>()
            })
            .collect();

        let dataset = Dataset::new(rows);
        debug!(
            rows = dataset.len(),
            columns = metadata.len(),
            "parsed csv artifact"
        );
        Ok(ParsedCsv { dataset, metadata })
    }
}

fn scale_for(kind: &ColumnKind) -> Option<&'static str> {
    match kind {
        ColumnKind::Time => Some(TIME_SCALE),
        ColumnKind::Number => Some(LINEAR_SCALE),
        ColumnKind::Category => Some(BAND_SCALE),
        ColumnKind::Unrecognized(_) => None,
    }
}

fn infer_column_kind<'a>(cells: impl Iterator<Item = &'a str>) -> ColumnKind {
    let mut seen = false;
    let mut all_time = true;
    let mut all_number = true;

    for cell in cells.filter(|cell| !cell.is_empty()) {
        seen = true;
        all_time &= timestamp_seconds(cell).is_some();
        all_number &= parse_number(cell).is_some();
        if !all_time && !all_number {
            return ColumnKind::Category;
        }
    }

    match (seen, all_time, all_number) {
        (false, _, _) => ColumnKind::Category,
        (true, true, _) => ColumnKind::Time,
        (true, false, true) => ColumnKind::Number,
        (true, false, false) => ColumnKind::Category,
    }
}

fn typed_cell(cell: &str, kind: &ColumnKind) -> CellValue {
    if cell.is_empty() {
        return CellValue::Empty;
    }
    let number = match kind {
        ColumnKind::Time => timestamp_seconds(cell),
        _ => parse_number(cell),
    };
    number.map_or_else(|| CellValue::Text(cell.to_owned()), CellValue::Number)
}

fn parse_number(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn timestamp_seconds(cell: &str) -> Option<f64> {
    if cell.len() == 10 && cell.bytes().all(|b| b.is_ascii_digit()) {
        let seconds: i64 = cell.parse().ok()?;
        return DateTime::from_timestamp(seconds, 0).map(|_| seconds as f64);
    }
    // Whole seconds keep the value in the 10-digit shape the axis formatter reads.
    DateTime::parse_from_rfc3339(cell)
        .ok()
        .map(|instant| instant.timestamp() as f64)
}
