pub mod csv_inference;
pub mod types;
pub mod value_format;

pub use csv_inference::{CsvParser, InferringCsvParser, ParsedCsv};
pub use types::{
    ArtifactRef, AxisConfig, CellValue, ColumnKind, ColumnMeta, ColumnMetadata, Dataset, Row,
};
pub use value_format::{
    AXIS_DATETIME_FORMAT, AxisValueFormatter, DisplayTimeZone, format_axis_value,
    parse_unix_seconds,
};
