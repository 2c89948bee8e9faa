use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Locator for a CSV artifact attached to a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactRef {
    pub name: String,
    pub url: String,
    pub uuid: String,
}

impl ArtifactRef {
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>, uuid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            uuid: uuid.into(),
        }
    }
}

/// Columns selected for the X and Y axes, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    #[serde(default)]
    pub x_axis_keys: Vec<String>,
    #[serde(default)]
    pub y_axis_keys: Vec<String>,
}

impl AxisConfig {
    #[must_use]
    pub fn new<X, Y>(x_axis_keys: X, y_axis_keys: Y) -> Self
    where
        X: IntoIterator,
        X::Item: Into<String>,
        Y: IntoIterator,
        Y::Item: Into<String>,
    {
        Self {
            x_axis_keys: x_axis_keys.into_iter().map(Into::into).collect(),
            y_axis_keys: y_axis_keys.into_iter().map(Into::into).collect(),
        }
    }
}

/// One typed CSV cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

impl CellValue {
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) | Self::Empty => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integral values print without a fractional part so that
            // `1700000000.0` keeps its 10-character epoch form.
            Self::Number(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
                write!(f, "{value:.0}")
            }
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::Empty => Ok(()),
        }
    }
}

pub type Row = IndexMap<String, CellValue>;

/// Rows of a fetched artifact, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    #[must_use]
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one column, skipping rows that lack it.
    pub fn column<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a CellValue> + 'a {
        self.rows.iter().filter_map(move |row| row.get(name))
    }
}

/// Inferred kind of a CSV column.
///
/// Kinds outside the known set are kept verbatim in `Unrecognized` so the
/// assembler can route them explicitly instead of through a catch-all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnKind {
    Number,
    Time,
    Category,
    Unrecognized(String),
}

impl ColumnKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Number => "number",
            Self::Time => "time",
            Self::Category => "category",
            Self::Unrecognized(name) => name,
        }
    }
}

impl From<&str> for ColumnKind {
    fn from(value: &str) -> Self {
        match value {
            "number" => Self::Number,
            "time" => Self::Time,
            "category" => Self::Category,
            other => Self::Unrecognized(other.to_owned()),
        }
    }
}

impl From<String> for ColumnKind {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ColumnKind> for String {
    fn from(value: ColumnKind) -> Self {
        match value {
            ColumnKind::Unrecognized(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind and render-scale hint of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    pub kind: ColumnKind,
    #[serde(default)]
    pub scale: Option<String>,
}

impl ColumnMeta {
    #[must_use]
    pub fn new(kind: ColumnKind, scale: Option<&str>) -> Self {
        Self {
            kind,
            scale: scale.map(str::to_owned),
        }
    }
}

/// Per-column metadata inferred from one fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnMetadata {
    columns: IndexMap<String, ColumnMeta>,
}

impl ColumnMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Joins a type map and a scale map the way CSV parse callbacks deliver them.
    ///
    /// A column is only considered inferred when it appears in both maps.
    /// An empty scale string is kept as an absent hint.
    #[must_use]
    pub fn from_parts(
        types: &IndexMap<String, String>,
        scales: &IndexMap<String, String>,
    ) -> Self {
        let columns = types
            .iter()
            .filter_map(|(name, kind)| {
                let scale = scales.get(name)?;
                let scale = (!scale.is_empty()).then(|| scale.clone());
                Some((
                    name.clone(),
                    ColumnMeta {
                        kind: ColumnKind::from(kind.as_str()),
                        scale,
                    },
                ))
            })
            .collect();
        Self { columns }
    }

    pub fn insert(&mut self, name: impl Into<String>, meta: ColumnMeta) {
        self.columns.insert(name.into(), meta);
    }

    #[must_use]
    pub fn with_column(mut self, name: &str, kind: ColumnKind, scale: Option<&str>) -> Self {
        self.insert(name, ColumnMeta::new(kind, scale));
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColumnMeta> {
        self.columns.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnMeta)> {
        self.columns.iter().map(|(name, meta)| (name.as_str(), meta))
    }
}
