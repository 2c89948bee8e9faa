use serde::{Deserialize, Serialize};

use crate::render::{Color, series_fill, series_stroke};

use super::axis_descriptor::positioned_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Area,
    Bar,
}

impl SeriesKind {
    fn key_prefix(self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Bar => "bar",
        }
    }
}

/// One data series bound to a column and a Y axis id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub key: String,
    pub kind: SeriesKind,
    pub data_key: String,
    pub axis_id: String,
    pub fill: Color,
    pub stroke: Color,
    pub show_dots: bool,
}

impl SeriesDescriptor {
    #[must_use]
    pub fn new(kind: SeriesKind, column: &str, position: usize, axis_id: String) -> Self {
        Self {
            key: format!("{}{}", kind.key_prefix(), positioned_name(column, position)),
            kind,
            data_key: column.to_owned(),
            axis_id,
            fill: series_fill(position),
            stroke: series_stroke(position),
            show_dots: false,
        }
    }
}
