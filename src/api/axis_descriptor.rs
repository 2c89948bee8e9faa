use serde::{Deserialize, Serialize};

use crate::render::{Color, GRAY, GRAY_10};

/// Shared id of the Y axis that hosts every `number` column.
pub const POOLED_NUMBER_AXIS_ID: &str = "number";

const POOLED_NUMBER_AXIS_KEY: &str = "yAxisNumber";
const POSITION_SEPARATOR: char = '-';
const DEFAULT_POOLED_SCALE: &str = "auto";
const DEFAULT_TIME_SCALE: &str = "time";
const Y_TICK_FONT_SIZE: u32 = 12;
const X_TICK_FONT_SIZE: u32 = 10;
const Y_TICK_COUNT: u32 = 5;
const ROTATED_ANGLE: f64 = -90.0;
const TITLE_FONT_SIZE: u32 = 14;
const TITLE_OFFSET: f64 = -16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrientation {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisValueType {
    Number,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisDomain {
    /// Fit the data extent on both ends.
    Auto,
    /// Category order from high to low.
    HighLow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPosition {
    InsideLeft,
}

/// Axis title drawn alongside the ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub text: String,
    pub angle: f64,
    pub position: LabelPosition,
    pub offset: f64,
    pub font_size: u32,
    pub bold: bool,
    pub color: Color,
}

impl AxisLabel {
    fn rotated(text: String) -> Self {
        Self {
            text,
            angle: ROTATED_ANGLE,
            position: LabelPosition::InsideLeft,
            offset: TITLE_OFFSET,
            font_size: TITLE_FONT_SIZE,
            bold: true,
            color: GRAY,
        }
    }
}

/// One axis widget for a composed chart renderer.
///
/// `key` is unique within a chart. Y axes carry an `axis_id` that series bind
/// to; X axes carry the `data_key` column they read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisDescriptor {
    pub key: String,
    pub orientation: AxisOrientation,
    pub axis_id: Option<String>,
    pub data_key: Option<String>,
    pub value_type: AxisValueType,
    pub scale: Option<String>,
    pub domain: Option<AxisDomain>,
    pub timestamp_ticks: bool,
    pub tick_count: Option<u32>,
    pub font_size: u32,
    pub angle: Option<f64>,
    pub stroke: Option<Color>,
    pub label: Option<AxisLabel>,
}

impl AxisDescriptor {
    fn y_axis(key: String, axis_id: String, value_type: AxisValueType) -> Self {
        Self {
            key,
            orientation: AxisOrientation::Y,
            axis_id: Some(axis_id),
            data_key: None,
            value_type,
            scale: None,
            domain: None,
            timestamp_ticks: false,
            tick_count: Some(Y_TICK_COUNT),
            font_size: Y_TICK_FONT_SIZE,
            angle: None,
            stroke: None,
            label: None,
        }
    }

    fn x_axis(column: &str, position: usize, value_type: AxisValueType) -> Self {
        Self {
            key: format!("xAxis{}", positioned_name(column, position)),
            orientation: AxisOrientation::X,
            axis_id: None,
            data_key: Some(column.to_owned()),
            value_type,
            scale: None,
            domain: None,
            timestamp_ticks: false,
            tick_count: None,
            font_size: X_TICK_FONT_SIZE,
            angle: None,
            stroke: Some(GRAY_10),
            label: None,
        }
    }

    /// Dedicated Y axis for a `time` column, formatted with timestamp ticks.
    #[must_use]
    pub fn time_y(column: &str, position: usize, scale: Option<&str>) -> Self {
        let axis_id = dedicated_axis_id(column, position);
        Self {
            scale: Some(scale.unwrap_or(DEFAULT_TIME_SCALE).to_owned()),
            domain: Some(AxisDomain::Auto),
            timestamp_ticks: true,
            ..Self::y_axis(format!("yAxis{axis_id}"), axis_id, AxisValueType::Number)
        }
    }

    /// Dedicated category Y axis titled with the column name.
    #[must_use]
    pub fn category_y(column: &str, position: usize) -> Self {
        let axis_id = dedicated_axis_id(column, position);
        Self {
            domain: Some(AxisDomain::HighLow),
            angle: Some(ROTATED_ANGLE),
            stroke: Some(GRAY_10),
            label: Some(AxisLabel::rotated(column.to_owned())),
            ..Self::y_axis(format!("yAxis{axis_id}"), axis_id, AxisValueType::Category)
        }
    }

    /// The single Y axis shared by every `number` column.
    #[must_use]
    pub fn pooled_number_y(columns: &[&str], scale: Option<&str>) -> Self {
        Self {
            scale: Some(scale.unwrap_or(DEFAULT_POOLED_SCALE).to_owned()),
            angle: Some(ROTATED_ANGLE),
            stroke: Some(GRAY_10),
            label: Some(AxisLabel::rotated(columns.join(", "))),
            ..Self::y_axis(
                POOLED_NUMBER_AXIS_KEY.to_owned(),
                POOLED_NUMBER_AXIS_ID.to_owned(),
                AxisValueType::Number,
            )
        }
    }

    #[must_use]
    pub fn time_x(column: &str, position: usize) -> Self {
        Self {
            scale: Some(DEFAULT_TIME_SCALE.to_owned()),
            domain: Some(AxisDomain::Auto),
            timestamp_ticks: true,
            stroke: None,
            ..Self::x_axis(column, position, AxisValueType::Number)
        }
    }

    #[must_use]
    pub fn number_x(column: &str, position: usize) -> Self {
        Self {
            domain: Some(AxisDomain::Auto),
            ..Self::x_axis(column, position, AxisValueType::Number)
        }
    }

    #[must_use]
    pub fn category_x(column: &str, position: usize) -> Self {
        Self::x_axis(column, position, AxisValueType::Category)
    }

    #[must_use]
    pub fn is_pooled(&self) -> bool {
        self.axis_id.as_deref() == Some(POOLED_NUMBER_AXIS_ID)
    }
}

/// Axis id of a non-pooled Y column: the column name, `-`, then its position.
#[must_use]
pub fn dedicated_axis_id(column: &str, position: usize) -> String {
    positioned_name(column, position)
}

/// `{column}-{position}`. The position holds no `-`, so the last `-` splits
/// the name back into its parts and distinct pairs never collide.
pub(crate) fn positioned_name(column: &str, position: usize) -> String {
    format!("{column}{POSITION_SEPARATOR}{position}")
}
