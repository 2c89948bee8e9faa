use std::collections::HashSet;

use serde::Serialize;

use crate::core::{AxisValueFormatter, CellValue, Dataset};
use crate::error::{DashboardError, DashboardResult};
use crate::render::{Color, GRAY, GRID_STROKE};

use super::{AxisDescriptor, AxisOrientation, ChartLayout, SeriesDescriptor};

pub const DEFAULT_CHART_HEIGHT: u32 = 264;

/// Where the chart is in its fetch lifecycle, as shown to the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ChartStatus {
    Loading,
    Ready,
    /// The artifact could not be fetched or parsed; the host may offer a retry.
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for ChartMargin {
    fn default() -> Self {
        Self {
            top: 0.0,
            right: 32.0,
            bottom: 16.0,
            left: 32.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridDescriptor {
    pub stroke: Color,
    pub vertical: bool,
}

impl Default for GridDescriptor {
    fn default() -> Self {
        Self {
            stroke: GRID_STROKE,
            vertical: false,
        }
    }
}

/// Tooltip settings; label and values go through the same formatter as axis ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TooltipDescriptor {
    pub formatter: AxisValueFormatter,
    pub font_size: u32,
    pub label_color: Color,
    pub cursor_color: Color,
    pub cursor_dash: [u32; 2],
}

impl TooltipDescriptor {
    #[must_use]
    pub fn new(formatter: AxisValueFormatter) -> Self {
        Self {
            formatter,
            font_size: 12,
            label_color: GRAY,
            cursor_color: GRAY,
            cursor_dash: [3, 3],
        }
    }

    #[must_use]
    pub fn format_label(&self, value: &CellValue) -> String {
        self.formatter.format_cell(value)
    }

    #[must_use]
    pub fn format_value(&self, value: &CellValue) -> String {
        self.formatter.format_cell(value)
    }
}

/// Everything a composed chart renderer needs for one paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDescription<'a> {
    pub status: ChartStatus,
    pub height: u32,
    pub margin: ChartMargin,
    pub grid: GridDescriptor,
    pub axes: Vec<AxisDescriptor>,
    pub series: Vec<SeriesDescriptor>,
    pub tooltip: TooltipDescriptor,
    pub data: Option<&'a Dataset>,
}

impl<'a> ChartDescription<'a> {
    #[must_use]
    pub fn new(
        status: ChartStatus,
        height: u32,
        layout: ChartLayout,
        formatter: AxisValueFormatter,
        data: Option<&'a Dataset>,
    ) -> Self {
        Self {
            status,
            height,
            margin: ChartMargin::default(),
            grid: GridDescriptor::default(),
            axes: layout.axes,
            series: layout.series,
            tooltip: TooltipDescriptor::new(formatter),
            data,
        }
    }

    /// Checks the structural contract a renderer relies on.
    ///
    /// Axis keys are unique and each series binds to an emitted Y axis id.
    pub fn validate(&self) -> DashboardResult<()> {
        if self.height == 0 {
            return Err(DashboardError::InvalidData(
                "chart height must be > 0".to_owned(),
            ));
        }

        let mut keys = HashSet::with_capacity(self.axes.len() + self.series.len());
        for key in self
            .axes
            .iter()
            .map(|axis| axis.key.as_str())
            .chain(self.series.iter().map(|series| series.key.as_str()))
        {
            if !keys.insert(key) {
                return Err(DashboardError::InvalidData(format!(
                    "duplicate chart widget key `{key}`"
                )));
            }
        }

        let y_axis_ids: HashSet<&str> = self
            .axes
            .iter()
            .filter(|axis| axis.orientation == AxisOrientation::Y)
            .filter_map(|axis| axis.axis_id.as_deref())
            .collect();
        for series in &self.series {
            if !y_axis_ids.contains(series.axis_id.as_str()) {
                return Err(DashboardError::InvalidData(format!(
                    "series `{}` references unknown y axis `{}`",
                    series.key, series.axis_id
                )));
            }
            series.fill.validate()?;
            series.stroke.validate()?;
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> DashboardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
