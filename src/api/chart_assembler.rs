use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{AxisConfig, ColumnKind, ColumnMetadata};

use super::axis_descriptor::dedicated_axis_id;
use super::{AxisDescriptor, ChartKind, POOLED_NUMBER_AXIS_ID, SeriesDescriptor};

/// Axis and series widgets for one render pass, in paint order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub axes: Vec<AxisDescriptor>,
    pub series: Vec<SeriesDescriptor>,
}

impl ChartLayout {
    pub fn y_axes(&self) -> impl Iterator<Item = &AxisDescriptor> {
        self.axes
            .iter()
            .filter(|axis| axis.orientation == super::AxisOrientation::Y)
    }

    pub fn x_axes(&self) -> impl Iterator<Item = &AxisDescriptor> {
        self.axes
            .iter()
            .filter(|axis| axis.orientation == super::AxisOrientation::X)
    }
}

/// Builds the axis and series descriptors for `axis_config` over inferred columns.
///
/// Y columns missing from `metadata` are skipped outright. `number` columns
/// share one pooled axis emitted after every other Y axis; `time` and
/// `category` columns get a dedicated axis keyed by column and position.
/// X axes follow, one per known column, and are never pooled.
#[must_use]
pub fn assemble_chart(
    kind: &ChartKind,
    axis_config: &AxisConfig,
    metadata: &ColumnMetadata,
) -> ChartLayout {
    let mut layout = ChartLayout::default();
    let mut pooled: Vec<&str> = Vec::new();
    let series_kind = kind.series_kind();

    for (position, column) in axis_config.y_axis_keys.iter().enumerate() {
        let Some(meta) = metadata.get(column) else {
            trace!(column = %column, "y column not inferred, skipping");
            continue;
        };

        let axis_id = match &meta.kind {
            ColumnKind::Number => {
                pooled.push(column);
                POOLED_NUMBER_AXIS_ID.to_owned()
            }
            ColumnKind::Time => {
                layout.axes.push(AxisDescriptor::time_y(
                    column,
                    position,
                    meta.scale.as_deref(),
                ));
                dedicated_axis_id(column, position)
            }
            ColumnKind::Category | ColumnKind::Unrecognized(_) => {
                layout.axes.push(AxisDescriptor::category_y(column, position));
                dedicated_axis_id(column, position)
            }
        };

        if let Some(series_kind) = series_kind {
            layout
                .series
                .push(SeriesDescriptor::new(series_kind, column, position, axis_id));
        }
    }

    if let Some(first) = pooled.first() {
        let scale = metadata.get(first).and_then(|meta| meta.scale.as_deref());
        layout
            .axes
            .push(AxisDescriptor::pooled_number_y(&pooled, scale));
    }

    for (position, column) in axis_config.x_axis_keys.iter().enumerate() {
        let Some(meta) = metadata.get(column) else {
            trace!(column = %column, "x column not inferred, skipping");
            continue;
        };
        layout.axes.push(match &meta.kind {
            ColumnKind::Time => AxisDescriptor::time_x(column, position),
            ColumnKind::Number => AxisDescriptor::number_x(column, position),
            ColumnKind::Category | ColumnKind::Unrecognized(_) => {
                AxisDescriptor::category_x(column, position)
            }
        });
    }

    trace!(
        chart_kind = %kind,
        axes = layout.axes.len(),
        series = layout.series.len(),
        pooled = pooled.len(),
        "assembled chart layout"
    );
    layout
}
