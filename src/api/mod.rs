//! Chart assembly: axis/series descriptors, the fetch-driven chart component
//! and dashboard configuration.

mod axis_descriptor;
mod chart_assembler;
mod chart_description;
mod chart_kind;
mod dashboard_config;
mod series_descriptor;
mod time_series_chart;

pub use axis_descriptor::{
    AxisDescriptor, AxisDomain, AxisLabel, AxisOrientation, AxisValueType, LabelPosition,
    POOLED_NUMBER_AXIS_ID, dedicated_axis_id,
};
pub use chart_assembler::{ChartLayout, assemble_chart};
pub use chart_description::{
    ChartDescription, ChartMargin, ChartStatus, DEFAULT_CHART_HEIGHT, GridDescriptor,
    TooltipDescriptor,
};
pub use chart_kind::ChartKind;
pub use dashboard_config::{DashboardConfig, is_http_url};
pub use series_descriptor::{SeriesDescriptor, SeriesKind};
pub use time_series_chart::{
    ChartData, DatasetSink, FetchRequest, FetchState, RequestId, TimeSeriesChart,
};
