use crate::api::ChartDescription;
use crate::error::DashboardResult;
use crate::render::ChartRenderer;

/// No-op renderer used by tests and headless usage.
///
/// It still validates the description so tests catch dangling axis ids
/// before a real backend paints anything.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_axis_count: usize,
    pub last_series_count: usize,
    pub last_row_count: usize,
    pub render_count: usize,
}

impl ChartRenderer for NullRenderer {
    fn render(&mut self, description: &ChartDescription<'_>) -> DashboardResult<()> {
        description.validate()?;
        self.last_axis_count = description.axes.len();
        self.last_series_count = description.series.len();
        self.last_row_count = description.data.map_or(0, |data| data.len());
        self.render_count += 1;
        Ok(())
    }
}
