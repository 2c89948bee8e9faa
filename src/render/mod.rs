mod null_renderer;
mod primitives;

pub use null_renderer::NullRenderer;
pub use primitives::{Color, GRAY, GRAY_10, GRID_STROKE, series_fill, series_stroke};

use crate::api::ChartDescription;
use crate::error::DashboardResult;

/// Contract implemented by any chart painting backend.
///
/// Backends receive a fully assembled `ChartDescription`, so painting code
/// stays isolated from column inference and fetch state.
pub trait ChartRenderer {
    fn render(&mut self, description: &ChartDescription<'_>) -> DashboardResult<()>;
}
