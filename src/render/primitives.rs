use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> DashboardResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(DashboardError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Axis text and tick color.
pub const GRAY_10: Color = Color::rgb(0.455, 0.455, 0.455);
/// Axis title and tooltip label color.
pub const GRAY: Color = Color::rgb(0.2, 0.2, 0.2);
/// Horizontal grid line color.
pub const GRID_STROKE: Color = Color::rgba(0.439, 0.439, 0.439, 0.2);

const SERIES_PALETTE: [Color; 6] = [
    Color::rgb(0.153, 0.463, 0.871),
    Color::rgb(0.925, 0.467, 0.184),
    Color::rgb(0.278, 0.647, 0.408),
    Color::rgb(0.757, 0.251, 0.298),
    Color::rgb(0.518, 0.361, 0.773),
    Color::rgb(0.149, 0.651, 0.663),
];

const SERIES_FILL_ALPHA: f64 = 0.3;

/// Fill color for the series at `position` among the Y columns, wrapping past the palette.
#[must_use]
pub fn series_fill(position: usize) -> Color {
    series_stroke(position).with_alpha(SERIES_FILL_ALPHA)
}

/// Stroke color for the series at `position` among the Y columns, wrapping past the palette.
#[must_use]
pub fn series_stroke(position: usize) -> Color {
    SERIES_PALETTE[position % SERIES_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_wraps_and_fills_are_translucent() {
        assert_eq!(series_stroke(0), series_stroke(SERIES_PALETTE.len()));
        assert_eq!(series_fill(1).alpha, SERIES_FILL_ALPHA);
        assert!(series_fill(7).validate().is_ok());
    }

    #[test]
    fn out_of_range_channel_is_rejected() {
        assert!(Color::rgba(1.2, 0.0, 0.0, 1.0).validate().is_err());
    }
}
