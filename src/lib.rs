//! pipeline-dashboard: data plumbing behind a pipeline-run dashboard.
//!
//! Charts are assembled from CSV artifacts whose column kinds are inferred
//! after a single fetch. Forms are driven by a pipeline manifest, and a thin
//! client maps user and organization operations onto HTTP.

pub mod api;
pub mod client;
pub mod core;
pub mod error;
pub mod form;
pub mod render;
pub mod telemetry;

pub use api::{ChartKind, DashboardConfig, TimeSeriesChart, assemble_chart};
pub use error::{DashboardError, DashboardResult};
