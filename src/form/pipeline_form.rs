use serde_json::Value;
use tracing::trace;

use crate::error::{DashboardError, DashboardResult};

use super::FormConfig;

pub const MISSING_MANIFEST_MESSAGE: &str = "The system could not detect a manifest.json file \
with a \"config\" property.\nPlease create the required file in the pipeline's repository or \
proceed with manual upload.";

pub const SUBMIT_LABEL: &str = "Submit form";

const KEYS_CSV_HEADER: &str = "field";

/// Produces an input widget for one configured field.
pub trait FieldWidgetResolver {
    type Widget;

    fn resolve(&self, field: &Value, field_name: &str) -> Self::Widget;
}

/// Rendered form: either one widget per field or the missing-manifest notice.
#[derive(Debug, Clone, PartialEq)]
pub enum FormView<W> {
    Fields {
        widgets: Vec<W>,
        submit_label: &'static str,
    },
    MissingManifest {
        message: &'static str,
    },
}

impl<W> FormView<W> {
    #[must_use]
    pub fn widgets(&self) -> &[W] {
        match self {
            Self::Fields { widgets, .. } => widgets,
            Self::MissingManifest { .. } => &[],
        }
    }
}

/// Manifest-driven pipeline input form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineForm {
    config: Option<FormConfig>,
    keys: Vec<String>,
}

impl PipelineForm {
    #[must_use]
    pub fn new(config: Option<FormConfig>) -> Self {
        let mut form = Self::default();
        form.set_config(config);
        form
    }

    /// Swaps the configuration and recomputes the field order.
    pub fn set_config(&mut self, config: Option<FormConfig>) {
        self.keys = config
            .as_ref()
            .map(|config| config.keys().cloned().collect())
            .unwrap_or_default();
        trace!(fields = self.keys.len(), "form configuration updated");
        self.config = config;
    }

    #[must_use]
    pub fn config(&self) -> Option<&FormConfig> {
        self.config.as_ref()
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn render<R: FieldWidgetResolver>(&self, resolver: &R) -> FormView<R::Widget> {
        let Some(config) = self.config.as_ref().filter(|_| !self.keys.is_empty()) else {
            return FormView::MissingManifest {
                message: MISSING_MANIFEST_MESSAGE,
            };
        };
        let widgets = self
            .keys
            .iter()
            .filter_map(|name| config.get(name).map(|field| resolver.resolve(field, name)))
            .collect();
        FormView::Fields {
            widgets,
            submit_label: SUBMIT_LABEL,
        }
    }

    /// Field names as CSV, one per row under a `field` header.
    pub fn keys_csv(&self) -> DashboardResult<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([KEYS_CSV_HEADER])?;
        for key in &self.keys {
            writer.write_record([key.as_str()])?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| DashboardError::InvalidData(format!("failed to flush csv export: {e}")))?;
        String::from_utf8(bytes)
            .map_err(|e| DashboardError::InvalidData(format!("csv export is not utf-8: {e}")))
    }
}
