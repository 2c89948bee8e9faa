//! Manifest-driven pipeline input form.

mod manifest;
mod pipeline_form;

pub use manifest::{FormConfig, Manifest};
pub use pipeline_form::{
    FieldWidgetResolver, FormView, MISSING_MANIFEST_MESSAGE, PipelineForm, SUBMIT_LABEL,
};
