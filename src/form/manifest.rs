use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DashboardResult;

/// Field name to field descriptor, in manifest order.
///
/// Descriptor shape belongs to the field-widget resolver.
pub type FormConfig = IndexMap<String, Value>;

/// A pipeline's `manifest.json`; only the `config` property drives the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub config: Option<FormConfig>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Manifest {
    pub fn from_json(input: &str) -> DashboardResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// The form configuration, if the manifest declares one.
    #[must_use]
    pub fn into_config(self) -> Option<FormConfig> {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_keys_keep_document_order() {
        let manifest =
            Manifest::from_json(r#"{"name":"p","config":{"zeta":{},"alpha":{"type":"text"}}}"#)
                .expect("manifest");
        let keys: Vec<&str> = manifest
            .config
            .as_ref()
            .expect("config")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["zeta", "alpha"]);
        assert!(manifest.extra.contains_key("name"));
    }

    #[test]
    fn manifest_without_config_has_none() {
        let manifest = Manifest::from_json(r#"{"name":"p"}"#).expect("manifest");
        assert_eq!(manifest.into_config(), None);
    }
}
