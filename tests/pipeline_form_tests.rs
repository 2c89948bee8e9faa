use pipeline_dashboard::form::{
    FieldWidgetResolver, FormConfig, FormView, MISSING_MANIFEST_MESSAGE, Manifest, PipelineForm,
    SUBMIT_LABEL,
};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq)]
struct Widget {
    name: String,
    input_type: String,
}

struct TypeResolver;

impl FieldWidgetResolver for TypeResolver {
    type Widget = Widget;

    fn resolve(&self, field: &Value, field_name: &str) -> Widget {
        Widget {
            name: field_name.to_owned(),
            input_type: field
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("text")
                .to_owned(),
        }
    }
}

fn config(value: Value) -> FormConfig {
    serde_json::from_value(value).expect("form config")
}

#[test]
fn empty_config_renders_fallback_message() {
    let form = PipelineForm::new(Some(FormConfig::new()));
    let view = form.render(&TypeResolver);

    assert_eq!(
        view,
        FormView::MissingManifest {
            message: MISSING_MANIFEST_MESSAGE
        }
    );
    assert!(view.widgets().is_empty());
}

#[test]
fn absent_config_renders_fallback_message() {
    let form = PipelineForm::new(None);
    assert!(matches!(
        form.render(&TypeResolver),
        FormView::MissingManifest { .. }
    ));
    assert!(MISSING_MANIFEST_MESSAGE.contains("manifest.json"));
}

#[test]
fn renders_one_widget_per_key_in_order() {
    let form = PipelineForm::new(Some(config(json!({
        "a": { "type": "number" },
        "b": {}
    }))));

    match form.render(&TypeResolver) {
        FormView::Fields {
            widgets,
            submit_label,
        } => {
            assert_eq!(submit_label, SUBMIT_LABEL);
            assert_eq!(
                widgets,
                [
                    Widget {
                        name: "a".to_owned(),
                        input_type: "number".to_owned()
                    },
                    Widget {
                        name: "b".to_owned(),
                        input_type: "text".to_owned()
                    },
                ]
            );
        }
        other => panic!("expected fields, got {other:?}"),
    }
}

#[test]
fn set_config_recomputes_keys() {
    let mut form = PipelineForm::new(Some(config(json!({ "a": {}, "b": {} }))));
    assert_eq!(form.keys(), ["a", "b"]);

    form.set_config(Some(config(json!({ "c": {} }))));
    assert_eq!(form.keys(), ["c"]);
    assert_eq!(form.render(&TypeResolver).widgets().len(), 1);

    form.set_config(None);
    assert!(form.keys().is_empty());
}

#[test]
fn keys_export_as_single_column_csv() {
    let form = PipelineForm::new(Some(config(json!({ "threshold": {}, "mode, fast": {} }))));
    let csv = form.keys_csv().expect("csv export");
    assert_eq!(csv, "field\nthreshold\n\"mode, fast\"\n");
}

#[test]
fn manifest_config_drives_the_form() {
    let manifest = Manifest::from_json(
        r#"{ "name": "ocr", "config": { "dpi": { "type": "number" }, "lang": {} } }"#,
    )
    .expect("manifest");
    let form = PipelineForm::new(manifest.into_config());
    let names: Vec<String> = form
        .render(&TypeResolver)
        .widgets()
        .iter()
        .map(|w| w.name.clone())
        .collect();
    assert_eq!(names, ["dpi", "lang"]);
}
