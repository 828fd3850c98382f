//! Tests for the placeholder substitution engine.

use std::fs;
use tempfile::TempDir;
use tsbridge_template::{
    TemplateError, TemplateSpec, TemplateValue, TransformArgs, transform_code_to_template,
};

fn transform(src: &str, spec: &TemplateSpec) -> Result<String, TemplateError> {
    let temp = TempDir::new().unwrap();
    let src_file = temp.path().join("src.js");
    let target_file = temp.path().join("out.js");
    fs::write(&src_file, src).unwrap();
    transform_code_to_template(TransformArgs {
        src_file: &src_file,
        target_file: &target_file,
        template_spec: spec,
    })?;
    Ok(fs::read_to_string(&target_file).unwrap())
}

#[test]
fn substitutes_every_occurrence() {
    let spec = TemplateSpec::new().bind("__PATH", TemplateValue::StringLiteral("/a/b.js".into()));
    let out = transform("require(__PATH);\nmodule.exports = require(__PATH);", &spec).unwrap();
    assert_eq!(
        out,
        "require(\"/a/b.js\");\nmodule.exports = require(\"/a/b.js\");"
    );
}

#[test]
fn leaves_longer_identifiers_alone() {
    let spec = TemplateSpec::new().bind("__PATH", TemplateValue::Raw("x".into()));
    let out = transform("__PATH; __PATH_EXTRA;", &spec).unwrap();
    assert_eq!(out, "x; __PATH_EXTRA;");
}

#[test]
fn escapes_string_literal_values() {
    let spec = TemplateSpec::new().bind(
        "__PATH",
        TemplateValue::StringLiteral(r#"C:\conf\"gatsby".js"#.into()),
    );
    let out = transform("const p = __PATH;", &spec).unwrap();
    assert_eq!(out, r#"const p = "C:\\conf\\\"gatsby\".js";"#);
}

#[test]
fn replacement_text_is_not_expanded() {
    let spec = TemplateSpec::new().bind("__V", TemplateValue::Raw("$1".into()));
    let out = transform("__V", &spec).unwrap();
    assert_eq!(out, "$1");
}

#[test]
fn later_binding_for_same_token_wins() {
    let spec = TemplateSpec::new()
        .bind("__V", TemplateValue::Raw("first".into()))
        .bind("__V", TemplateValue::Raw("second".into()));
    let out = transform("__V", &spec).unwrap();
    assert_eq!(out, "second");
}

#[test]
fn unbound_source_passes_through_untouched() {
    let spec = TemplateSpec::new();
    let out = transform("module.exports = {}", &spec).unwrap();
    assert_eq!(out, "module.exports = {}");
}

#[test]
fn missing_source_is_a_read_error() {
    let temp = TempDir::new().unwrap();
    let spec = TemplateSpec::new();
    let err = transform_code_to_template(TransformArgs {
        src_file: &temp.path().join("missing.js"),
        target_file: &temp.path().join("out.js"),
        template_spec: &spec,
    })
    .unwrap_err();
    assert!(matches!(err, TemplateError::ReadSource { .. }));
}

#[test]
fn rejects_non_identifier_tokens() {
    let spec = TemplateSpec::new().bind("not a token", TemplateValue::Raw("x".into()));
    let err = transform("whatever", &spec).unwrap_err();
    assert!(matches!(err, TemplateError::InvalidToken(_)));
}
