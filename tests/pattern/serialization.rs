use pretty_assertions::assert_eq;
use taiko_pattern::pattern::prelude::*;

#[test]
fn tokens_as_json() {
    let tokens = compile("(kd)").unwrap();
    assert_eq!(
        serde_json::to_value(&tokens).unwrap(),
        serde_json::json!([
            { "label": "1k6d", "offset": [0, 1] },
            { "label": "6d2", "offset": [1, 3] },
        ])
    );
}

#[test]
fn config_from_json() {
    let config: CompileConfig =
        serde_json::from_str(r#"{ "empty_group": "Rest", "max_tokens": 16 }"#).unwrap();
    assert_eq!(
        config,
        default_config()
            .empty_group(EmptyGroupWorkaround::Rest)
            .max_tokens(16)
    );
}

#[test]
fn error_with_span_as_json() {
    let err = compile("kx").unwrap_err();
    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        serde_json::json!({ "content": { "InvalidCharacter": "x" }, "start": 1, "end": 2 })
    );
}
