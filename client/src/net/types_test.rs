use super::*;

#[test]
fn decodes_numeric_label() {
    let resp: ClassifyResponse = serde_json::from_str(r#"{"ans": 3}"#).expect("valid body");
    assert_eq!(resp.label(), "3");
}

#[test]
fn decodes_string_label() {
    let resp: ClassifyResponse = serde_json::from_str(r#"{"ans": "7"}"#).expect("valid body");
    assert_eq!(resp.label(), "7");
}

#[test]
fn ignores_extra_fields() {
    let resp: ClassifyResponse =
        serde_json::from_str(r#"{"ans": 0, "confidence": 0.93}"#).expect("valid body");
    assert_eq!(resp.label(), "0");
}

#[test]
fn missing_label_is_a_decode_error() {
    let result = serde_json::from_str::<ClassifyResponse>(r#"{"answer": 3}"#);
    assert!(result.is_err());
}
