mod common;

use json_dot_query::{self as jdq, Expected, QueryError};

#[test]
fn test_wildcard_on_mapping() {
    let data = common::cats();
    let err = jdq::evaluate("meta.[].response", &data, None).unwrap_err();
    assert!(
        matches!(
            err,
            QueryError::TypeMismatch { position: 1, expected: Expected::Sequence, found: "mapping" }
        ),
        "unexpected error: {err}"
    );
}

#[test]
fn test_wildcard_on_scalar_deep_inside() {
    let data = common::cats();
    let err = jdq::evaluate("data.[].attributes.whiskers.[]", &data, None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot index over non-sequence (number) at segment 4"
    );
}

#[test]
fn test_field_through_missing_key() {
    let data = common::cats();
    let err = jdq::evaluate("data.[].owner.name", &data, None).unwrap_err();
    assert!(matches!(err, QueryError::NilData { position: 3 }));
    assert_eq!(err.to_string(), "nil data at segment 3");
}

#[test]
fn test_field_on_string_leaf() {
    let data = common::cats();
    let err = jdq::evaluate("data.[].name.first", &data, None).unwrap_err();
    assert!(matches!(
        err,
        QueryError::TypeMismatch { expected: Expected::Mapping, found: "string", .. }
    ));
    assert_eq!(
        err.to_string(),
        "cannot look up field in non-mapping (string) at segment 3"
    );
}

#[test]
fn test_field_on_null_root() {
    let err = jdq::evaluate("anything", &serde_json::Value::Null, None).unwrap_err();
    assert!(matches!(err, QueryError::NilData { position: 0 }));
}

#[test]
fn test_invalid_document() {
    let err = jdq::from_json("{\"cats\": ", "cats", &Default::default()).unwrap_err();
    assert!(matches!(err, QueryError::Json(_)));
}
