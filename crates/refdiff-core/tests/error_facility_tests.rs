#![allow(clippy::unwrap_used, clippy::expect_used)]

use refdiff_core::errors::{RdError, RdErrorKind, RefDiffError};

#[test]
fn test_null_object_verifiable_by_kind() {
    let err = RefDiffError::NullObject {
        op: "resolve_from".to_string(),
    };

    let rd_err: RdError = err.into();

    assert_eq!(rd_err.kind(), RdErrorKind::NullObject);
    assert_eq!(rd_err.code(), "ERR_NULL_OBJECT");
    assert_eq!(rd_err.op(), Some("resolve_from"));
}

#[test]
fn test_serialization_keeps_message() {
    let err = RefDiffError::Serialization {
        message: "key must be a string".to_string(),
    };

    let rd_err: RdError = err.into();

    assert_eq!(rd_err.kind(), RdErrorKind::Serialization);
    assert_eq!(rd_err.code(), "ERR_SERIALIZATION");
    assert_eq!(rd_err.message(), "key must be a string");
    assert_eq!(rd_err.op(), None);
}

#[test]
fn test_access_errors_carry_type_and_field() {
    let access: RdError = RefDiffError::FieldAccess {
        type_name: "Invoice".to_string(),
        field: "buyer".to_string(),
    }
    .into();
    let shape: RdError = RefDiffError::ShapeMismatch {
        type_name: "Invoice".to_string(),
        field: "lines".to_string(),
    }
    .into();

    for (rd_err, field) in [(&access, "buyer"), (&shape, "lines")] {
        assert_eq!(rd_err.kind(), RdErrorKind::Access);
        assert_eq!(rd_err.type_name(), Some("Invoice"));
        assert_eq!(rd_err.field(), Some(field));
    }
    assert_ne!(access.message(), shape.message());
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (RdErrorKind::NullObject, "ERR_NULL_OBJECT"),
        (RdErrorKind::Serialization, "ERR_SERIALIZATION"),
        (RdErrorKind::Access, "ERR_ACCESS"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_serde_json_error_converts_to_serialization() {
    let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
    let err: RefDiffError = json_err.into();
    assert!(matches!(err, RefDiffError::Serialization { .. }));
}

#[test]
fn test_display_messages() {
    let err = RefDiffError::NullObject {
        op: "resolve_path".to_string(),
    };
    assert_eq!(err.to_string(), "Null object passed to resolve_path");

    let rd_err: RdError = err.into();
    assert_eq!(
        rd_err.to_string(),
        "[ERR_NULL_OBJECT] in operation 'resolve_path': Root object is absent"
    );
}

#[test]
fn test_codes_are_unique() {
    let codes = [
        RdErrorKind::NullObject.code(),
        RdErrorKind::Serialization.code(),
        RdErrorKind::Access.code(),
    ];
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
