#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{invoice, leaf_graph, Opaque, ADDRESSABLE, LINE_ITEM};
use refdiff_core::errors::RefDiffError;
use refdiff_core::logging_facility::test_capture::init_test_capture;
use refdiff_core::{
    collect_by_capability, flatten_lists_by_capability, get_diff, get_diff_any, log_op_end, log_op_error, log_op_start,
    resolve_from,
};
use refdiff_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, EVENT_STOP_EARLY, FIELD_ADDED_LEN, FIELD_CAPABILITY,
    FIELD_COMPONENT, FIELD_DURATION_MS, FIELD_EQUAL_LEN, FIELD_ERR_CODE, FIELD_EVENT,
    FIELD_FIELD_NAME, FIELD_MATCHED_LEN, FIELD_OP, FIELD_PATH_LEN, FIELD_REMOVED_LEN,
    FIELD_TYPE_NAME,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events = capture.events_for(op_name, EVENT_END);
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(
        end_events[0].fields.get(FIELD_DURATION_MS),
        Some(&"42".to_string())
    );
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = RefDiffError::FieldAccess {
        type_name: "Invoice".to_string(),
        field: "buyer".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events = capture.events_for(op_name, EVENT_END_ERROR);
    assert_eq!(error_events.len(), 1);
    assert_eq!(
        error_events[0].fields.get(FIELD_ERR_CODE),
        Some(&"ERR_ACCESS".to_string())
    );
}

#[test]
fn test_component_is_module_path() {
    let capture = init_test_capture();
    let op_name = "test_component_unique_4";

    log_op_start!(op_name);

    let event = capture
        .events_for(op_name, EVENT_START)
        .into_iter()
        .next()
        .expect("start event");
    assert_eq!(
        event.component.as_deref(),
        Some("logging_facility_tests"),
        "component should be the emitting module"
    );
    assert_eq!(
        event.fields.get(FIELD_COMPONENT).map(String::as_str),
        Some("logging_facility_tests")
    );
    assert_eq!(event.fields.get(FIELD_OP).map(String::as_str), Some(op_name));
    assert_eq!(
        event.fields.get(FIELD_EVENT).map(String::as_str),
        Some(EVENT_START)
    );
}

#[test]
fn test_get_diff_emits_start_and_end_with_counts() {
    let capture = init_test_capture();

    // Lengths chosen to be distinct from every other diff in this binary
    get_diff(
        vec![1, 2, 3, 4, 5, 6, 7, 100],
        vec![100, 200, 300, 400, 500, 600],
    );

    capture.assert_event_exists("get_diff", EVENT_START);
    let matching = capture.count_events(|e| {
        e.op.as_deref() == Some("get_diff")
            && e.event.as_deref() == Some(EVENT_END)
            && e.fields.get(FIELD_ADDED_LEN).map(String::as_str) == Some("5")
            && e.fields.get(FIELD_REMOVED_LEN).map(String::as_str) == Some("7")
            && e.fields.get(FIELD_EQUAL_LEN).map(String::as_str) == Some("1")
    });
    assert_eq!(matching, 1);
}

#[test]
fn test_get_diff_any_failure_emits_error_event() {
    let capture = init_test_capture();

    let err = get_diff_any(vec![Opaque(1)], Vec::new())
        .map(|_| ())
        .unwrap_err();
    assert!(matches!(err, RefDiffError::Serialization { .. }));

    let error_events = capture.events_for("get_diff_any", EVENT_END_ERROR);
    assert!(!error_events.is_empty());
    assert!(error_events
        .iter()
        .all(|e| e.fields.get(FIELD_ERR_CODE) == Some(&"ERR_SERIALIZATION".to_string())));
}

#[test]
fn test_resolve_null_root_emits_error_without_start() {
    let capture = init_test_capture();

    resolve_from(None, "a.b").map(|_| ()).unwrap_err();

    let error_events = capture.events_for("resolve_from", EVENT_END_ERROR);
    assert!(!error_events.is_empty());
    assert_eq!(
        error_events[0].fields.get(FIELD_ERR_CODE),
        Some(&"ERR_NULL_OBJECT".to_string())
    );
}

#[test]
fn test_resolve_stop_early_is_traced() {
    let capture = init_test_capture();
    let root = leaf_graph();

    resolve_from(Some(&root), "a.stop_here_unique_5").unwrap();

    let stops = capture.count_events(|e| {
        e.event.as_deref() == Some(EVENT_STOP_EARLY)
            && e.fields.get(FIELD_TYPE_NAME).map(String::as_str) == Some("Node")
            && e.fields.get(FIELD_FIELD_NAME).map(String::as_str) == Some("stop_here_unique_5")
            && e.fields.get("depth").map(String::as_str) == Some("1")
    });
    assert_eq!(stops, 1);
    capture.assert_event_exists("resolve_from", EVENT_END);
}

#[test]
fn test_flatten_reports_matched_len() {
    let capture = init_test_capture();
    let inv = invoice();

    let lines = flatten_lists_by_capability(&inv, &LINE_ITEM).unwrap();
    assert_eq!(lines.len(), 3);

    let matching = capture.count_events(|e| {
        e.op.as_deref() == Some("flatten_lists_by_capability")
            && e.event.as_deref() == Some(EVENT_END)
            && e.fields.get(FIELD_MATCHED_LEN).map(String::as_str) == Some("3")
    });
    assert_eq!(matching, 1);
}

#[test]
fn test_resolve_start_carries_seed_type_and_path_len() {
    let capture = init_test_capture();
    let root = leaf_graph();

    resolve_from(Some(&root), "a.b.c").unwrap();

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some("resolve_from")
            && e.event.as_deref() == Some(EVENT_START)
            && e.fields.get(FIELD_TYPE_NAME).map(String::as_str) == Some("Node")
            && e.fields.get(FIELD_PATH_LEN).map(String::as_str) == Some("3")
    });
    assert!(starts >= 1);
}

#[test]
fn test_collect_logs_capability_and_counts_none_entries() {
    let capture = init_test_capture();
    let inv = invoice();

    // buyer is set, ship_to is None; both are counted
    let found = collect_by_capability(&inv, &ADDRESSABLE).unwrap();
    assert_eq!(found.len(), 2);

    capture.assert_event_exists("collect_by_capability", EVENT_START);
    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some("collect_by_capability")
            && e.event.as_deref() == Some(EVENT_START)
            && e.fields.get(FIELD_CAPABILITY).map(String::as_str) == Some("addressable")
    });
    assert_eq!(starts, 1);
    let ends = capture.count_events(|e| {
        e.op.as_deref() == Some("collect_by_capability")
            && e.event.as_deref() == Some(EVENT_END)
            && e.fields.get(FIELD_MATCHED_LEN).map(String::as_str) == Some("2")
    });
    assert_eq!(ends, 1);
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_capture_assert_event_exists_fails() {
    let capture = init_test_capture();
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}
