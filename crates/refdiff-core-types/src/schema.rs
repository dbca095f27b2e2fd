//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Diff partition sizes
pub const FIELD_ADDED_LEN: &str = "added_len";
pub const FIELD_REMOVED_LEN: &str = "removed_len";
pub const FIELD_EQUAL_LEN: &str = "equal_len";

// Object graph context
pub const FIELD_TYPE_NAME: &str = "type_name";
pub const FIELD_FIELD_NAME: &str = "field";
pub const FIELD_PATH_LEN: &str = "path_len";
pub const FIELD_CAPABILITY: &str = "capability";
pub const FIELD_MATCHED_LEN: &str = "matched_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_STOP_EARLY: &str = "stop_early";
