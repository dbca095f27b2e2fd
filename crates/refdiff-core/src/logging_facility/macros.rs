//! Canonical logging macros
//!
//! Operation events are emitted at DEBUG: these are library calls that may
//! sit inside hot loops of the host application.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use refdiff_core::log_op_start;
/// log_op_start!("get_diff");
/// log_op_start!("resolve_from", path_len = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        $crate::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        $crate::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use refdiff_core::log_op_end;
/// log_op_end!("get_diff", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        $crate::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        $crate::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into [`RdError`](crate::errors::RdError).
///
/// # Example
///
/// ```
/// # use refdiff_core::{log_op_error, errors::RefDiffError};
/// let err = RefDiffError::NullObject { op: "resolve_from".to_string() };
/// log_op_error!("resolve_from", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let rd_err: $crate::errors::RdError = $err.into();
        $crate::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?rd_err.kind(),
            err.code = rd_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let rd_err: $crate::errors::RdError = $err.into();
        $crate::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?rd_err.kind(),
            err.code = rd_err.code(),
            $($field)*
        );
    }};
}
