//! Canonical logging macros
//!
//! Every store and import operation logs a start event and exactly one of
//! end or end_error, all carrying the same `component`/`op` fields.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use maavarim_core::log_op_start;
/// log_op_start!("add_service");
/// log_op_start!("add_service", domain = "legal");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = maavarim_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = maavarim_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use maavarim_core::log_op_end;
/// log_op_end!("add_service", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = maavarim_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = maavarim_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error expression is converted into `ExError`, so both `ExError` and
/// `MaavarimError` values are accepted.
///
/// # Example
///
/// ```
/// # use maavarim_core::{log_op_error, errors::MaavarimError};
/// let err = MaavarimError::EmptyField { field: "name" };
/// log_op_error!("add_service", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = ::std::convert::Into::into($err);
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = maavarim_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = ::std::convert::Into::into($err);
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = maavarim_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}
