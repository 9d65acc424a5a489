//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use messenger_core::log_op_start;
/// log_op_start!("handle_request");
/// log_op_start!("handle_request", name = "Alice");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = messenger_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = messenger_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use messenger_core::log_op_end;
/// log_op_end!("handle_request", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = messenger_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = messenger_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```ignore
/// # use messenger_core::{log_op_error, errors::RegistryError};
/// let err = RegistryError::EntryNotFound { name: "Alice".to_string() };
/// log_op_error!("read_entry", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::MsgError;
        let msg_err: MsgError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = messenger_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?msg_err.kind(),
            err.code = msg_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::MsgError;
        let msg_err: MsgError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = messenger_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?msg_err.kind(),
            err.code = msg_err.code(),
            $($field)*
        );
    }};
}
