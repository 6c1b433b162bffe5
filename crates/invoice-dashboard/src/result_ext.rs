//! Result extension traits for logging errors with context.
//!
//! `ResultExt::log` records a failure with its source location and passes the
//! result through untouched. `ResultExt::or_fail` does the same and swaps the
//! error for the fixed message shown to dashboard users, so driver details
//! never reach a response body.

use std::fmt::Display;
use tracing::error;

use crate::error::AppError;

/// Extension trait for logging errors with context.
pub trait ResultExt<T, E> {
    /// Log the error with context if this is an `Err` variant.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use invoice_dashboard::result_ext::ResultExt;
    ///
    /// let result: Result<i32, &str> = Err("something went wrong");
    /// let _ = result.log("processing request");
    /// ```
    fn log<S: ToString>(self, context: S) -> Result<T, E>;

    /// Log the error as a database error and replace it with
    /// `AppError::Operation(message)`.
    fn or_fail(self, message: &str) -> Result<T, AppError>;
}

impl<T, E: Display> ResultExt<T, E> for Result<T, E> {
    #[track_caller]
    fn log<S: ToString>(self, context: S) -> Result<T, E> {
        if let Err(ref e) = self {
            let caller_location = std::panic::Location::caller();
            error!(
                target: "invoice_dashboard",
                error = %e,
                file = %format!("{}:{}", caller_location.file(), caller_location.line()),
                context = %context.to_string(),
                "Operation failed"
            );
        }
        self
    }

    #[track_caller]
    fn or_fail(self, message: &str) -> Result<T, AppError> {
        let caller_location = std::panic::Location::caller();
        self.map_err(|e| {
            error!(
                target: "invoice_dashboard",
                error = %e,
                file = %format!("{}:{}", caller_location.file(), caller_location.line()),
                "Database Error"
            );
            AppError::Operation(message.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_ext_ok() {
        let result: Result<i32, &str> = Ok(42);
        let logged = result.log("test context");
        assert_eq!(logged.unwrap(), 42);
    }

    #[test]
    fn test_result_ext_err() {
        let result: Result<i32, &str> = Err("test error");
        let logged = result.log("test context");
        assert!(logged.is_err());
    }

    #[test]
    fn test_or_fail_replaces_message() {
        let result: Result<i32, &str> = Err("relation \"invoices\" does not exist");
        match result.or_fail("Failed to fetch card data.") {
            Err(AppError::Operation(msg)) => assert_eq!(msg, "Failed to fetch card data."),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_or_fail_passes_ok() {
        let result: Result<i32, &str> = Ok(7);
        assert_eq!(result.or_fail("unused").unwrap(), 7);
    }
}
