//! MentorErrorCode trait for the service boundary.

/// Stable error codes for callers that map failures onto their own transport.
/// Every error enum implements this.
pub trait MentorErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const GRAPH_ERROR: &str = "GRAPH_ERROR";
pub const GRAPH_CYCLE: &str = "GRAPH_CYCLE";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const REASONING_ERROR: &str = "REASONING_ERROR";
pub const REASONING_UNAVAILABLE: &str = "REASONING_UNAVAILABLE";
