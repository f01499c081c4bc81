//! Error types.
//!
//! DESIGN
//! ======
//! Nothing here is fatal to the page. Binding code logs these and carries on
//! with the remaining behaviors, so the variants only need enough context to
//! make a console warning useful.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A DOM or browser API call failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// A browser global (`window`, `document`, ...) is not available.
    #[error("browser global unavailable: {0}")]
    Unavailable(&'static str),
    /// A browser API threw. `op` names the call, `message` is the stringified exception.
    #[error("{op} failed: {message}")]
    Js { op: &'static str, message: String },
}

impl DomError {
    #[must_use]
    pub fn js(op: &'static str, message: impl Into<String>) -> Self {
        Self::Js { op, message: message.into() }
    }
}

/// The page-supplied configuration could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config field `{field}` must not be empty")]
    Empty { field: &'static str },
    #[error("config field `{field}` is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("unknown log level: {0}")]
    LogLevel(String),
}
