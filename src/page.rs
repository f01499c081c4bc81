//! Bootstrap timing.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// When the initializers should run relative to document parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitTiming {
    /// The document is still parsing; wait for `DOMContentLoaded`.
    Deferred,
    /// The document is already parsed (`interactive` or `complete`).
    Immediate,
}

impl InitTiming {
    /// Map `document.readyState` to a timing.
    #[must_use]
    pub fn from_ready_state(ready_state: &str) -> Self {
        if ready_state == "loading" { Self::Deferred } else { Self::Immediate }
    }
}
