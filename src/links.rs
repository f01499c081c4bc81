//! External link indicators.
//!
//! Links opening a new browsing context get a trailing arrow. A link that
//! already holds an indicator is skipped, so the pass can run any number of
//! times.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use crate::consts::{EXTERNAL_ICON_CLASS, EXTERNAL_ICON_TEXT};
use crate::error::DomError;

/// The marker appended to each external link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    /// Class used both to style the marker and to detect it on later passes.
    pub class: String,
    pub text: String,
}

impl Default for Indicator {
    fn default() -> Self {
        Self { class: EXTERNAL_ICON_CLASS.to_owned(), text: EXTERNAL_ICON_TEXT.to_owned() }
    }
}

/// A link element that can carry an indicator.
pub trait Annotatable {
    /// Whether a descendant with `class` already exists.
    fn has_indicator(&self, class: &str) -> Result<bool, DomError>;

    /// Append `indicator` as the last child.
    fn append_indicator(&self, indicator: &Indicator) -> Result<(), DomError>;
}

/// Annotate every link lacking an indicator. Returns how many were added.
pub fn annotate_external_links<L: Annotatable>(links: &[L], indicator: &Indicator) -> Result<usize, DomError> {
    let mut added = 0;
    for link in links {
        if link.has_indicator(&indicator.class)? {
            continue;
        }
        link.append_indicator(indicator)?;
        added += 1;
    }
    Ok(added)
}
