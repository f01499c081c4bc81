//! In-page anchor navigation.
//!
//! Clicks on `#fragment` links are taken over: the page scrolls smoothly to
//! the target, the drawer closes, and the hash is pushed onto history without
//! a reload. Links whose target does not exist are left to the browser.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::HASH_SCROLL_DELAY_MS;

/// Element id referenced by an in-page href.
///
/// `"#results"` gives `"results"`. The bare placeholder `"#"`, an empty href,
/// and anything not starting with `#` give `None`.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// What to do for an intercepted anchor click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationPlan {
    /// Element to scroll to.
    pub target_id: String,
    /// Exact href to push onto history.
    pub hash: String,
    /// Whether the mobile drawer should be closed first.
    pub close_drawer: bool,
}

/// Scroll scheduled after page load for a hash already in the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferredScroll {
    pub target_id: String,
    pub delay_ms: u32,
}

/// Plans anchor navigation. Stateless apart from the load-time delay.
#[derive(Debug, Clone, Copy)]
pub struct ScrollNavigator {
    hash_delay_ms: u32,
}

impl Default for ScrollNavigator {
    fn default() -> Self {
        Self::new(HASH_SCROLL_DELAY_MS)
    }
}

impl ScrollNavigator {
    #[must_use]
    pub fn new(hash_delay_ms: u32) -> Self {
        Self { hash_delay_ms }
    }

    /// Plan a click on an anchor with `href`.
    ///
    /// `None` means the click is not intercepted and default navigation runs.
    pub fn plan_click(&self, href: &str, target_exists: impl Fn(&str) -> bool) -> Option<NavigationPlan> {
        let id = fragment_target(href)?;
        if !target_exists(id) {
            log::debug!("scroll: no target for {href}, leaving click to the browser");
            return None;
        }
        Some(NavigationPlan { target_id: id.to_owned(), hash: href.to_owned(), close_drawer: true })
    }

    /// Plan the load-time scroll for the current `location.hash`.
    pub fn plan_initial(&self, hash: &str, target_exists: impl Fn(&str) -> bool) -> Option<DeferredScroll> {
        let id = fragment_target(hash)?;
        if !target_exists(id) {
            return None;
        }
        Some(DeferredScroll { target_id: id.to_owned(), delay_ms: self.hash_delay_ms })
    }
}
