//! Table-of-contents highlighting.
//!
//! The browser reports sections entering or leaving a thin band near the top
//! of the viewport. The tracker turns those reports into at most one active
//! TOC link, identified by the section id the link points at.
//!
//! When several sections are in the band in the same batch, the one nearest
//! the top of the page wins. Exact ties fall back to batch order.

#[cfg(test)]
#[path = "toc_test.rs"]
mod toc_test;

use std::collections::HashSet;

/// Vertical extent of an element in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f64,
    pub bottom: f64,
}

impl Span {
    #[must_use]
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether `self` sticks out above or below `outer`.
    #[must_use]
    pub fn escapes(&self, outer: &Span) -> bool {
        self.top < outer.top || self.bottom > outer.bottom
    }
}

/// One intersection report for a section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionHit {
    pub id: String,
    pub is_intersecting: bool,
    /// Top of the section's bounding box at report time.
    pub top: f64,
}

/// Result of a batch that moved the active marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveChange {
    /// Link to un-mark, if one was active.
    pub previous: Option<String>,
    /// Link to mark.
    pub current: String,
}

/// Tracks which TOC link is active.
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    linked: HashSet<String>,
    active: Option<String>,
}

impl SectionTracker {
    /// Build from the section ids that TOC links point at.
    #[must_use]
    pub fn new<I, S>(link_targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { linked: link_targets.into_iter().map(Into::into).collect(), active: None }
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn has_link(&self, id: &str) -> bool {
        self.linked.contains(id)
    }

    /// Process one observer batch.
    ///
    /// Returns `None` when no intersecting section has a link, or when the
    /// winner is already active.
    pub fn on_intersections(&mut self, hits: &[SectionHit]) -> Option<ActiveChange> {
        let winner = hits
            .iter()
            .filter(|hit| hit.is_intersecting && self.linked.contains(&hit.id))
            .fold(None::<&SectionHit>, |best, hit| match best {
                Some(b) if b.top <= hit.top => Some(b),
                _ => Some(hit),
            })?;

        if self.active.as_deref() == Some(winner.id.as_str()) {
            return None;
        }

        let previous = self.active.replace(winner.id.clone());
        log::debug!("toc: active {previous:?} -> {}", winner.id);
        Some(ActiveChange { previous, current: winner.id.clone() })
    }
}

/// Whether the newly active link must be scrolled into the TOC panel.
///
/// Only applies in the wide (sidebar) layout; the drawer layout scrolls
/// with the page.
#[must_use]
pub fn needs_reveal(viewport_width: f64, link: &Span, panel: &Span, wide_layout_min_px: f64) -> bool {
    viewport_width >= wide_layout_min_px && link.escapes(panel)
}
