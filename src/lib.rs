//! Client-side chrome for static HTML reports.
//!
//! This crate is compiled to WebAssembly and loaded by a pre-rendered report
//! page. It adds theme switching, table-of-contents highlighting, smooth
//! in-page scrolling, a mobile navigation drawer and external-link markers.
//! Nothing here renders content; every behavior is a cosmetic reaction to a
//! single DOM event.
//!
//! Each behavior is split in two: a controller that owns the behavior's state
//! and returns actions (plain Rust, tested on the host), and a binding under
//! `browser` that wires DOM events to the controller and applies the actions.
//! The binding only exists with the `browser` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Dark/light preference, toggle and system-scheme tracking |
//! | [`toc`] | Active table-of-contents link from section intersections |
//! | [`scroll`] | In-page anchor navigation and initial hash scroll |
//! | [`drawer`] | Mobile navigation drawer open/closed state machine |
//! | [`links`] | External link indicators |
//! | [`page`] | Bootstrap timing |
//! | [`config`] | Page-level configuration and its defaults |
//! | [`error`] | Error types shared by the binding and config loading |
//! | [`consts`] | Default DOM contract values |

pub mod config;
pub mod consts;
pub mod drawer;
pub mod error;
pub mod links;
pub mod page;
pub mod scroll;
pub mod theme;
pub mod toc;

#[cfg(feature = "browser")]
pub mod browser;
