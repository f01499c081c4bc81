//! Browser binding and wasm entry point.
//!
//! ARCHITECTURE
//! ============
//! Each submodule looks up its elements, builds the matching controller and
//! registers listeners that feed DOM events to it. Controllers are owned by
//! their listeners (`Rc` where more than one listener needs them) and live
//! for the page lifetime; closures are leaked with `Closure::forget`.
//!
//! A missing element makes that behavior a no-op. An error from one
//! initializer is logged and the rest still run.

mod dom;
mod drawer;
mod links;
mod scroll;
mod theme;
mod toc;

use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

use crate::config::ReportConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::ConfigError;
use crate::page::InitTiming;
use dom::report;

/// Module start: install panic/log hooks, then initialize once the document is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // `config.log_level` is applied in `init_page`, once the config block is parsed.
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&err.to_string().into());
    }

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };

    match InitTiming::from_ready_state(&document.ready_state()) {
        InitTiming::Immediate => init_page(&document),
        InitTiming::Deferred => {
            let doc = document.clone();
            report(
                "page",
                dom::listen_once(&document, "DOMContentLoaded", move |_| init_page(&doc)),
            );
        }
    }
}

fn init_page(document: &Document) {
    let config = load_config(document).unwrap_or_else(|err| {
        log::warn!("config: {err}; using defaults");
        ReportConfig::default()
    });
    if let Ok(level) = config.log_level() {
        log::set_max_level(level.to_level_filter());
    }

    report("theme", theme::init(document, &config.theme));
    report("toc", toc::init(document, &config.toc));

    let drawer = drawer::Drawer::new(document, &config.drawer);
    report("drawer", drawer::init(document, &config.drawer, &drawer));
    report("scroll", scroll::init(document, &config.scroll, &drawer));
    report("scroll", scroll::scroll_to_hash(document, &config.scroll));

    report("links", links::init(document, &config.links));
    log::info!("report chrome ready");
}

/// Read the embedded JSON config block, if the page has one.
fn load_config(document: &Document) -> Result<ReportConfig, ConfigError> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(raw) => ReportConfig::from_json(&raw),
        None => Ok(ReportConfig::default()),
    }
}
