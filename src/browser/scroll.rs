//! Scroll binding: in-page anchor clicks and the load-time hash scroll.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, Event, ScrollLogicalPosition};

use super::dom::{JsResultExt, element_by_fragment, listen, query_all, report, smooth_scroll, window};
use super::drawer::Drawer;
use crate::config::ScrollConfig;
use crate::error::DomError;
use crate::scroll::ScrollNavigator;

pub(crate) fn init(document: &Document, config: &ScrollConfig, drawer: &Rc<Drawer>) -> Result<(), DomError> {
    let navigator = ScrollNavigator::new(config.hash_delay_ms);
    let history = window()?.history().js_op("history")?;
    let anchors = query_all(document, &config.anchor_selector)?;

    for anchor in &anchors {
        let link = anchor.clone();
        let document = document.clone();
        let history = history.clone();
        let drawer = Rc::clone(drawer);
        listen(anchor, "click", move |ev: Event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(plan) = navigator.plan_click(&href, |id| element_by_fragment(&document, id).is_some()) else {
                return;
            };
            ev.prevent_default();
            if plan.close_drawer {
                drawer.close();
            }
            if let Some(target) = element_by_fragment(&document, &plan.target_id) {
                smooth_scroll(&target, ScrollLogicalPosition::Start);
            }
            report(
                "scroll",
                history
                    .push_state_with_url(&JsValue::NULL, "", Some(&plan.hash))
                    .js_op("history.pushState"),
            );
        })?;
    }

    log::debug!("scroll: {} in-page anchors", anchors.len());
    Ok(())
}

/// Scroll to `location.hash` once styles have had a moment to settle.
pub(crate) fn scroll_to_hash(document: &Document, config: &ScrollConfig) -> Result<(), DomError> {
    let hash = window()?.location().hash().js_op("location.hash")?;
    let navigator = ScrollNavigator::new(config.hash_delay_ms);
    let Some(plan) = navigator.plan_initial(&hash, |id| element_by_fragment(document, id).is_some()) else {
        return Ok(());
    };

    let document = document.clone();
    Timeout::new(plan.delay_ms, move || {
        if let Some(target) = element_by_fragment(&document, &plan.target_id) {
            smooth_scroll(&target, ScrollLogicalPosition::Start);
        }
    })
    .forget();
    Ok(())
}
