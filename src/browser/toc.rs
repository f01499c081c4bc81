//! Section tracker binding: `IntersectionObserver` over report sections,
//! active class on TOC links, sidebar reveal.

use std::collections::HashMap;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollLogicalPosition,
};

use super::dom::{JsResultExt, decode_fragment, query_all, report, smooth_scroll, span, window};
use crate::config::TocConfig;
use crate::error::DomError;
use crate::scroll::fragment_target;
use crate::toc::{ActiveChange, SectionHit, SectionTracker, needs_reveal};

struct TocHost {
    links: HashMap<String, Element>,
    panel: Option<Element>,
    active_class: String,
    wide_layout_min_px: f64,
}

impl TocHost {
    fn apply(&self, change: &ActiveChange) -> Result<(), DomError> {
        if let Some(previous) = change.previous.as_ref().and_then(|id| self.links.get(id)) {
            previous.class_list().remove_1(&self.active_class).js_op("classList.remove")?;
        }
        let Some(current) = self.links.get(&change.current) else {
            return Ok(());
        };
        current.class_list().add_1(&self.active_class).js_op("classList.add")?;

        if let Some(panel) = &self.panel {
            let width = window()?.inner_width().js_op("innerWidth")?.as_f64().unwrap_or(0.0);
            if needs_reveal(width, &span(current), &span(panel), self.wide_layout_min_px) {
                smooth_scroll(current, ScrollLogicalPosition::Center);
            }
        }
        Ok(())
    }
}

pub(crate) fn init(document: &Document, config: &TocConfig) -> Result<(), DomError> {
    let sections = query_all(document, &config.section_selector)?;
    let links = query_all(document, &config.link_selector)?;
    if sections.is_empty() || links.is_empty() {
        log::debug!("toc: {} sections, {} links; not tracking", sections.len(), links.len());
        return Ok(());
    }

    // First link wins when several point at the same section.
    let mut by_id = HashMap::new();
    for link in links {
        if let Some(href) = link.get_attribute("href")
            && let Some(id) = fragment_target(&href)
        {
            by_id.entry(decode_fragment(id)).or_insert(link);
        }
    }

    let mut tracker = SectionTracker::new(by_id.keys().cloned());
    let host = TocHost {
        links: by_id,
        panel: document.get_element_by_id(&config.panel_id),
        active_class: config.active_class.clone(),
        wide_layout_min_px: config.wide_layout_min_px,
    };

    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        let hits: Vec<SectionHit> = entries
            .iter()
            .filter_map(|value| {
                value.dyn_ref::<IntersectionObserverEntry>().map(|entry| SectionHit {
                    id: entry.target().id(),
                    is_intersecting: entry.is_intersecting(),
                    top: entry.bounding_client_rect().top(),
                })
            })
            .collect();
        if let Some(change) = tracker.on_intersections(&hits) {
            report("toc", host.apply(&change));
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&config.root_margin);
    options.set_threshold(&JsValue::from_f64(0.0));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)
        .js_op("new IntersectionObserver")?;
    for section in &sections {
        observer.observe(section);
    }
    cb.forget();

    log::debug!("toc: observing {} sections", sections.len());
    Ok(())
}
