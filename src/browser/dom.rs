//! Thin web-sys helpers shared by the feature bindings.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use crate::error::DomError;
use crate::toc::Span;

/// Attach the failing operation's name to a JS exception.
pub(crate) trait JsResultExt<T> {
    fn js_op(self, op: &'static str) -> Result<T, DomError>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn js_op(self, op: &'static str) -> Result<T, DomError> {
        self.map_err(|err| DomError::js(op, describe(&err)))
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

pub(crate) fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::Unavailable("window"))
}

pub(crate) fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::Unavailable("document"))
}

/// All elements matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let list = document.query_selector_all(selector).js_op("querySelectorAll")?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

/// Register `handler` for the page lifetime.
pub(crate) fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), DomError> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .js_op("addEventListener")?;
    cb.forget();
    Ok(())
}

/// Register `handler` to fire at most once.
pub(crate) fn listen_once(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), DomError> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(event, cb.as_ref().unchecked_ref(), &options)
        .js_op("addEventListener")?;
    cb.forget();
    Ok(())
}

/// Percent-decode a fragment so `#caf%C3%A9` finds `id="café"`.
pub(crate) fn decode_fragment(id: &str) -> String {
    js_sys::decode_uri_component(id).map_or_else(|_| id.to_owned(), String::from)
}

pub(crate) fn element_by_fragment(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(&decode_fragment(id))
}

pub(crate) fn span(element: &Element) -> Span {
    let rect = element.get_bounding_client_rect();
    Span::new(rect.top(), rect.bottom())
}

/// Fire-and-forget smooth scroll.
pub(crate) fn smooth_scroll(element: &Element, block: ScrollLogicalPosition) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Log a failed initializer. Failures never stop the other behaviors.
pub(crate) fn report(feature: &str, result: Result<(), DomError>) {
    if let Err(err) = result {
        log::warn!("{feature}: {err}");
    }
}
