//! Theme binding: `localStorage`, the root `data-theme` attribute, the toggle
//! control and the `prefers-color-scheme` query.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MediaQueryListEvent, Storage, Window};

use super::dom::{JsResultExt, listen, window};
use crate::config::ThemeConfig;
use crate::error::DomError;
use crate::theme::{ThemeAction, ThemeController};

struct ThemeHost {
    window: Window,
    root: Element,
    storage_key: String,
    attribute: String,
}

impl ThemeHost {
    fn storage(&self) -> Result<Storage, DomError> {
        self.window
            .local_storage()
            .js_op("localStorage")?
            .ok_or(DomError::Unavailable("localStorage"))
    }

    /// The stored slot. Unreadable storage counts as empty.
    fn read_stored(&self) -> Option<String> {
        match self.storage().and_then(|s| s.get_item(&self.storage_key).js_op("localStorage.getItem")) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("theme: {err}; following system preference");
                None
            }
        }
    }

    fn run(&self, actions: Vec<ThemeAction>) {
        for action in actions {
            let result = match action {
                ThemeAction::Apply(theme) => self.root.set_attribute(&self.attribute, theme.as_str()).js_op("setAttribute"),
                ThemeAction::Persist(theme) => self
                    .storage()
                    .and_then(|s| s.set_item(&self.storage_key, theme.as_str()).js_op("localStorage.setItem")),
            };
            if let Err(err) = result {
                log::warn!("theme: {err}");
            }
        }
    }
}

pub(crate) fn init(document: &Document, config: &ThemeConfig) -> Result<(), DomError> {
    let window = window()?;
    let root = document
        .document_element()
        .ok_or(DomError::Unavailable("documentElement"))?;
    let media = window.match_media(&config.dark_scheme_query).js_op("matchMedia")?;
    let system_dark = media.as_ref().is_some_and(web_sys::MediaQueryList::matches);

    let host = Rc::new(ThemeHost {
        window,
        root,
        storage_key: config.storage_key.clone(),
        attribute: config.attribute.clone(),
    });
    let stored = host.read_stored();
    let controller = Rc::new(RefCell::new(ThemeController::new(stored.as_deref())));

    let actions = controller.borrow_mut().start(system_dark);
    host.run(actions);

    if let Some(toggle) = document.get_element_by_id(&config.toggle_id) {
        let host = Rc::clone(&host);
        let controller = Rc::clone(&controller);
        listen(&toggle, "click", move |_| {
            let actions = controller.borrow_mut().toggle();
            host.run(actions);
        })?;
    } else {
        log::debug!("theme: no #{} control", config.toggle_id);
    }

    if let Some(media) = media {
        let query = media.clone();
        listen(&media, "change", move |ev: Event| {
            let matches = ev
                .dyn_ref::<MediaQueryListEvent>()
                .map_or_else(|| query.matches(), MediaQueryListEvent::matches);
            let stored = host.read_stored();
            let actions = controller.borrow_mut().on_system_change(stored.as_deref(), matches);
            host.run(actions);
        })?;
    }

    Ok(())
}
