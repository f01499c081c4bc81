//! Drawer binding: open/close controls, overlay, escape key, body scroll lock.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

use super::dom::{JsResultExt, listen, report};
use crate::config::DrawerConfig;
use crate::drawer::{DrawerAction, DrawerController};
use crate::error::DomError;

/// The page's single drawer controller plus the elements it drives.
///
/// Shared with the scroll binding, which closes the drawer on navigation.
pub(crate) struct Drawer {
    controller: RefCell<DrawerController>,
    drawer: Option<Element>,
    overlay: Option<Element>,
    body: Option<HtmlElement>,
    open_class: String,
    overlay_visible_class: String,
}

impl Drawer {
    pub(crate) fn new(document: &Document, config: &DrawerConfig) -> Rc<Self> {
        Rc::new(Self {
            controller: RefCell::new(DrawerController::new()),
            drawer: document.get_element_by_id(&config.drawer_id),
            overlay: document.get_element_by_id(&config.overlay_id),
            body: document.body(),
            open_class: config.open_class.clone(),
            overlay_visible_class: config.overlay_visible_class.clone(),
        })
    }

    pub(crate) fn open(&self) {
        let actions = self.controller.borrow_mut().open();
        self.run(actions);
    }

    pub(crate) fn close(&self) {
        let actions = self.controller.borrow_mut().close();
        self.run(actions);
    }

    fn on_key(&self, key: &str) {
        let actions = self.controller.borrow_mut().on_key(key);
        self.run(actions);
    }

    fn run(&self, actions: Vec<DrawerAction>) {
        for action in actions {
            let result = match action {
                DrawerAction::Show => self.show(),
                DrawerAction::Hide => self.hide(),
            };
            report("drawer", result);
        }
    }

    fn show(&self) -> Result<(), DomError> {
        if let Some(drawer) = &self.drawer {
            drawer.class_list().add_1(&self.open_class).js_op("classList.add")?;
        }
        if let Some(overlay) = &self.overlay {
            overlay.class_list().add_1(&self.overlay_visible_class).js_op("classList.add")?;
        }
        if let Some(body) = &self.body {
            body.style().set_property("overflow", "hidden").js_op("style.setProperty")?;
        }
        Ok(())
    }

    fn hide(&self) -> Result<(), DomError> {
        if let Some(drawer) = &self.drawer {
            drawer.class_list().remove_1(&self.open_class).js_op("classList.remove")?;
        }
        if let Some(overlay) = &self.overlay {
            overlay.class_list().remove_1(&self.overlay_visible_class).js_op("classList.remove")?;
        }
        if let Some(body) = &self.body {
            body.style().remove_property("overflow").js_op("style.removeProperty")?;
        }
        Ok(())
    }
}

/// Wire the drawer controls. Does nothing without the open control or the drawer.
pub(crate) fn init(document: &Document, config: &DrawerConfig, drawer: &Rc<Drawer>) -> Result<(), DomError> {
    let Some(open_control) = document.get_element_by_id(&config.open_id) else {
        log::debug!("drawer: no #{} control", config.open_id);
        return Ok(());
    };
    if drawer.drawer.is_none() {
        log::debug!("drawer: no #{} panel", config.drawer_id);
        return Ok(());
    }

    let d = Rc::clone(drawer);
    listen(&open_control, "click", move |_| d.open())?;

    if let Some(close_control) = document.get_element_by_id(&config.close_id) {
        let d = Rc::clone(drawer);
        listen(&close_control, "click", move |_| d.close())?;
    }

    if let Some(overlay) = &drawer.overlay {
        let d = Rc::clone(drawer);
        listen(overlay, "click", move |_| d.close())?;
    }

    let d = Rc::clone(drawer);
    listen(document, "keydown", move |ev: Event| {
        if let Some(key_event) = ev.dyn_ref::<KeyboardEvent>() {
            d.on_key(&key_event.key());
        }
    })?;

    Ok(())
}
