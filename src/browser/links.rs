//! External link binding.

use web_sys::{Document, Element};

use super::dom::{JsResultExt, query_all};
use crate::config::LinksConfig;
use crate::error::DomError;
use crate::links::{Annotatable, Indicator, annotate_external_links};

struct LinkElement(Element);

impl Annotatable for LinkElement {
    fn has_indicator(&self, class: &str) -> Result<bool, DomError> {
        Ok(self.0.get_elements_by_class_name(class).length() > 0)
    }

    fn append_indicator(&self, indicator: &Indicator) -> Result<(), DomError> {
        let document = self.0.owner_document().ok_or(DomError::Unavailable("document"))?;
        let icon = document.create_element("span").js_op("createElement")?;
        icon.set_class_name(&indicator.class);
        icon.set_attribute("aria-hidden", "true").js_op("setAttribute")?;
        icon.set_text_content(Some(&indicator.text));
        self.0.append_child(&icon).js_op("appendChild")?;
        Ok(())
    }
}

pub(crate) fn init(document: &Document, config: &LinksConfig) -> Result<(), DomError> {
    let links: Vec<LinkElement> = query_all(document, &config.selector)?
        .into_iter()
        .map(LinkElement)
        .collect();
    let indicator = Indicator { class: config.icon_class.clone(), text: config.icon_text.clone() };
    let added = annotate_external_links(&links, &indicator)?;
    log::debug!("links: marked {added} of {} external links", links.len());
    Ok(())
}
