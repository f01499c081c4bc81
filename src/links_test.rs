use std::cell::RefCell;

use super::*;

/// In-memory link: child class names in document order.
#[derive(Default)]
struct FakeLink {
    children: RefCell<Vec<String>>,
    fail_append: bool,
}

impl FakeLink {
    fn with_children(children: &[&str]) -> Self {
        Self { children: RefCell::new(children.iter().map(|c| (*c).to_owned()).collect()), fail_append: false }
    }

    fn indicator_count(&self, class: &str) -> usize {
        self.children.borrow().iter().filter(|c| *c == class).count()
    }
}

impl Annotatable for FakeLink {
    fn has_indicator(&self, class: &str) -> Result<bool, DomError> {
        Ok(self.children.borrow().iter().any(|c| c == class))
    }

    fn append_indicator(&self, indicator: &Indicator) -> Result<(), DomError> {
        if self.fail_append {
            return Err(DomError::js("appendChild", "HierarchyRequestError"));
        }
        self.children.borrow_mut().push(indicator.class.clone());
        Ok(())
    }
}

#[test]
fn default_indicator_is_external_icon_arrow() {
    let ind = Indicator::default();
    assert_eq!(ind.class, "external-icon");
    assert_eq!(ind.text, " \u{2197}");
}

#[test]
fn annotates_each_unmarked_link_once() {
    let links = vec![FakeLink::default(), FakeLink::with_children(&["badge"]), FakeLink::default()];
    let ind = Indicator::default();
    assert_eq!(annotate_external_links(&links, &ind), Ok(3));
    for link in &links {
        assert_eq!(link.indicator_count("external-icon"), 1);
    }
}

#[test]
fn second_pass_adds_nothing() {
    let links = vec![FakeLink::default(), FakeLink::default()];
    let ind = Indicator::default();
    annotate_external_links(&links, &ind).unwrap();
    assert_eq!(annotate_external_links(&links, &ind), Ok(0));
    for link in &links {
        assert_eq!(link.indicator_count("external-icon"), 1);
    }
}

#[test]
fn already_marked_links_are_skipped() {
    let links = vec![FakeLink::with_children(&["external-icon"]), FakeLink::default()];
    assert_eq!(annotate_external_links(&links, &Indicator::default()), Ok(1));
    assert_eq!(links[0].indicator_count("external-icon"), 1);
}

#[test]
fn no_links_is_noop() {
    let links: Vec<FakeLink> = Vec::new();
    assert_eq!(annotate_external_links(&links, &Indicator::default()), Ok(0));
}

#[test]
fn append_failure_is_reported() {
    let links = vec![FakeLink { fail_append: true, ..FakeLink::default() }];
    let err = annotate_external_links(&links, &Indicator::default()).unwrap_err();
    assert_eq!(err, DomError::js("appendChild", "HierarchyRequestError"));
}
