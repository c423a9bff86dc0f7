use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config;
use crate::error::{PageError, PageResult};
use crate::observer::SectionExtent;
use crate::section::Section;

pub fn window() -> PageResult<Window> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> PageResult<Document> {
    window()?.document().ok_or(PageError::NoDocument)
}

pub fn scroll_y() -> f64 {
    window()
        .ok()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .ok()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn is_mobile(width: f64) -> bool {
    width < config::MOBILE_BREAKPOINT
}

/// Reads the OS reduced-motion preference. Anything that goes wrong while
/// asking counts as "motion allowed".
pub fn prefers_reduced_motion() -> bool {
    window()
        .ok()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Viewport-relative box of the element marked `data-spotlight="<id>"`.
pub fn spotlight_anchor(section: Section) -> Option<Rect> {
    let selector = format!("[data-spotlight=\"{}\"]", section.id());
    let anchor = document().ok()?.query_selector(&selector).ok().flatten()?;
    let rect = anchor.get_bounding_client_rect();
    Some(Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

fn section_element(document: &Document, section: Section) -> Option<HtmlElement> {
    document
        .get_element_by_id(section.id())
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

/// Document-space extents of every mounted section, in document order.
pub fn measure_sections() -> Vec<SectionExtent> {
    let Ok(document) = document() else {
        return Vec::new();
    };
    Section::ALL
        .into_iter()
        .filter_map(|section| match section_element(&document, section) {
            Some(element) => Some(SectionExtent {
                section,
                top: element.offset_top() as f64,
                height: element.offset_height() as f64,
            }),
            None => {
                debug!("section #{} not mounted yet, skipping", section.id());
                None
            }
        })
        .collect()
}

pub fn anchor_viewport_top(section: Section) -> PageResult<f64> {
    let element = document()?
        .get_element_by_id(section.id())
        .ok_or(PageError::MissingAnchor(section))?;
    Ok(element.get_bounding_client_rect().top())
}

/// Fragment of the current URL, `#` included.
pub fn location_hash() -> PageResult<String> {
    Ok(window()?.location().hash()?)
}

pub fn smooth_scroll_to(top: f64) -> PageResult<()> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}
