use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::{content::SectionId, navigation::Viewport};

/// `Viewport` backed by the live document. Only call from event handlers or
/// effects; there is no document during server rendering.
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_to_anchor(&self, id: &SectionId) -> bool {
        let el = if let Some(el) = document().get_element_by_id(id.as_str()) {
            el
        } else {
            return false;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }

    fn open_url(&self, url: &str) {
        if let Err(e) = window().location().set_href(url) {
            log::warn!("couldn't navigate to {url}: {e:?}");
        }
    }
}

/// Document offsets of the mounted sections, in the order given. Sections
/// not in the DOM yet are skipped.
pub fn section_tops(ids: &[SectionId]) -> Vec<(SectionId, f64)> {
    let doc = document();
    ids.iter()
        .filter_map(|id| {
            let el = doc.get_element_by_id(id.as_str())?;
            let el = el.dyn_ref::<HtmlElement>()?;
            Some((id.clone(), el.offset_top() as f64))
        })
        .collect()
}
