use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::{
    navigation::Viewport,
    sections::{SectionBounds, SectionGeometry, SectionId},
};

/// Section geometry and scrolling backed by the live document.
pub struct DomViewport;

impl SectionGeometry for DomViewport {
    fn bounds(&self, id: SectionId) -> Option<SectionBounds> {
        let rect = document()
            .get_element_by_id(id.as_str())?
            .get_bounding_client_rect();
        Some(SectionBounds {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }
}

impl Viewport for DomViewport {
    fn section_top(&self, id: SectionId) -> Option<f64> {
        let el = document().get_element_by_id(id.as_str())?;
        let offset = window().scroll_y().unwrap_or_default();
        Some(el.get_bounding_client_rect().top() + offset)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
    }
}
