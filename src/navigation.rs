use crate::sections::{SectionId, DETECTION_LINE};

/// Height of the fixed navigation bar subtracted from scroll targets.
pub const NAV_OFFSET: f64 = 64.0;

/// Viewports below the `md` breakpoint (900px) use the drawer.
pub const NARROW_QUERY: &str = "(max-width: 899.95px)";

#[derive(Debug, Clone, PartialEq)]
pub struct NavConfig {
    pub sections: Vec<SectionId>,
    pub detection_line: f64,
    pub nav_offset: f64,
    pub narrow_query: &'static str,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            sections: SectionId::ALL.to_vec(),
            detection_line: DETECTION_LINE,
            nav_offset: NAV_OFFSET,
            narrow_query: NARROW_QUERY,
        }
    }
}

/// Open flag of the mobile navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
}

impl DrawerState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

pub trait Viewport {
    /// Page coordinate of the section's top edge, `None` when not rendered.
    fn section_top(&self, id: SectionId) -> Option<f64>;

    /// Starts a smooth scroll animation; does not wait for it to finish.
    fn smooth_scroll_to(&self, top: f64);
}

pub fn scroll_target(section_top: f64, nav_offset: f64) -> f64 {
    section_top - nav_offset
}

/// Smoothly scrolls to `id`, keeping it clear of the fixed header, and closes
/// the drawer on narrow viewports. Does nothing at all when the section is not
/// rendered.
pub fn scroll_to_section(
    viewport: &impl Viewport,
    drawer: &mut DrawerState,
    narrow: bool,
    id: SectionId,
    config: &NavConfig,
) -> Option<f64> {
    let Some(top) = viewport.section_top(id) else {
        log::debug!("scroll to {id} skipped: section not rendered");
        return None;
    };
    let target = scroll_target(top, config.nav_offset);
    viewport.smooth_scroll_to(target);
    if narrow {
        drawer.close();
    }
    Some(target)
}

/// Smoothly scrolls back to the very top of the page.
pub fn scroll_to_top(viewport: &impl Viewport) {
    viewport.smooth_scroll_to(0.0);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::sections::PageLayout;

    struct RecordingViewport {
        layout: PageLayout,
        requests: RefCell<Vec<f64>>,
    }

    impl RecordingViewport {
        fn new(layout: PageLayout) -> Self {
            Self {
                layout,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl Viewport for RecordingViewport {
        fn section_top(&self, id: SectionId) -> Option<f64> {
            self.layout.page_top(id)
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.requests.borrow_mut().push(top);
        }
    }

    fn viewport() -> RecordingViewport {
        RecordingViewport::new(
            PageLayout::new()
                .with_section(SectionId::Home, 0.0, 1200.0)
                .with_section(SectionId::Projects, 1200.0, 2000.0),
        )
    }

    #[test]
    fn should_subtract_nav_offset_from_section_top() {
        assert_eq!(scroll_target(1200.0, NAV_OFFSET), 1136.0);
    }

    #[test]
    fn should_request_smooth_scroll_to_target() {
        let viewport = viewport();
        let mut drawer = DrawerState::default();
        let target = scroll_to_section(
            &viewport,
            &mut drawer,
            false,
            SectionId::Projects,
            &NavConfig::default(),
        );
        assert_eq!(target, Some(1136.0));
        assert_eq!(*viewport.requests.borrow(), vec![1136.0]);
    }

    #[test]
    fn should_do_nothing_when_section_missing() {
        let viewport = viewport();
        let mut drawer = DrawerState::default();
        drawer.open();
        let target = scroll_to_section(
            &viewport,
            &mut drawer,
            true,
            SectionId::Contact,
            &NavConfig::default(),
        );
        assert_eq!(target, None);
        assert!(viewport.requests.borrow().is_empty());
        assert!(drawer.is_open());
    }

    #[test]
    fn should_close_drawer_on_narrow_viewport() {
        let viewport = viewport();
        let mut drawer = DrawerState::default();
        drawer.open();
        scroll_to_section(
            &viewport,
            &mut drawer,
            true,
            SectionId::Home,
            &NavConfig::default(),
        );
        assert!(!drawer.is_open());

        // closing is not a toggle
        scroll_to_section(
            &viewport,
            &mut drawer,
            true,
            SectionId::Home,
            &NavConfig::default(),
        );
        assert!(!drawer.is_open());
    }

    #[test]
    fn should_leave_drawer_alone_on_wide_viewport() {
        let viewport = viewport();
        let mut drawer = DrawerState::default();
        drawer.open();
        scroll_to_section(
            &viewport,
            &mut drawer,
            false,
            SectionId::Home,
            &NavConfig::default(),
        );
        assert!(drawer.is_open());
    }

    #[test]
    fn should_scroll_to_page_top_without_offset() {
        let viewport = viewport();
        scroll_to_top(&viewport);
        assert_eq!(*viewport.requests.borrow(), vec![0.0]);
    }

    #[test]
    fn should_honor_configured_offset() {
        let viewport = viewport();
        let config = NavConfig {
            nav_offset: 80.0,
            ..NavConfig::default()
        };
        let target = scroll_to_section(
            &viewport,
            &mut DrawerState::default(),
            false,
            SectionId::Projects,
            &config,
        );
        assert_eq!(target, Some(1120.0));
    }
}
