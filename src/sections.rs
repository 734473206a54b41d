use std::{fmt, str::FromStr};

use leptos::prelude::*;
use thiserror::Error;

/// Vertical offset from the viewport top used to decide which section is active.
pub const DETECTION_LINE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct ParseSectionError(String);

impl SectionId {
    /// Navigation order.
    pub const ALL: [SectionId; 6] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Experience,
        Self::Projects,
        Self::Contact,
    ];

    /// The DOM id of the section container.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix('#').unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == id)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

/// Edges of a rendered section container, relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Source of section geometry, usually the browser's layout engine.
pub trait SectionGeometry {
    /// `None` when the section is not rendered.
    fn bounds(&self, id: SectionId) -> Option<SectionBounds>;
}

/// Tracks which section currently sits under the detection line.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<SectionId>,
    detection_line: f64,
    active: Option<SectionId>,
}

impl SectionTracker {
    pub fn new(sections: Vec<SectionId>, detection_line: f64) -> Self {
        Self {
            sections,
            detection_line,
            active: None,
        }
    }

    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    /// Recomputes the active section. The first section in declared order
    /// whose bounds straddle the detection line wins; when none does, the
    /// previous value is kept.
    pub fn observe(&mut self, geometry: &impl SectionGeometry) -> Option<SectionId> {
        let line = self.detection_line;
        let current = self.sections.iter().copied().find(|&id| {
            geometry
                .bounds(id)
                .is_some_and(|bounds| bounds.straddles(line))
        });
        if let Some(id) = current {
            if self.active != Some(id) {
                log::debug!("active section: {id}");
            }
            self.active = Some(id);
        }
        self.active
    }
}

/// One scroll tick: observes `geometry` and writes `active` only when the
/// section changed. Once `active` is disposed nothing is observed or written.
pub fn publish_active(
    tracker: &mut SectionTracker,
    geometry: &impl SectionGeometry,
    active: RwSignal<Option<SectionId>>,
) -> bool {
    let Some(previous) = active.try_get_untracked() else {
        return false;
    };
    let current = tracker.observe(geometry);
    if current == previous {
        return false;
    }
    active.set(current);
    true
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(SectionId::ALL.to_vec(), DETECTION_LINE)
    }
}

/// Static page layout in page coordinates, viewed at a given scroll offset.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    sections: Vec<(SectionId, f64, f64)>,
    scroll_y: f64,
}

impl PageLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, id: SectionId, top: f64, bottom: f64) -> Self {
        self.sections.push((id, top, bottom));
        self
    }

    pub fn scroll_to(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
    }

    /// Page coordinate of a section's top edge.
    pub fn page_top(&self, id: SectionId) -> Option<f64> {
        self.sections
            .iter()
            .find(|(section, _, _)| *section == id)
            .map(|(_, top, _)| *top)
    }
}

impl SectionGeometry for PageLayout {
    fn bounds(&self, id: SectionId) -> Option<SectionBounds> {
        self.sections
            .iter()
            .find(|(section, _, _)| *section == id)
            .map(|(_, top, bottom)| SectionBounds {
                top: top - self.scroll_y,
                bottom: bottom - self.scroll_y,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_sections() -> PageLayout {
        PageLayout::new()
            .with_section(SectionId::Home, 0.0, 800.0)
            .with_section(SectionId::About, 800.0, 1600.0)
    }

    #[test]
    fn should_start_with_no_active_section() {
        let tracker = SectionTracker::default();
        assert_eq!(tracker.active(), None);
        assert_eq!(tracker.sections(), SectionId::ALL.as_slice());
    }

    #[test]
    fn should_activate_section_under_detection_line() {
        let mut layout = two_sections();
        let mut tracker = SectionTracker::default();
        // detection line lands at page offset 850
        layout.scroll_to(750.0);
        assert_eq!(tracker.observe(&layout), Some(SectionId::About));
    }

    #[test]
    fn should_prefer_declaration_order_on_boundary() {
        let mut layout = two_sections();
        let mut tracker = SectionTracker::default();
        layout.scroll_to(700.0);
        assert_eq!(tracker.observe(&layout), Some(SectionId::Home));
    }

    #[test]
    fn should_follow_configured_order_not_layout_order() {
        let mut layout = two_sections();
        let mut tracker =
            SectionTracker::new(vec![SectionId::About, SectionId::Home], DETECTION_LINE);
        layout.scroll_to(700.0);
        assert_eq!(tracker.observe(&layout), Some(SectionId::About));
    }

    #[test]
    fn should_retain_previous_section_when_nothing_matches() {
        let mut layout = two_sections();
        let mut tracker = SectionTracker::default();
        layout.scroll_to(0.0);
        assert_eq!(tracker.observe(&layout), Some(SectionId::Home));
        layout.scroll_to(5000.0);
        assert_eq!(tracker.observe(&layout), Some(SectionId::Home));
    }

    #[test]
    fn should_stay_none_before_first_match() {
        let mut layout = PageLayout::new().with_section(SectionId::Contact, 400.0, 900.0);
        let mut tracker = SectionTracker::default();
        layout.scroll_to(0.0);
        assert_eq!(tracker.observe(&layout), None);
    }

    #[test]
    fn should_skip_unrendered_sections() {
        let mut layout = PageLayout::new().with_section(SectionId::Skills, 0.0, 500.0);
        let mut tracker = SectionTracker::default();
        layout.scroll_to(10.0);
        assert_eq!(tracker.observe(&layout), Some(SectionId::Skills));
    }

    #[test]
    fn should_ignore_sections_outside_tracked_set() {
        let mut layout = two_sections();
        let mut tracker = SectionTracker::new(vec![SectionId::Home], DETECTION_LINE);
        layout.scroll_to(750.0);
        assert_eq!(tracker.observe(&layout), None);
    }

    #[test]
    fn should_publish_only_changed_sections() {
        let owner = Owner::new();
        owner.with(|| {
            let active = RwSignal::new(None);
            let mut tracker = SectionTracker::default();
            let mut layout = two_sections();

            // first observation on mount
            assert!(publish_active(&mut tracker, &layout, active));
            assert_eq!(active.get_untracked(), Some(SectionId::Home));

            layout.scroll_to(100.0);
            assert!(!publish_active(&mut tracker, &layout, active));

            layout.scroll_to(750.0);
            assert!(publish_active(&mut tracker, &layout, active));
            assert_eq!(active.get_untracked(), Some(SectionId::About));

            layout.scroll_to(5000.0);
            assert!(!publish_active(&mut tracker, &layout, active));
            assert_eq!(active.get_untracked(), Some(SectionId::About));
        });
    }

    #[test]
    fn should_stop_publishing_after_teardown() {
        let owner = Owner::new();
        let active = owner.with(|| RwSignal::new(None));
        let mut tracker = SectionTracker::default();
        owner.cleanup();

        assert!(!publish_active(&mut tracker, &two_sections(), active));
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn should_parse_section_ids_and_hrefs() {
        assert_eq!("about".parse::<SectionId>(), Ok(SectionId::About));
        assert_eq!("#contact".parse::<SectionId>(), Ok(SectionId::Contact));
        assert!("clients".parse::<SectionId>().is_err());
        assert_eq!(SectionId::Projects.href(), "#projects");
    }
}
