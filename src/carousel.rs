/// Autoplay delay between slides.
pub const AUTOPLAY_MS: u64 = 5000;

/// Looping slide position over `len` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Out of range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Indices of the `per_view` slides shown from the current position,
    /// wrapping around the end.
    pub fn visible(&self, per_view: usize) -> Vec<usize> {
        let count = per_view.min(self.len);
        (0..count).map(|i| (self.index + i) % self.len).collect()
    }
}

/// Slides per view for a viewport width, matching the 768/1024 breakpoints.
pub fn slides_per_view(wide: bool, medium: bool) -> usize {
    match (wide, medium) {
        (true, _) => 3,
        (false, true) => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_forward_and_backward() {
        let mut carousel = Carousel::new(4);
        carousel.prev();
        assert_eq!(carousel.index(), 3);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn should_ignore_out_of_range_jump() {
        let mut carousel = Carousel::new(4);
        carousel.go_to(2);
        carousel.go_to(9);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn should_stay_inert_when_empty() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        assert!(carousel.is_empty());
        assert_eq!(carousel.index(), 0);
        assert!(carousel.visible(3).is_empty());
    }

    #[test]
    fn should_list_visible_slides_with_wraparound() {
        let mut carousel = Carousel::new(4);
        carousel.go_to(3);
        assert_eq!(carousel.visible(3), vec![3, 0, 1]);
        assert_eq!(Carousel::new(2).visible(3), vec![0, 1]);
    }

    #[test]
    fn should_pick_slides_per_view_from_breakpoints() {
        assert_eq!(slides_per_view(true, true), 3);
        assert_eq!(slides_per_view(false, true), 2);
        assert_eq!(slides_per_view(false, false), 1);
    }
}
