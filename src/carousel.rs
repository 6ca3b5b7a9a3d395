//! State for the testimonial carousel.
//!
//! Pure controller for a horizontally sliding card list: it tracks which card
//! sits at the left edge and how many cards fit the viewport. It holds no DOM
//! handles, so it runs under plain `cargo test` on the host target.

/// Viewport width (css pixels) at which two cards fit side by side.
pub const MEDIUM_MIN_WIDTH: f64 = 640.0;
/// Viewport width (css pixels) at which three cards fit side by side.
pub const WIDE_MIN_WIDTH: f64 = 1024.0;

/// Number of cards shown at once for a given viewport width. Zero and
/// negative widths land in the narrowest tier.
pub fn items_per_page_for(width: f64) -> usize {
    if width >= WIDE_MIN_WIDTH {
        3
    } else if width >= MEDIUM_MIN_WIDTH {
        2
    } else {
        1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    items_per_page: usize,
}

impl Carousel {
    pub fn new(len: usize, width: f64) -> Self {
        Self {
            len,
            index: 0,
            items_per_page: items_per_page_for(width),
        }
    }

    /// Largest index that still fills the view with cards. Collapses to 0
    /// when the list is shorter than a page.
    fn max_index(&self) -> usize {
        self.len.saturating_sub(self.items_per_page)
    }

    /// Recompute the page size for a new viewport width and pull the index
    /// back in range. Without the re-clamp, paging to the end on a phone and
    /// then widening to desktop leaves the track scrolled past the last full
    /// page, showing blank trailing space.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.items_per_page = items_per_page_for(width);
        self.index = self.index.min(self.max_index());
    }

    pub fn next(&mut self) {
        if self.can_go_next() {
            self.index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.can_go_prev() {
            self.index -= 1;
        }
    }

    pub fn can_go_next(&self) -> bool {
        self.index < self.max_index()
    }

    pub fn can_go_prev(&self) -> bool {
        self.index > 0
    }

    /// Index of the first visible card, which the view turns into the track
    /// offset (`-index * 100 / len` percent).
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_boundaries() {
        assert_eq!(items_per_page_for(639.0), 1);
        assert_eq!(items_per_page_for(640.0), 2);
        assert_eq!(items_per_page_for(1023.0), 2);
        assert_eq!(items_per_page_for(1024.0), 3);
    }

    #[test]
    fn nonpositive_widths_use_narrowest_tier() {
        assert_eq!(items_per_page_for(0.0), 1);
        assert_eq!(items_per_page_for(-480.0), 1);
    }

    #[test]
    fn starts_at_first_page() {
        let carousel = Carousel::new(5, 1280.0);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.items_per_page(), 3);
        assert!(!carousel.can_go_prev());
    }

    #[test]
    fn next_stops_at_last_full_page() {
        let mut carousel = Carousel::new(5, 1280.0);
        assert!(carousel.can_go_next());
        carousel.next();
        assert!(carousel.can_go_next());
        carousel.next();
        assert_eq!(carousel.index(), 2);
        assert!(!carousel.can_go_next());
        carousel.next();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn prev_stops_at_zero() {
        let mut carousel = Carousel::new(5, 1280.0);
        carousel.prev();
        assert_eq!(carousel.index(), 0);
        carousel.next();
        assert!(carousel.can_go_prev());
        carousel.prev();
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.can_go_prev());
    }

    #[test]
    fn widening_reclamps_index() {
        // paged to the end on a phone, then rotated to a desktop width
        let mut carousel = Carousel::new(5, 375.0);
        for _ in 0..4 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 4);
        carousel.set_viewport_width(1280.0);
        assert_eq!(carousel.items_per_page(), 3);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn resize_oscillation_does_not_drift() {
        let mut carousel = Carousel::new(5, 375.0);
        for _ in 0..4 {
            carousel.next();
        }
        carousel.set_viewport_width(1280.0);
        assert_eq!(carousel.index(), 2);
        // shrinking the page size never moves the index back up
        carousel.set_viewport_width(375.0);
        assert_eq!(carousel.index(), 2);
        carousel.set_viewport_width(1280.0);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn empty_list_never_navigates() {
        let mut carousel = Carousel::new(0, 375.0);
        assert!(carousel.is_empty());
        assert!(!carousel.can_go_next());
        assert!(!carousel.can_go_prev());
        carousel.next();
        carousel.prev();
        carousel.set_viewport_width(1280.0);
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.can_go_next());
    }

    #[test]
    fn list_shorter_than_page_stays_put() {
        let mut carousel = Carousel::new(2, 1280.0);
        assert!(!carousel.can_go_next());
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn mobile_walkthrough() {
        let mut carousel = Carousel::new(5, 375.0);
        assert_eq!(carousel.items_per_page(), 1);
        for _ in 0..3 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 3);
        assert!(carousel.can_go_next());
        carousel.next();
        assert_eq!(carousel.index(), 4);
        assert!(!carousel.can_go_next());
    }
}
