// Showroom - core/carousel.rs
//
// Index state for rotating showcases (featured slider, testimonials).
// Holds a position only; the items themselves stay with the caller.

/// Current slide position over a collection of fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// Current index, or `None` for an empty collection.
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance one slide, wrapping to the start.
    pub fn next(&mut self) -> Option<usize> {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.current()
    }

    /// Go back one slide, wrapping to the end.
    pub fn prev(&mut self) -> Option<usize> {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.current()
    }

    /// Jump to `index`. Out-of-range requests are ignored.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index < self.len {
            self.index = index;
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let mut c = Carousel::new(3);
        assert_eq!(c.current(), Some(0));
        assert_eq!(c.next(), Some(1));
        assert_eq!(c.next(), Some(2));
        assert_eq!(c.next(), Some(0));
    }

    #[test]
    fn test_prev_wraps_to_end() {
        let mut c = Carousel::new(4);
        assert_eq!(c.prev(), Some(3));
        assert_eq!(c.prev(), Some(2));
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let mut c = Carousel::new(5);
        assert_eq!(c.select(3), Some(3));
        assert_eq!(c.select(5), Some(3));
    }

    #[test]
    fn test_empty_never_moves() {
        let mut c = Carousel::new(0);
        assert!(c.is_empty());
        assert_eq!(c.current(), None);
        assert_eq!(c.next(), None);
        assert_eq!(c.prev(), None);
        assert_eq!(c.select(0), None);
    }
}
