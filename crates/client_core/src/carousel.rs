use std::time::Duration;

pub const ROTATION_INTERVAL: Duration = Duration::from_millis(6000);
pub const NARROW_ROTATION_INTERVAL: Duration = Duration::from_millis(4500);
pub const NARROW_VIEWPORT_WIDTH: u32 = 768;

pub fn rotation_interval(viewport_width: u32) -> Duration {
    if viewport_width < NARROW_VIEWPORT_WIDTH {
        NARROW_ROTATION_INTERVAL
    } else {
        ROTATION_INTERVAL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    /// Starts on `index`, or the first slide when out of range.
    pub fn starting_at(len: usize, index: usize) -> Self {
        let mut carousel = Self::new(len);
        carousel.select(index);
        carousel
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn next_index(&self) -> usize {
        let mut next = *self;
        next.advance();
        next.current
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }
}
