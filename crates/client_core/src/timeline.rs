//! Scroll progress and reveal-on-scroll state for the story timeline.

use std::collections::HashSet;

/// Intersection ratio at which a timeline entry becomes visible.
pub const REVEAL_THRESHOLD: f64 = 0.2;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// Fraction of the scrollable height already scrolled, clamped to `[0, 1]`.
/// Documents that cannot scroll always report 0.
pub fn scroll_progress(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.document_height - metrics.viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !metrics.scroll_y.is_finite() {
        return 0.0;
    }
    (metrics.scroll_y / scrollable).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollProgress {
    fraction: f64,
}

impl ScrollProgress {
    pub fn mount(metrics: ScrollMetrics) -> Self {
        Self {
            fraction: scroll_progress(metrics),
        }
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        self.fraction = scroll_progress(metrics);
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Fill-bar length as a whole percentage.
    pub fn percent(&self) -> u8 {
        (self.fraction * 100.0).round() as u8
    }
}

/// One-way visibility flags, one per timeline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTracker {
    visible: Vec<bool>,
    observing: HashSet<usize>,
}

impl RevealTracker {
    pub fn new(entries: usize) -> Self {
        Self {
            visible: vec![false; entries],
            observing: (0..entries).collect(),
        }
    }

    /// Feeds an intersection ratio for `index`. Returns true when this
    /// observation revealed the entry.
    pub fn observe(&mut self, index: usize, ratio: f64) -> bool {
        if !self.observing.contains(&index) || ratio < REVEAL_THRESHOLD {
            return false;
        }
        self.observing.remove(&index);
        self.visible[index] = true;
        true
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn is_observing(&self, index: usize) -> bool {
        self.observing.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_y: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y,
            viewport_height: 800.0,
            document_height: 2800.0,
        }
    }

    #[test]
    fn progress_spans_top_to_bottom() {
        assert_eq!(scroll_progress(metrics(0.0)), 0.0);
        assert_eq!(scroll_progress(metrics(1000.0)), 0.5);
        assert_eq!(scroll_progress(metrics(2000.0)), 1.0);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(metrics(-40.0)), 0.0);
        assert_eq!(scroll_progress(metrics(2400.0)), 1.0);
    }

    #[test]
    fn non_scrollable_document_reports_zero() {
        let short = ScrollMetrics {
            scroll_y: 30.0,
            viewport_height: 900.0,
            document_height: 600.0,
        };
        assert_eq!(scroll_progress(short), 0.0);
        let exact = ScrollMetrics {
            document_height: 900.0,
            ..short
        };
        assert_eq!(scroll_progress(exact), 0.0);
    }

    #[test]
    fn progress_recomputes_on_scroll() {
        let mut progress = ScrollProgress::mount(metrics(0.0));
        assert_eq!(progress.percent(), 0);
        progress.on_scroll(metrics(500.0));
        assert_eq!(progress.percent(), 25);
    }

    #[test]
    fn reveal_is_one_way_and_stops_observing() {
        let mut tracker = RevealTracker::new(3);
        assert!(!tracker.observe(1, 0.1));
        assert!(tracker.is_observing(1));
        assert!(tracker.observe(1, 0.2));
        assert!(tracker.is_visible(1));
        assert!(!tracker.is_observing(1));
        assert!(!tracker.observe(1, 0.0));
        assert!(tracker.is_visible(1));
        assert!(!tracker.is_visible(0));
    }

    #[test]
    fn out_of_range_entries_are_ignored() {
        let mut tracker = RevealTracker::new(2);
        assert!(!tracker.observe(5, 1.0));
        assert!(!tracker.is_visible(5));
    }
}
