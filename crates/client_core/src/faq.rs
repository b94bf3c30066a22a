/// At most one FAQ entry open at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    expanded: Option<usize>,
}

impl FaqAccordion {
    pub fn with_expanded(index: Option<usize>) -> Self {
        Self { expanded: index }
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// State a toggle of `index` would produce, without mutating.
    pub fn toggled(&self, index: usize) -> Self {
        let mut next = *self;
        next.toggle(index);
        next
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}
