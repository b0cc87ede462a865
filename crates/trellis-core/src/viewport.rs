//! Scroll window over a sequence of items.
//!
//! Pure data: it knows nothing about rendering, only which slice of items
//! fits and how many are hidden on either side. The board uses one viewport
//! horizontally for lists and one per list vertically for cards.

use std::ops::Range;

/// The visible slice of a [`Viewport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportWindow {
    pub visible: Range<usize>,
    pub hidden_before: usize,
    pub hidden_after: usize,
}

impl ViewportWindow {
    pub fn empty() -> Self {
        Self {
            visible: 0..0,
            hidden_before: 0,
            hidden_after: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    total_items: usize,
    offset: usize,
}

impl Viewport {
    pub fn new(total_items: usize) -> Self {
        Self {
            total_items,
            offset: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Update the item count, pulling the offset back if it now points past the end.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.offset = self.offset.min(total_items.saturating_sub(1));
    }

    /// Move the offset the minimum amount needed for `item` to be inside a
    /// window of `capacity` items.
    pub fn scroll_to_visible(&mut self, item: usize, capacity: usize) {
        if capacity == 0 {
            return;
        }
        if item < self.offset {
            self.offset = item;
        } else if item >= self.offset + capacity {
            self.offset = item + 1 - capacity;
        }
        let max_offset = self.total_items.saturating_sub(capacity);
        self.offset = self.offset.min(max_offset);
    }

    pub fn window(&self, capacity: usize) -> ViewportWindow {
        if self.total_items == 0 || capacity == 0 {
            return ViewportWindow::empty();
        }
        let start = self.offset.min(self.total_items - 1);
        let end = (start + capacity).min(self.total_items);
        ViewportWindow {
            visible: start..end,
            hidden_before: start,
            hidden_after: self.total_items - end,
        }
    }
}
