//! Gesture and scrolling rules per display mode

use serde::{Deserialize, Serialize};

use crate::options::{DisplayMode, ScrollingPolicy};

/// Direction of a swipe on the menu strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Finger moves left, revealing the next item
    Left,
    /// Finger moves right, revealing the previous item
    Right,
}

impl DisplayMode {
    /// Scrolling policy of the strip, `None` for segmented control
    pub fn scrolling(&self) -> Option<ScrollingPolicy> {
        match self {
            DisplayMode::FlexibleItemWidth { scrolling, .. }
            | DisplayMode::FixedItemWidth { scrolling, .. } => Some(*scrolling),
            DisplayMode::SegmentedControl => None,
        }
    }

    pub fn is_paging(&self) -> bool {
        self.scrolling() == Some(ScrollingPolicy::PagingEnabled)
    }

    /// Swipe gestures on the strip are only recognized in paging mode
    pub fn swipe_enabled(&self) -> bool {
        self.is_paging()
    }

    /// Whether the user may scroll the strip independently of the pager
    pub fn strip_scroll_enabled(&self) -> bool {
        matches!(self.scrolling(), Some(ScrollingPolicy::FreeScroll))
    }

    pub fn centers_selected_item(&self) -> bool {
        match self {
            DisplayMode::FlexibleItemWidth {
                center_selected_item,
                ..
            }
            | DisplayMode::FixedItemWidth {
                center_selected_item,
                ..
            } => *center_selected_item,
            DisplayMode::SegmentedControl => false,
        }
    }

    /// Item geometry depends on the container size
    pub fn relayout_on_resize(&self) -> bool {
        matches!(self, DisplayMode::SegmentedControl)
    }

    /// Page a tap on `tapped` should move to from `current`.
    ///
    /// Paging mode moves one step toward the tapped item no matter how far
    /// away it is.
    pub fn resolve_tap_target(&self, current: usize, tapped: usize, item_count: usize) -> usize {
        let last = item_count.saturating_sub(1);
        if tapped == current {
            return current;
        }

        if self.is_paging() {
            if tapped < current {
                current - 1
            } else {
                (current + 1).min(last)
            }
        } else {
            tapped.min(last)
        }
    }

    /// Page a swipe should move to from `current`, clamped to the item range
    pub fn resolve_swipe_target(
        &self,
        current: usize,
        direction: SwipeDirection,
        item_count: usize,
    ) -> usize {
        step(current, direction, item_count)
    }
}

/// One step in `direction`, clamped to `[0, item_count - 1]`
pub fn step(current: usize, direction: SwipeDirection, item_count: usize) -> usize {
    let last = item_count.saturating_sub(1);
    match direction {
        SwipeDirection::Left => (current + 1).min(last),
        SwipeDirection::Right => current.saturating_sub(1),
    }
}
