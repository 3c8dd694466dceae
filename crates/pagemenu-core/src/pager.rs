//! Content pager: uniform-width page slots laid out side by side

use crate::command::{Command, TransitionId};

/// Page index for a horizontal content offset.
///
/// A page becomes current once more than half of it is visible. The result is
/// not clamped; callers bound it to their page range.
pub fn page_from_offset(offset: f64, page_width: f64) -> i64 {
    if page_width <= 0.0 || !page_width.is_finite() {
        return 0;
    }
    ((offset - page_width / 2.0) / page_width).floor() as i64 + 1
}

/// One slot of the pager, wrapping the host's page handle
#[derive(Debug, Clone, PartialEq)]
pub struct Page<H> {
    pub index: usize,
    pub handle: H,
}

#[derive(Debug, Clone)]
pub struct ContentPager<H> {
    pages: Vec<Page<H>>,
    page_width: f64,
    offset: f64,
}

impl<H> ContentPager<H> {
    pub fn new(handles: Vec<H>, page_width: f64) -> Self {
        let pages = handles
            .into_iter()
            .enumerate()
            .map(|(index, handle)| Page { index, handle })
            .collect();
        Self {
            pages,
            page_width,
            offset: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[Page<H>] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&Page<H>> {
        self.pages.get(index)
    }

    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn content_width(&self) -> f64 {
        self.page_width * self.pages.len() as f64
    }

    /// Resize every page slot, keeping `page` in view
    pub fn set_page_width(&mut self, page_width: f64, page: usize) {
        self.page_width = page_width;
        self.offset = self.offset_for(page);
    }

    /// Left edge of `page`
    pub fn offset_for(&self, page: usize) -> f64 {
        self.page_width * page as f64
    }

    /// Page under the current offset, bounded to the page range
    pub fn current_page(&self) -> usize {
        self.page_at(self.offset)
    }

    /// Page for an arbitrary offset, bounded to the page range
    pub fn page_at(&self, offset: f64) -> usize {
        let last = self.pages.len().saturating_sub(1) as i64;
        page_from_offset(offset, self.page_width).clamp(0, last) as usize
    }

    /// Follow a raw offset reported by the host during a drag
    pub fn track(&mut self, offset: f64) {
        let max = (self.content_width() - self.page_width).max(0.0);
        self.offset = offset.clamp(0.0, max);
    }

    /// Scroll to `page` and describe the motion for the host
    pub fn scroll_to(
        &mut self,
        page: usize,
        animated: bool,
        transition: Option<TransitionId>,
    ) -> Command {
        self.offset = self.offset_for(page);
        Command::ScrollContent {
            page,
            offset: self.offset,
            animated,
            transition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_offset() {
        assert_eq!(page_from_offset(320.0, 300.0), 1);
        assert_eq!(page_from_offset(0.0, 300.0), 0);
        assert_eq!(page_from_offset(149.0, 300.0), 0);
        assert_eq!(page_from_offset(150.0, 300.0), 1);
        assert_eq!(page_from_offset(-200.0, 300.0), -1);
        assert_eq!(page_from_offset(500.0, 0.0), 0);
    }

    #[test]
    fn test_page_at_is_bounded() {
        let pager = ContentPager::new(vec!["a", "b", "c"], 300.0);
        assert_eq!(pager.page_at(-400.0), 0);
        assert_eq!(pager.page_at(450.0), 2);
        assert_eq!(pager.page_at(5000.0), 2);
    }

    #[test]
    fn test_track_clamps_to_content() {
        let mut pager = ContentPager::new(vec!["a", "b", "c"], 300.0);
        pager.track(420.0);
        assert_eq!(pager.offset(), 420.0);
        assert_eq!(pager.current_page(), 1);
        pager.track(1000.0);
        assert_eq!(pager.offset(), 600.0);
        pager.track(-5.0);
        assert_eq!(pager.offset(), 0.0);
    }

    #[test]
    fn test_scroll_to_and_resize() {
        let mut pager = ContentPager::new(vec!["a", "b", "c"], 300.0);
        let command = pager.scroll_to(2, true, Some(TransitionId(7)));
        assert_eq!(
            command,
            Command::ScrollContent {
                page: 2,
                offset: 600.0,
                animated: true,
                transition: Some(TransitionId(7)),
            }
        );

        pager.set_page_width(480.0, 2);
        assert_eq!(pager.offset(), 960.0);
        assert_eq!(pager.current_page(), 2);
    }
}
