//! Menu strip: ordered items, selection and strip scrolling
//!
//! The strip never decides which page is current. It lays out its items,
//! mirrors the selection it is told about and reports where it should scroll.

use serde::Serialize;

use crate::command::Command;
use crate::geometry::{item_geometry, ItemGeometry, TextMeasure};
use crate::options::{DisplayMode, LayoutOptions};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub index: usize,
    pub title: String,
    pub geometry: ItemGeometry,
    /// Left edge within the strip content
    pub x: f64,
    selected: bool,
}

impl MenuItem {
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn width(&self) -> f64 {
        self.geometry.frame_width()
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width() / 2.0
    }
}

#[derive(Debug, Clone)]
pub struct MenuStrip {
    items: Vec<MenuItem>,
    display_mode: DisplayMode,
    viewport_width: f64,
    content_width: f64,
    offset: f64,
}

impl MenuStrip {
    /// Lay out one item per title with `selected` highlighted
    pub fn new(
        titles: Vec<String>,
        options: &LayoutOptions,
        measure: &dyn TextMeasure,
        viewport_width: f64,
        selected: usize,
    ) -> Self {
        let items = titles
            .into_iter()
            .enumerate()
            .map(|(index, title)| MenuItem {
                index,
                title,
                geometry: ItemGeometry::default(),
                x: 0.0,
                selected: index == selected,
            })
            .collect();

        let mut strip = Self {
            items,
            display_mode: options.display_mode,
            viewport_width,
            content_width: 0.0,
            offset: 0.0,
        };
        strip.layout_items(options, measure);
        strip
    }

    fn layout_items(&mut self, options: &LayoutOptions, measure: &dyn TextMeasure) {
        let count = self.items.len();
        let mut x = 0.0;
        for item in &mut self.items {
            item.geometry = item_geometry(&item.title, measure, options, self.viewport_width, count);
            item.x = x;
            x += item.width();
        }
        self.content_width = x;
    }

    /// Adapt to a new viewport width.
    ///
    /// Item geometry only depends on the viewport in segmented mode; other
    /// modes keep their items and just re-clamp the scroll offset.
    pub fn relayout(&mut self, options: &LayoutOptions, measure: &dyn TextMeasure, viewport_width: f64) {
        self.viewport_width = viewport_width;
        if self.display_mode.relayout_on_resize() {
            self.layout_items(options, measure);
        }
        self.offset = self.clamp_offset(self.offset);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.selected)
    }

    /// Move the highlight to `index`, returning the previous selection when it changed
    pub fn select(&mut self, index: usize) -> Option<usize> {
        let previous = self.selected_index();
        if previous == Some(index) || index >= self.items.len() {
            return None;
        }

        for item in &mut self.items {
            item.selected = item.index == index;
        }
        tracing::trace!(?previous, current = index, "Menu selection changed");
        previous
    }

    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Current scroll offset of the strip
    pub fn offset(&self) -> f64 {
        self.offset
    }

    fn max_offset(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    fn clamp_offset(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_offset())
    }

    /// Scroll offset that reveals `page`
    pub fn target_offset(&self, page: usize) -> f64 {
        let Some(item) = self.items.get(page) else {
            return self.offset;
        };

        let target = match self.display_mode {
            DisplayMode::SegmentedControl => 0.0,
            _ if self.display_mode.centers_selected_item() => item.mid_x() - self.viewport_width / 2.0,
            _ => {
                let last = self.items.len().saturating_sub(1).max(1);
                self.max_offset() * page as f64 / last as f64
            }
        };
        self.clamp_offset(target)
    }

    /// Scroll to reveal `page` and describe the motion for the host
    pub fn move_to(&mut self, page: usize, animated: bool) -> Command {
        self.offset = self.target_offset(page);
        Command::MoveStrip {
            page,
            offset: self.offset,
            animated,
        }
    }

    /// Free scrolling by the user; ignored unless the display mode allows it
    pub fn scroll_to_offset(&mut self, offset: f64) -> f64 {
        if self.display_mode.strip_scroll_enabled() {
            self.offset = self.clamp_offset(offset);
        }
        self.offset
    }

    /// Item under a point measured from the strip viewport's left edge
    pub fn item_at(&self, viewport_x: f64) -> Option<usize> {
        let x = viewport_x + self.offset;
        self.items
            .iter()
            .find(|item| x >= item.x && x < item.x + item.width())
            .map(|item| item.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::options::ScrollingPolicy;

    fn cells(text: &str) -> Size {
        Size::new(text.chars().count() as f64, 1.0)
    }

    fn titles() -> Vec<String> {
        ["Users", "Repositories", "Gists", "Organizations"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn options(display_mode: DisplayMode) -> LayoutOptions {
        LayoutOptions {
            display_mode,
            ..Default::default()
        }
    }

    fn free() -> DisplayMode {
        DisplayMode::FlexibleItemWidth {
            center_selected_item: false,
            scrolling: ScrollingPolicy::FreeScroll,
        }
    }

    #[test]
    fn test_items_are_laid_out_end_to_end() {
        let strip = MenuStrip::new(titles(), &options(free()), &cells, 20.0, 0);

        let xs: Vec<f64> = strip.items().iter().map(|i| i.x).collect();
        assert_eq!(xs, vec![0.0, 7.0, 21.0, 28.0]);
        assert_eq!(strip.content_width(), 43.0);
        assert_eq!(strip.selected_index(), Some(0));
    }

    #[test]
    fn test_select_keeps_single_highlight() {
        let mut strip = MenuStrip::new(titles(), &options(free()), &cells, 20.0, 0);

        assert_eq!(strip.select(2), Some(0));
        assert_eq!(strip.select(2), None);
        assert_eq!(strip.select(9), None);
        let selected: Vec<usize> = strip
            .items()
            .iter()
            .filter(|i| i.is_selected())
            .map(|i| i.index)
            .collect();
        assert_eq!(selected, vec![2]);
    }

    #[test]
    fn test_proportional_offset() {
        let mut strip = MenuStrip::new(titles(), &options(free()), &cells, 20.0, 0);

        assert_eq!(strip.target_offset(0), 0.0);
        assert_eq!(strip.target_offset(3), 23.0);
        assert_eq!(
            strip.move_to(1, true),
            Command::MoveStrip {
                page: 1,
                offset: 23.0 / 3.0,
                animated: true,
            }
        );
        assert_eq!(strip.offset(), 23.0 / 3.0);
    }

    #[test]
    fn test_centered_offset_is_clamped() {
        let mode = DisplayMode::FlexibleItemWidth {
            center_selected_item: true,
            scrolling: ScrollingPolicy::FreeScroll,
        };
        let strip = MenuStrip::new(titles(), &options(mode), &cells, 20.0, 0);

        assert_eq!(strip.target_offset(0), 0.0);
        // "Repositories" spans 7..21, centered at 14
        assert_eq!(strip.target_offset(1), 4.0);
        assert_eq!(strip.target_offset(3), 23.0);
    }

    #[test]
    fn test_segmented_never_scrolls() {
        let mut strip = MenuStrip::new(
            titles(),
            &options(DisplayMode::SegmentedControl),
            &cells,
            40.0,
            0,
        );
        assert_eq!(strip.content_width(), 40.0);
        assert_eq!(strip.target_offset(3), 0.0);
        assert_eq!(strip.scroll_to_offset(12.0), 0.0);
        assert_eq!(strip.item_at(25.0), Some(2));

        strip.relayout(&options(DisplayMode::SegmentedControl), &cells, 80.0);
        assert_eq!(strip.item(1).map(|i| i.width()), Some(20.0));
        assert_eq!(strip.item_at(25.0), Some(1));
    }

    #[test]
    fn test_item_at_accounts_for_offset() {
        let mut strip = MenuStrip::new(titles(), &options(free()), &cells, 20.0, 0);
        assert_eq!(strip.item_at(3.0), Some(0));
        strip.scroll_to_offset(10.0);
        assert_eq!(strip.item_at(3.0), Some(1));
        assert_eq!(strip.item_at(100.0), None);
    }
}
