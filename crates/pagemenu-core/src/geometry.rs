//! Menu item geometry
//!
//! Pure functions: the same title, measurer and options always produce the
//! same [`ItemGeometry`].

use serde::Serialize;

use crate::options::{DisplayMode, LayoutOptions, MenuPosition};

/// Titles are measured as a single line inside this box
pub const MEASURE_BOUND: f64 = 1000.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Margin {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Margin {
    pub fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Text measurement supplied by the host (font metrics live there)
pub trait TextMeasure {
    /// Unwrapped bounding box of `text`
    fn measure(&self, text: &str) -> Size;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> Size,
{
    fn measure(&self, text: &str) -> Size {
        self(text)
    }
}

/// Computed layout for one menu item.
///
/// The slot is the box drawn around the label. `outer_margin` separates the
/// slot from the item's neighbours, so the item occupies
/// `slot_size.width + 2 * outer_margin.horizontal` along the strip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ItemGeometry {
    pub label_size: Size,
    pub slot_margin: Margin,
    pub slot_size: Size,
    pub label_margin: Margin,
    pub outer_margin: Margin,
}

impl ItemGeometry {
    /// Horizontal extent of the item within the strip
    pub fn frame_width(&self) -> f64 {
        self.slot_size.width + self.outer_margin.horizontal * 2.0
    }
}

/// Size of the title label for the given display mode
pub fn label_size(
    title: &str,
    measure: &dyn TextMeasure,
    options: &LayoutOptions,
    container_width: f64,
    item_count: usize,
) -> Size {
    let measured = measure.measure(title);
    let measured = Size::new(
        measured.width.clamp(0.0, MEASURE_BOUND),
        measured.height.clamp(0.0, MEASURE_BOUND),
    );

    let width = match options.display_mode {
        DisplayMode::FlexibleItemWidth { .. } => measured.width.ceil(),
        DisplayMode::FixedItemWidth { width, .. } => (width - options.item_margin * 2.0).max(0.0),
        DisplayMode::SegmentedControl => {
            if item_count == 0 {
                0.0
            } else {
                container_width / item_count as f64
            }
        }
    };

    Size::new(width, measured.height.floor())
}

/// Space between the label and the item edges before scaling
pub fn slot_margin(label_height: f64, options: &LayoutOptions) -> Margin {
    let vertical = ((options.menu_height - label_height.ceil()) / 2.0).ceil();
    let horizontal = match options.display_mode {
        DisplayMode::SegmentedControl => 0.0,
        DisplayMode::FlexibleItemWidth { .. } | DisplayMode::FixedItemWidth { .. } => {
            options.item_margin
        }
    };
    Margin::new(horizontal, vertical)
}

/// Full geometry for one item
pub fn item_geometry(
    title: &str,
    measure: &dyn TextMeasure,
    options: &LayoutOptions,
    container_width: f64,
    item_count: usize,
) -> ItemGeometry {
    let label_size = label_size(title, measure, options, container_width, item_count);
    let slot_margin = slot_margin(label_size.height, options);
    let (h_scale, v_scale) = options.item_mode.scale();

    let label_margin = Margin::new(slot_margin.horizontal * h_scale, slot_margin.vertical * v_scale);
    let slot_size = Size::new(
        label_size.width + label_margin.horizontal * 2.0,
        label_size.height + label_margin.vertical * 2.0,
    );
    let outer_margin = Margin::new(
        slot_margin.horizontal * (1.0 - h_scale),
        slot_margin.vertical * (1.0 - v_scale),
    );

    ItemGeometry {
        label_size,
        slot_margin,
        slot_size,
        label_margin,
        outer_margin,
    }
}

/// Regions of the widget's container
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ContainerFrames {
    pub menu: Rect,
    pub content: Rect,
    /// Drawn over the content edge next to the menu
    pub separator: Option<Rect>,
}

/// Split the container into menu and content regions
pub fn container_frames(options: &LayoutOptions, container: Size) -> ContainerFrames {
    let menu_height = options.menu_height.clamp(0.0, container.height.max(0.0));
    let content_height = (container.height - menu_height).max(0.0);

    let (menu, content) = match options.menu_position {
        MenuPosition::Top => (
            Rect::new(0.0, 0.0, container.width, menu_height),
            Rect::new(0.0, menu_height, container.width, content_height),
        ),
        MenuPosition::Bottom => (
            Rect::new(0.0, content_height, container.width, menu_height),
            Rect::new(0.0, 0.0, container.width, content_height),
        ),
    };

    let separator = options.separator.enabled.then(|| {
        let size = options.separator.size.min(content_height);
        match options.menu_position {
            MenuPosition::Top => Rect::new(0.0, menu.y + menu.height, container.width, size),
            MenuPosition::Bottom => Rect::new(0.0, menu.y - size, container.width, size),
        }
    });

    ContainerFrames {
        menu,
        content,
        separator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{ItemMode, ScrollingPolicy};

    fn chars(text: &str) -> Size {
        Size::new(text.chars().count() as f64 * 7.5, 17.6)
    }

    fn flexible() -> LayoutOptions {
        LayoutOptions {
            menu_height: 50.0,
            item_margin: 16.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_flexible_width_rounds_up() {
        let options = flexible();
        let geometry = item_geometry("Users", &chars, &options, 320.0, 4);

        assert_eq!(geometry.label_size, Size::new(38.0, 17.0));
        // ceil((50 - 17) / 2)
        assert_eq!(geometry.slot_margin, Margin::new(16.0, 17.0));
        assert_eq!(geometry.label_margin, Margin::new(0.0, 0.0));
        assert_eq!(geometry.slot_size, geometry.label_size);
        assert_eq!(geometry.outer_margin, geometry.slot_margin);
        assert_eq!(geometry.frame_width(), 38.0 + 32.0);
    }

    #[test]
    fn test_fixed_width_subtracts_margin() {
        let options = LayoutOptions {
            display_mode: DisplayMode::FixedItemWidth {
                width: 100.0,
                center_selected_item: false,
                scrolling: ScrollingPolicy::FreeScroll,
            },
            ..flexible()
        };
        let geometry = item_geometry("Repositories", &chars, &options, 320.0, 4);
        assert_eq!(geometry.label_size.width, 68.0);
        assert_eq!(geometry.frame_width(), 100.0);
    }

    #[test]
    fn test_fixed_width_never_negative() {
        let options = LayoutOptions {
            display_mode: DisplayMode::FixedItemWidth {
                width: 10.0,
                center_selected_item: false,
                scrolling: ScrollingPolicy::FreeScroll,
            },
            ..flexible()
        };
        let geometry = item_geometry("A", &chars, &options, 320.0, 4);
        assert_eq!(geometry.label_size.width, 0.0);
    }

    #[test]
    fn test_segmented_splits_container() {
        let options = LayoutOptions {
            display_mode: DisplayMode::SegmentedControl,
            ..flexible()
        };
        let geometry = item_geometry("Gists", &chars, &options, 320.0, 4);
        assert_eq!(geometry.label_size.width, 80.0);
        assert_eq!(geometry.slot_margin.horizontal, 0.0);
        assert_eq!(geometry.frame_width(), 80.0);

        let rotated = item_geometry("Gists", &chars, &options, 480.0, 4);
        assert_eq!(rotated.label_size.width, 120.0);
    }

    #[test]
    fn test_round_rect_scales_inset() {
        let options = LayoutOptions {
            item_mode: ItemMode::RoundRect {
                radius: 10.0,
                horizontal_scale: 0.5,
                vertical_scale: 0.5,
                border_width: 1.0,
                border_color: None,
                selected_border_color: None,
            },
            ..flexible()
        };
        let geometry = item_geometry("Users", &chars, &options, 320.0, 4);

        assert_eq!(geometry.label_margin, Margin::new(8.0, 8.5));
        assert_eq!(geometry.slot_size, Size::new(38.0 + 16.0, 17.0 + 17.0));
        assert_eq!(geometry.outer_margin, Margin::new(8.0, 8.5));
        // Scaling moves space between slot and outer margin without changing the frame
        assert_eq!(geometry.frame_width(), 38.0 + 32.0);
    }

    #[test]
    fn test_measurement_is_clipped() {
        let options = flexible();
        let huge = |_: &str| Size::new(5000.0, 5000.0);
        let geometry = item_geometry("x", &huge, &options, 320.0, 4);
        assert_eq!(geometry.label_size, Size::new(MEASURE_BOUND, MEASURE_BOUND));
    }

    #[test]
    fn test_geometry_is_idempotent() {
        let options = flexible();
        let first = item_geometry("Organizations", &chars, &options, 320.0, 4);
        let second = item_geometry("Organizations", &chars, &options, 320.0, 4);
        assert_eq!(first.label_size.width.to_bits(), second.label_size.width.to_bits());
        assert_eq!(first.slot_margin.vertical.to_bits(), second.slot_margin.vertical.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn test_container_frames() {
        let mut options = flexible();
        let container = Size::new(320.0, 480.0);

        let frames = container_frames(&options, container);
        assert_eq!(frames.menu, Rect::new(0.0, 0.0, 320.0, 50.0));
        assert_eq!(frames.content, Rect::new(0.0, 50.0, 320.0, 430.0));
        assert!(frames.separator.is_none());

        options.menu_position = MenuPosition::Bottom;
        options.separator.enabled = true;
        let frames = container_frames(&options, container);
        assert_eq!(frames.menu, Rect::new(0.0, 430.0, 320.0, 50.0));
        assert_eq!(frames.content, Rect::new(0.0, 0.0, 320.0, 430.0));
        assert_eq!(frames.separator, Some(Rect::new(0.0, 429.0, 320.0, 1.0)));
    }
}
