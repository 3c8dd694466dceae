use pagemenu_core::{Size, TextMeasure};
use unicode_width::UnicodeWidthStr;

/// Measures titles in terminal cells: display width by one row
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasure;

impl TextMeasure for CellMeasure {
    fn measure(&self, text: &str) -> Size {
        Size::new(text.width() as f64, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measures_display_width() {
        assert_eq!(CellMeasure.measure("Users"), Size::new(5.0, 1.0));
        // Wide characters take two cells
        assert_eq!(CellMeasure.measure("日本"), Size::new(4.0, 1.0));
        assert_eq!(CellMeasure.measure(""), Size::new(0.0, 1.0));
    }
}
