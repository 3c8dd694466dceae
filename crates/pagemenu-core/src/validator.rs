//! Configuration checks run before anything is built

use crate::error::{ConfigError, ScaleAxis};
use crate::options::{ItemMode, LayoutOptions};

/// Validate options against the supplied item and page counts.
///
/// Returns the first violation found.
pub fn validate(
    options: &LayoutOptions,
    item_count: usize,
    page_count: usize,
) -> Result<(), ConfigError> {
    if item_count != page_count {
        return Err(ConfigError::ItemCountMismatch {
            items: item_count,
            pages: page_count,
        });
    }

    if item_count < options.minimum_supported_item_count {
        return Err(ConfigError::ItemCountBelowMinimum {
            count: item_count,
            minimum: options.minimum_supported_item_count,
        });
    }

    if options.default_page >= item_count {
        return Err(ConfigError::DefaultPageOutOfRange {
            default_page: options.default_page,
            item_count,
        });
    }

    validate_scale(&options.item_mode)
}

fn validate_scale(mode: &ItemMode) -> Result<(), ConfigError> {
    if let ItemMode::RoundRect {
        horizontal_scale,
        vertical_scale,
        ..
    } = mode
    {
        for (axis, value) in [
            (ScaleAxis::Horizontal, *horizontal_scale),
            (ScaleAxis::Vertical, *vertical_scale),
        ] {
            // NaN fails the range check too
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidScaleFactor { axis, value });
            }
        }
    }
    Ok(())
}
