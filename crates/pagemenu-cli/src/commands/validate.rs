use anyhow::{bail, Result};

use pagemenu_core::{validator, AppConfig, ConfigError, LayoutOptions};

pub fn run(config: &AppConfig, pages: Option<usize>) -> Result<()> {
    let count = pages.unwrap_or(config.pages.len());
    match check(&config.menu, count) {
        Ok(summary) => {
            println!("{}", summary);
            Ok(())
        }
        Err(e) => bail!("Invalid [menu] options: {}", e),
    }
}

/// One-line summary of valid options for `count` pages
fn check(options: &LayoutOptions, count: usize) -> Result<String, ConfigError> {
    validator::validate(options, count, count)?;
    Ok(format!(
        "OK: {} pages, default page {}, minimum {}",
        count, options.default_page, options.minimum_supported_item_count
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagemenu_core::ItemMode;

    #[test]
    fn test_valid_defaults() {
        let options = LayoutOptions::default();
        let summary = check(&options, 4).unwrap();
        assert!(summary.starts_with("OK: 4 pages, default page 0"));
    }

    #[test]
    fn test_default_page_out_of_range() {
        let options = LayoutOptions {
            default_page: 3,
            ..Default::default()
        };
        assert_eq!(
            check(&options, 3),
            Err(ConfigError::DefaultPageOutOfRange {
                default_page: 3,
                item_count: 3
            })
        );
    }

    #[test]
    fn test_bad_scale() {
        let options = LayoutOptions {
            item_mode: ItemMode::RoundRect {
                radius: 0.0,
                horizontal_scale: 1.5,
                vertical_scale: 0.5,
                border_width: 0.0,
                border_color: None,
                selected_border_color: None,
            },
            ..Default::default()
        };
        assert!(matches!(
            check(&options, 4),
            Err(ConfigError::InvalidScaleFactor { .. })
        ));
    }
}
