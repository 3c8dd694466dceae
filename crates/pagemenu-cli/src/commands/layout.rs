use anyhow::Result;
use serde::Serialize;

use pagemenu_core::{AppConfig, DisplayMode, LayoutOptions, MenuStrip};
use pagemenu_tui::measure::CellMeasure;

#[derive(Debug, Serialize)]
pub struct LayoutReport {
    pub viewport_width: f64,
    pub content_width: f64,
    pub display_mode: DisplayMode,
    pub items: Vec<ItemReport>,
}

#[derive(Debug, Serialize)]
pub struct ItemReport {
    pub index: usize,
    pub title: String,
    pub x: f64,
    pub width: f64,
    pub label_width: f64,
    pub slot_width: f64,
    /// Strip offset once this item's page is current
    pub strip_offset: f64,
}

pub fn run(config: &AppConfig, width: u16, json: bool, titles: Vec<String>) -> Result<()> {
    let titles = if titles.is_empty() {
        config.page_titles()
    } else {
        titles
    };
    let report = report(titles, &config.menu, f64::from(width));

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} items, strip {} of {} cells\n",
        report.items.len(),
        report.content_width,
        report.viewport_width
    );
    println!(
        "  {:>3}  {:<20} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "#", "title", "x", "width", "label", "slot", "offset"
    );
    for item in &report.items {
        println!(
            "  {:>3}  {:<20} {:>8.1} {:>8.1} {:>8.1} {:>8.1} {:>8.1}",
            item.index,
            item.title,
            item.x,
            item.width,
            item.label_width,
            item.slot_width,
            item.strip_offset
        );
    }

    Ok(())
}

/// Lay out `titles` in a strip `width` cells wide
pub fn report(titles: Vec<String>, options: &LayoutOptions, width: f64) -> LayoutReport {
    let strip = MenuStrip::new(titles, options, &CellMeasure, width, 0);
    let items = strip
        .items()
        .iter()
        .map(|item| ItemReport {
            index: item.index,
            title: item.title.clone(),
            x: item.x,
            width: item.width(),
            label_width: item.geometry.label_size.width,
            slot_width: item.geometry.slot_size.width,
            strip_offset: strip.target_offset(item.index),
        })
        .collect();

    LayoutReport {
        viewport_width: strip.viewport_width(),
        content_width: strip.content_width(),
        display_mode: strip.display_mode(),
        items,
    }
}
